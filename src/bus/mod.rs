#![doc = r#"
Bus module: the CPU's memory capability and the buses this crate ships.

Overview
- `Bus` is the only thing the CPU core knows about memory: a fallible byte read and
  a fallible byte write over the 16-bit address space. Mirroring, register windows,
  and cartridge mapping all live behind it.
- `FlatRam` is a 64 KiB array that never faults. Tests and the single-step fixtures
  run against it.
- `NromBus` lays out the NES CPU address map (internal RAM, PPU/APU register
  windows, cartridge space) and faults on the expansion gap.

Modules
- ram: 2 KiB internal RAM with 2 KiB mirroring through $1FFF.
- flat: `FlatRam`.
- nrom: `NromBus` and its address decoder.
"#]

use crate::error::BusFault;

pub mod flat;
pub mod nrom;
pub mod ram;

pub use flat::FlatRam;
pub use nrom::NromBus;
pub use ram::Ram;

/// Byte-addressable memory as seen from the CPU.
///
/// Implementations own every address-space policy. A region with no backing
/// returns `BusFault`.
pub trait Bus {
    fn read_byte(&mut self, addr: u16) -> Result<u8, BusFault>;

    fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), BusFault>;

    /// Little-endian word at `addr`, `addr + 1` (wrapping at $FFFF).
    fn read_word(&mut self, addr: u16) -> Result<u16, BusFault> {
        let lo = self.read_byte(addr)? as u16;
        let hi = self.read_byte(addr.wrapping_add(1))? as u16;
        Ok((hi << 8) | lo)
    }
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read_byte(&mut self, addr: u16) -> Result<u8, BusFault> {
        (**self).read_byte(addr)
    }

    #[inline]
    fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), BusFault> {
        (**self).write_byte(addr, value)
    }
}

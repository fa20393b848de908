/*!
Mapper subsystem: trait definition and the NROM (mapper 0) implementation.

The bus forwards CPU $6000..=$FFFF to `Mapper::cpu_read` / `Mapper::cpu_write`.
A mapper owns banking for that window and reports accesses it has no backing
for as `BusFault`, which the CPU propagates out of `step`.

Only mapper 0 is implemented. `for_cartridge` is the factory; other ids are
rejected with `RomError::UnsupportedMapper`.
*/

use crate::cartridge::Cartridge;
use crate::error::{BusFault, RomError};

/// CPU-side cartridge interface.
///
/// All methods take full CPU addresses (unmasked); the bus only forwards
/// $6000..=$FFFF.
pub trait Mapper {
    /// Mapper numeric identifier (0 for NROM).
    fn mapper_id(&self) -> u16;

    fn cpu_read(&mut self, addr: u16) -> Result<u8, BusFault>;

    fn cpu_write(&mut self, addr: u16, value: u8) -> Result<(), BusFault>;

    /// Power-on/reset hook for banking state.
    fn reset(&mut self) {}
}

/// Build the mapper named by the cartridge header.
pub fn for_cartridge(cart: Cartridge) -> Result<Box<dyn Mapper>, RomError> {
    match cart.mapper_id() {
        0 => Ok(Box::new(Nrom::from_cartridge(cart))),
        other => Err(RomError::UnsupportedMapper(other)),
    }
}

/// NROM (mapper 0).
///
/// - PRG ROM: 16 KiB (NROM-128) mirrored or 32 KiB (NROM-256) direct at $8000..=$FFFF.
///   Writes are ignored; NROM has no registers.
/// - PRG RAM: optional at $6000..=$7FFF. Accesses when absent fault.
#[derive(Clone, Debug)]
pub struct Nrom {
    prg_rom: Vec<u8>,
    prg_ram: Vec<u8>,
}

impl Nrom {
    /// - `prg_rom`: PRG ROM bytes (16 KiB or 32 KiB typical)
    /// - `prg_ram_size`: size of PRG RAM in bytes (0 to disable)
    pub fn new(prg_rom: Vec<u8>, prg_ram_size: usize) -> Self {
        Self {
            prg_rom,
            prg_ram: vec![0; prg_ram_size],
        }
    }

    pub fn from_cartridge(cart: Cartridge) -> Self {
        let prg_ram_len = cart.prg_ram_len();
        Self::new(cart.into_prg_rom(), prg_ram_len)
    }

    #[inline]
    fn prg_rom_read(&self, addr: u16) -> Result<u8, BusFault> {
        let len = self.prg_rom.len();
        if len == 0 {
            return Err(BusFault::read(addr));
        }
        let rel = addr.wrapping_sub(0x8000) as usize;
        let idx = if len.is_power_of_two() {
            rel & (len - 1)
        } else {
            rel % len
        };
        Ok(self.prg_rom[idx])
    }

    #[inline]
    fn prg_ram_index(&self, addr: u16) -> Option<usize> {
        if self.prg_ram.is_empty() {
            return None;
        }
        let rel = (addr as usize) - 0x6000;
        Some(rel % self.prg_ram.len())
    }

    pub fn is_nrom_128(&self) -> bool {
        self.prg_rom.len() == 16 * 1024
    }

    pub fn is_nrom_256(&self) -> bool {
        self.prg_rom.len() == 32 * 1024
    }

    pub fn has_prg_ram(&self) -> bool {
        !self.prg_ram.is_empty()
    }
}

impl Mapper for Nrom {
    #[inline]
    fn mapper_id(&self) -> u16 {
        0
    }

    fn cpu_read(&mut self, addr: u16) -> Result<u8, BusFault> {
        match addr {
            0x6000..=0x7FFF => self
                .prg_ram_index(addr)
                .map(|i| self.prg_ram[i])
                .ok_or(BusFault::read(addr)),
            0x8000..=0xFFFF => self.prg_rom_read(addr),
            _ => Err(BusFault::read(addr)),
        }
    }

    fn cpu_write(&mut self, addr: u16, value: u8) -> Result<(), BusFault> {
        match addr {
            0x6000..=0x7FFF => {
                let i = self.prg_ram_index(addr).ok_or(BusFault::write(addr))?;
                self.prg_ram[i] = value;
                Ok(())
            }
            // ROM: ignored.
            0x8000..=0xFFFF => Ok(()),
            _ => Err(BusFault::write(addr)),
        }
    }

    fn reset(&mut self) {}
}

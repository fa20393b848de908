#![doc = r#"
NROM bus: the NES CPU address map around a mapper-0 cartridge.

Address map
- $0000-$1FFF: 2 KiB internal RAM, mirrored every $0800.
- $2000-$3FFF: PPU register window. Eight latches mirrored every 8 bytes.
- $4000-$401F: APU / I/O register window. 32 latches.
- $4020-$5FFF: unmapped on NROM; any access faults.
- $6000-$7FFF: PRG RAM through the mapper (faults when the cartridge has none).
- $8000-$FFFF: PRG ROM through the mapper. Writes are ignored.

Notes
- No PPU or APU runs behind the register windows. A read returns the last
  byte written to that register, which is enough for CPU programs that poll
  or configure hardware without depending on its side effects.
"#]

use crate::bus::{Bus, Ram};
use crate::cartridge::Cartridge;
use crate::error::{BusFault, RomError};
use crate::mapper::{self, Mapper};

pub const PPU_REGISTER_COUNT: usize = 8;
pub const IO_REGISTER_COUNT: usize = 0x20;

#[inline]
fn mirror_ppu_reg(addr: u16) -> usize {
    ((addr - 0x2000) as usize) & (PPU_REGISTER_COUNT - 1)
}

pub struct NromBus {
    ram: Ram,
    ppu_regs: [u8; PPU_REGISTER_COUNT],
    io_regs: [u8; IO_REGISTER_COUNT],
    mapper: Box<dyn Mapper>,
}

impl NromBus {
    /// Build a bus for `cart`. Only mapper 0 is accepted.
    pub fn new(cart: Cartridge) -> Result<Self, RomError> {
        Ok(Self::with_mapper(mapper::for_cartridge(cart)?))
    }

    pub fn with_mapper(mapper: Box<dyn Mapper>) -> Self {
        Self {
            ram: Ram::new(),
            ppu_regs: [0; PPU_REGISTER_COUNT],
            io_regs: [0; IO_REGISTER_COUNT],
            mapper,
        }
    }

    /// Clear RAM and register latches and reset the mapper. Cartridge
    /// contents (PRG RAM included) are left alone.
    pub fn power_cycle(&mut self) {
        self.ram.clear();
        self.ppu_regs = [0; PPU_REGISTER_COUNT];
        self.io_regs = [0; IO_REGISTER_COUNT];
        self.mapper.reset();
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    /// Latched PPU register value for $2000 + `index` (0..8).
    pub fn ppu_register(&self, index: usize) -> u8 {
        self.ppu_regs[index & (PPU_REGISTER_COUNT - 1)]
    }

    /// Latched I/O register value for $4000 + `index` (0..0x20).
    pub fn io_register(&self, index: usize) -> u8 {
        self.io_regs[index & (IO_REGISTER_COUNT - 1)]
    }

    pub fn mapper_id(&self) -> u16 {
        self.mapper.mapper_id()
    }
}

impl Bus for NromBus {
    fn read_byte(&mut self, addr: u16) -> Result<u8, BusFault> {
        match addr {
            0x0000..=0x1FFF => Ok(self.ram.read(addr)),
            0x2000..=0x3FFF => Ok(self.ppu_regs[mirror_ppu_reg(addr)]),
            0x4000..=0x401F => Ok(self.io_regs[(addr - 0x4000) as usize]),
            0x4020..=0x5FFF => Err(BusFault::read(addr)),
            0x6000..=0xFFFF => self.mapper.cpu_read(addr),
        }
    }

    fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), BusFault> {
        match addr {
            0x0000..=0x1FFF => {
                self.ram.write(addr, value);
                Ok(())
            }
            0x2000..=0x3FFF => {
                self.ppu_regs[mirror_ppu_reg(addr)] = value;
                Ok(())
            }
            0x4000..=0x401F => {
                self.io_regs[(addr - 0x4000) as usize] = value;
                Ok(())
            }
            0x4020..=0x5FFF => Err(BusFault::write(addr)),
            0x6000..=0xFFFF => self.mapper.cpu_write(addr, value),
        }
    }
}

/*!
Cartridge with iNES (v1) loader.

Features:
- Parse and validate the 16-byte iNES header from bytes or a file path
- Extract PRG ROM and CHR data (8 KiB CHR RAM allocated when the CHR count is 0)
- Determine mirroring, battery-backed RAM, trainer, mapper ID

Validation:
- Magic must be `NES<1A>`.
- NES 2.0 images (`flags7 & 0x0C == 0x08`) are rejected.
- PAL images (byte 9 bit 0) are rejected; the CPU timing here is NTSC.
- A declared PRG/CHR/trainer section that runs past the end of the image is
  rejected with `RomError::Truncated`. Nothing is returned on failure.

PRG RAM size:
- Header byte 8 gives the size in 8 KiB units.
- When byte 8 is 0, 8 KiB is allocated only if the battery flag is set;
  otherwise the cartridge has no PRG RAM and $6000-$7FFF faults on the bus.
*/

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{HeaderProblem, RomError};

pub const HEADER_LEN: usize = 16;
pub const TRAINER_LEN: usize = 512;
pub const PRG_BANK_LEN: usize = 16 * 1024;
pub const CHR_BANK_LEN: usize = 8 * 1024;
pub const PRG_RAM_UNIT: usize = 8 * 1024;

const MAGIC: &[u8; 4] = b"NES\x1A";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

#[derive(Clone)]
pub struct Cartridge {
    prg_rom: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,

    mapper_id: u16,
    mirroring: Mirroring,
    battery: bool,
    has_trainer: bool,
    prg_ram_len: usize,
}

impl std::fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cartridge")
            .field("mapper_id", &self.mapper_id)
            .field("mirroring", &self.mirroring)
            .field("battery", &self.battery)
            .field("has_trainer", &self.has_trainer)
            .field("prg_rom_len", &self.prg_rom.len())
            .field("chr_len", &self.chr.len())
            .field("chr_is_ram", &self.chr_is_ram)
            .field("prg_ram_len", &self.prg_ram_len)
            .finish()
    }
}

/// Take `len` bytes at `offset`, or report which section ran short.
fn section<'a>(
    data: &'a [u8],
    offset: usize,
    len: usize,
    name: &'static str,
) -> Result<&'a [u8], RomError> {
    let available = data.len().saturating_sub(offset);
    if available < len {
        return Err(RomError::Truncated {
            section: name,
            expected: len,
            actual: available,
        });
    }
    Ok(&data[offset..offset + len])
}

impl Cartridge {
    // -------------- Construction --------------

    /// Parse raw iNES bytes.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, RomError> {
        if data.len() < HEADER_LEN {
            return Err(RomError::HeaderInvalid(HeaderProblem::TooShort));
        }
        if &data[0..4] != MAGIC {
            return Err(RomError::HeaderInvalid(HeaderProblem::BadMagic));
        }

        let prg_banks = data[4] as usize;
        let chr_banks = data[5] as usize;
        let flags6 = data[6];
        let flags7 = data[7];
        let prg_ram_units = data[8] as usize;
        let flags9 = data[9];

        if (flags7 & 0x0C) == 0x08 {
            return Err(RomError::HeaderInvalid(HeaderProblem::Nes20));
        }
        if (flags9 & 0x01) != 0 {
            return Err(RomError::HeaderInvalid(HeaderProblem::Pal));
        }

        // High nibble from flags7, low nibble from flags6
        let mapper_id = ((flags7 & 0xF0) as u16) | ((flags6 >> 4) as u16);

        let four_screen = (flags6 & 0b0000_1000) != 0;
        let vertical = (flags6 & 0b0000_0001) != 0;
        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if vertical {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let battery = (flags6 & 0b0000_0010) != 0;
        let has_trainer = (flags6 & 0b0000_0100) != 0;

        let mut offset = HEADER_LEN;
        if has_trainer {
            section(data, offset, TRAINER_LEN, "trainer")?;
            offset += TRAINER_LEN;
        }

        let prg_rom = section(data, offset, prg_banks * PRG_BANK_LEN, "PRG ROM")?.to_vec();
        offset += prg_rom.len();

        let (chr, chr_is_ram) = if chr_banks == 0 {
            (vec![0; CHR_BANK_LEN], true)
        } else {
            let chr = section(data, offset, chr_banks * CHR_BANK_LEN, "CHR ROM")?.to_vec();
            (chr, false)
        };

        let prg_ram_len = match (prg_ram_units, battery) {
            (0, true) => PRG_RAM_UNIT,
            (0, false) => 0,
            (units, _) => units * PRG_RAM_UNIT,
        };

        debug!(
            "iNES: mapper {} PRG {}x16K CHR {}x8K {:?} battery={} prg_ram={}",
            mapper_id, prg_banks, chr_banks, mirroring, battery, prg_ram_len
        );

        Ok(Self {
            prg_rom,
            chr,
            chr_is_ram,
            mapper_id,
            mirroring,
            battery,
            has_trainer,
            prg_ram_len,
        })
    }

    /// Load a cartridge from an iNES file (.nes).
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        let bytes = fs::read(path)?;
        Self::from_ines_bytes(&bytes)
    }

    // -------------- Accessors --------------

    pub fn mapper_id(&self) -> u16 {
        self.mapper_id
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    pub fn battery_backed(&self) -> bool {
        self.battery
    }

    pub fn has_trainer(&self) -> bool {
        self.has_trainer
    }

    pub fn has_prg_ram(&self) -> bool {
        self.prg_ram_len > 0
    }

    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    pub fn chr(&self) -> &[u8] {
        &self.chr
    }

    pub fn chr_is_ram(&self) -> bool {
        self.chr_is_ram
    }

    pub fn prg_rom_len(&self) -> usize {
        self.prg_rom.len()
    }

    pub fn chr_len(&self) -> usize {
        self.chr.len()
    }

    pub fn prg_ram_len(&self) -> usize {
        self.prg_ram_len
    }

    pub(crate) fn into_prg_rom(self) -> Vec<u8> {
        self.prg_rom
    }
}

/*!
error.rs - Error taxonomy for the CPU core, the bus contract, and ROM loading.

Three failure classes exist:
- `CpuError::IllegalOpcode`: an opcode with no table entry under the strict
  policy. The step is abandoned before any state changes.
- `BusFault`: an access the bus has no region for. Raised by a `Bus`
  implementation and propagated out of `step` unchanged.
- `RomError`: an iNES image that fails header or size validation. Nothing is
  loaded when this is returned.
*/

use thiserror::Error;

/// Direction of a faulting bus access.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl Access {
    pub const fn as_str(self) -> &'static str {
        match self {
            Access::Read => "read",
            Access::Write => "write",
        }
    }
}

/// An access outside every region the bus maps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("bus fault: {} of unmapped address ${addr:04X}", .access.as_str())]
pub struct BusFault {
    pub addr: u16,
    pub access: Access,
}

impl BusFault {
    pub fn read(addr: u16) -> Self {
        Self {
            addr,
            access: Access::Read,
        }
    }

    pub fn write(addr: u16) -> Self {
        Self {
            addr,
            access: Access::Write,
        }
    }
}

/// Errors surfaced by `Cpu::step` / `Cpu::run`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error("illegal opcode ${opcode:02X} at ${pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    #[error(transparent)]
    BusFault(#[from] BusFault),
}

/// Specific header check that rejected an image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum HeaderProblem {
    #[error("image shorter than the 16-byte header")]
    TooShort,
    #[error("missing NES<1A> magic")]
    BadMagic,
    #[error("NES 2.0 images are not supported")]
    Nes20,
    #[error("PAL images are not supported")]
    Pal,
}

/// Errors produced while parsing an iNES image.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("invalid iNES header: {0}")]
    HeaderInvalid(#[from] HeaderProblem),

    #[error("{section} truncated: expected {expected} bytes, found {actual}")]
    Truncated {
        section: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unsupported mapper id {0}")]
    UnsupportedMapper(u16),

    #[error("failed to read ROM file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_fault_converts_into_cpu_error() {
        let err: CpuError = BusFault::write(0x4020).into();
        assert_eq!(err, CpuError::BusFault(BusFault::write(0x4020)));
        assert_eq!(
            err.to_string(),
            "bus fault: write of unmapped address $4020"
        );
    }

    #[test]
    fn messages_name_the_offender() {
        let err = CpuError::IllegalOpcode {
            opcode: 0x02,
            pc: 0x8123,
        };
        assert_eq!(err.to_string(), "illegal opcode $02 at $8123");
        let rom = RomError::HeaderInvalid(HeaderProblem::Pal);
        assert!(rom.to_string().contains("PAL"));
    }

    #[test]
    fn header_problem_is_the_rom_error_source() {
        use std::error::Error as _;

        let rom: RomError = HeaderProblem::BadMagic.into();
        assert_eq!(
            rom.to_string(),
            "invalid iNES header: missing NES<1A> magic"
        );
        let source = rom.source().expect("header problem as source");
        assert_eq!(source.to_string(), "missing NES<1A> magic");
        assert_eq!(
            BusFault::read(0x5000).to_string(),
            "bus fault: read of unmapped address $5000"
        );
    }
}

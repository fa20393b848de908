#![doc = r#"
nes6502 library crate: the NES 2A03 CPU core and the buses it runs against.

Modules:
- bus: `Bus` trait, flat 64 KiB RAM, 2 KiB mirrored internal RAM, NROM bus
- cartridge: iNES v1 loader and header validation
- cpu: 6502 CPU core (facade + state + dispatch + execute modules)
- error: `BusFault`, `CpuError`, `RomError`
- mapper: Mapper trait and NROM (mapper 0) implementation

In tests, shared builders are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod error;
pub mod mapper;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, FlatRam, NromBus};
pub use cartridge::Cartridge;
pub use cpu::core::Cpu;
pub use cpu::{CpuConfig, OpcodePolicy};
pub use error::{BusFault, CpuError, RomError};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

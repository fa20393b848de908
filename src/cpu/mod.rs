/*!
cpu - The 2A03 (6502) CPU core.

```text
state.rs        - Architectural registers and flag masks.
regs.rs         - `CpuRegs`: the register interface semantics are generic over.
flags.rs        - Pure ALU result / carry / overflow functions.
stack.rs        - Page-$01 push / pop.
addressing.rs   - Addressing modes and operand resolution.
table.rs        - Static 256-entry opcode table.
cycles.rs       - Base cycles and dynamic penalties.
execute.rs      - Instruction semantic helpers.
interrupts.rs   - RESET / NMI / IRQ / BRK sequences and the pending latch.
config.rs       - `CpuConfig` and the undocumented-opcode policy.
dispatch/       - One step: interrupt check, then fetch / decode / execute.
core/           - `Cpu`, the public facade.
```

Usage:
```rust
use nes6502::bus::FlatRam;
use nes6502::cpu::Cpu;

let mut bus = FlatRam::new();
bus.load(0x8000, &[0xA9, 0x05, 0x69, 0x03, 0x85, 0x10]);
bus.load_word(0xFFFC, 0x8000);

let mut cpu = Cpu::new();
cpu.reset(&mut bus)?;
cpu.run(&mut bus, 3)?;
assert_eq!(bus.peek(0x0010), 0x08);
# Ok::<(), nes6502::CpuError>(())
```
*/

pub mod addressing;
pub mod config;
pub mod core;
pub mod cycles;
mod dispatch;
pub mod execute;
pub mod flags;
pub mod interrupts;
pub mod regs;
pub mod stack;
pub mod state;
pub mod table;

pub use crate::cpu::config::{CpuConfig, OpcodePolicy};
pub use crate::cpu::core::Cpu;
pub use crate::cpu::interrupts::{Interrupt, PendingInterrupts};
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};

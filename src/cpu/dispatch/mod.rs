/*!
dispatch - Orchestrator for a single 6502 CPU step.

1. Service a pending NMI, or an IRQ when I is clear. The entry sequence is
   the whole step and costs 7 cycles.
2. Otherwise fetch / decode / execute one instruction (`fallback::step`).

Family handlers
===============
Each family module exposes
`handle(entry, resolved, cpu, bus, cycles) -> Result<bool, BusFault>`.
`Ok(true)` means the instruction was executed; handlers may add branch
penalties to `cycles` but never drive the cycle counter.
*/

use crate::bus::Bus;
use crate::cpu::config::CpuConfig;
use crate::cpu::interrupts::{PendingInterrupts, enter};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::IRQ_DISABLE;
use crate::error::CpuError;

mod arithmetic;
mod branches;
mod compare;
mod control_flow;
mod fallback;
mod finalize;
mod load_store;
mod logical;
mod misc;
mod rmw;

/// Execute one CPU step (interrupt entry or one instruction) and return cycles consumed.
pub(crate) fn step<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &mut C,
    bus: &mut B,
    pending: &mut PendingInterrupts,
    config: &CpuConfig,
) -> Result<u32, CpuError> {
    if let Some(kind) = pending.take(cpu.is_flag_set(IRQ_DISABLE)) {
        let pc = cpu.pc();
        return Ok(enter(cpu, bus, kind, pc)?);
    }
    fallback::step(cpu, bus, config)
}

/*!
fallback.rs - Fetch / decode / execute for one instruction.

1. Read the opcode at PC. No table entry: hand it to the opcode policy.
2. Advance PC past the opcode and resolve the operand (advancing PC again).
3. Seed `cycles` with the base count and run the family chain:
   load/store, logical, arithmetic, compare, branches, rmw, control flow,
   misc. Handlers may add branch penalties; none touch the cycle counter.
4. Finalize: page-cross penalty and trace.

Interrupt servicing happens before this, in `dispatch::step`.
*/

use crate::bus::Bus;
use crate::cpu::addressing::resolve;
use crate::cpu::config::CpuConfig;
use crate::cpu::cycles::base_cycles;
use crate::cpu::dispatch::finalize::{finalize, handle_unknown};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::lookup;
use crate::error::CpuError;

pub(super) fn step<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &mut C,
    bus: &mut B,
    config: &CpuConfig,
) -> Result<u32, CpuError> {
    let pc = cpu.pc();
    let opcode = bus.read_byte(pc)?;
    let Some(entry) = lookup(opcode) else {
        return handle_unknown(opcode, cpu, config.opcode_policy);
    };
    cpu.advance_pc_one();

    let r = resolve(entry.mode, cpu, bus)?;
    let mut cycles = base_cycles(entry);

    let handled = super::load_store::handle(entry, &r, cpu, bus, &mut cycles)?
        || super::logical::handle(entry, &r, cpu, bus, &mut cycles)?
        || super::arithmetic::handle(entry, &r, cpu, bus, &mut cycles)?
        || super::compare::handle(entry, &r, cpu, bus, &mut cycles)?
        || super::branches::handle(entry, &r, cpu, bus, &mut cycles)?
        || super::rmw::handle(entry, &r, cpu, bus, &mut cycles)?
        || super::control_flow::handle(entry, &r, cpu, bus, &mut cycles)?
        || super::misc::handle(entry, &r, cpu, bus, &mut cycles)?;

    if !handled {
        // Table entry with no family: a table/handler mismatch.
        return Err(CpuError::IllegalOpcode { opcode, pc });
    }

    Ok(finalize(entry, &r, opcode, pc, cycles))
}

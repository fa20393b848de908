/*!
finalize.rs - Instruction finalization and undocumented-opcode handling.

- `finalize`: adds the page-cross penalty for indexed reads and emits the
  per-instruction trace line. Branch penalties are already in `cycles`.
- `handle_unknown`: applies the configured `OpcodePolicy` to an opcode with
  no table entry. Strict fails with PC still on the offending byte;
  permissive consumes one byte and two cycles.
*/

use log::{trace, warn};

use crate::cpu::addressing::Resolved;
use crate::cpu::config::OpcodePolicy;
use crate::cpu::cycles::{ILLEGAL_NOP_CYCLES, page_cross_penalty};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Opcode;
use crate::error::CpuError;

pub(super) fn finalize(entry: &Opcode, r: &Resolved, opcode: u8, pc: u16, cycles: u32) -> u32 {
    let total = cycles + page_cross_penalty(entry, r.page_crossed);
    trace!(
        "${pc:04X}  {opcode:02X}  {} {:?}  cyc={total}",
        entry.instruction, entry.mode
    );
    total
}

pub(super) fn handle_unknown<C: CpuRegs>(
    opcode: u8,
    cpu: &mut C,
    policy: OpcodePolicy,
) -> Result<u32, CpuError> {
    let pc = cpu.pc();
    match policy {
        OpcodePolicy::Strict => Err(CpuError::IllegalOpcode { opcode, pc }),
        OpcodePolicy::Permissive => {
            warn!("undocumented opcode ${opcode:02X} at ${pc:04X} executed as NOP");
            cpu.advance_pc_one();
            Ok(ILLEGAL_NOP_CYCLES)
        }
    }
}

/*!
load_store.rs - Load / Store family handler (part of the dispatch chain)

Loads (Z/N; indexed reads may pay the page-cross penalty, applied in finalize):
    LDA  LDX  LDY
Stores (no flags, no page-cross penalty; base cycles already cover indexing):
    STA  STX  STY
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Resolved, read_operand};
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::{Instruction, Opcode};
use crate::error::BusFault;

/// Returns `Ok(true)` when `entry` belongs to this family and was executed.
pub(super) fn handle<C: CpuRegs, B: Bus + ?Sized>(
    entry: &Opcode,
    r: &Resolved,
    cpu: &mut C,
    bus: &mut B,
    _cycles: &mut u32,
) -> Result<bool, BusFault> {
    match entry.instruction {
        Instruction::LDA => {
            let v = read_operand(cpu, bus, r.operand)?;
            lda(cpu, v);
        }
        Instruction::LDX => {
            let v = read_operand(cpu, bus, r.operand)?;
            ldx(cpu, v);
        }
        Instruction::LDY => {
            let v = read_operand(cpu, bus, r.operand)?;
            ldy(cpu, v);
        }
        Instruction::STA => bus.write_byte(r.addr(), cpu.a())?,
        Instruction::STX => bus.write_byte(r.addr(), cpu.x())?,
        Instruction::STY => bus.write_byte(r.addr(), cpu.y())?,
        _ => return Ok(false),
    }
    Ok(true)
}

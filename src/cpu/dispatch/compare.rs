/*!
compare.rs - CMP / CPX / CPY family handler

C = register >= operand; Z/N from the wrapped difference. The register is
not modified.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Resolved, read_operand};
use crate::cpu::execute::compare;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::{Instruction, Opcode};
use crate::error::BusFault;

pub(super) fn handle<C: CpuRegs, B: Bus + ?Sized>(
    entry: &Opcode,
    r: &Resolved,
    cpu: &mut C,
    bus: &mut B,
    _cycles: &mut u32,
) -> Result<bool, BusFault> {
    let reg = match entry.instruction {
        Instruction::CMP => cpu.a(),
        Instruction::CPX => cpu.x(),
        Instruction::CPY => cpu.y(),
        _ => return Ok(false),
    };
    let v = read_operand(cpu, bus, r.operand)?;
    compare(cpu, reg, v);
    Ok(true)
}

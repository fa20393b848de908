/*!
logical.rs - AND / ORA / EOR / BIT family handler

AND, ORA and EOR combine the operand into A and set Z/N from the result.
BIT leaves A alone: Z from A & M, N and V from bits 7 and 6 of M.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Resolved, read_operand};
use crate::cpu::execute::{and, bit, eor, ora};
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
    let op: fn(&mut C, u8) = match entry.instruction {
        Instruction::AND => and::<C>,
        Instruction::ORA => ora::<C>,
        Instruction::EOR => eor::<C>,
        Instruction::BIT => bit::<C>,
        _ => return Ok(false),
    };
    let v = read_operand(cpu, bus, r.operand)?;
    op(cpu, v);
    Ok(true)
}

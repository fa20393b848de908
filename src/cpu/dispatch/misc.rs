/*!
misc.rs - Transfers / register inc-dec / stack / flag family handler

Transfers:    TAX TAY TXA TYA TSX TXS (TXS sets no flags)
Inc / dec:    INX INY DEX DEY
Stack:        PHA PLA PHP PLP
Flags:        CLC SEC CLI SEI CLD SED CLV (each touches exactly one bit)
No-op:        NOP

All are fixed-cycle; `*cycles` is left as set by the caller.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Resolved;
use crate::cpu::execute::{
    dex, dey, inx, iny, pha, php, pla, pull_status, set_flag, tax, tay, tsx, txa, txs, tya,
};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::cpu::table::{Instruction, Opcode};
use crate::error::BusFault;

pub(super) fn handle<C: CpuRegs, B: Bus + ?Sized>(
    entry: &Opcode,
    _r: &Resolved,
    cpu: &mut C,
    bus: &mut B,
    _cycles: &mut u32,
) -> Result<bool, BusFault> {
    match entry.instruction {
        // ------ Transfers ------
        Instruction::TAX => tax(cpu),
        Instruction::TAY => tay(cpu),
        Instruction::TXA => txa(cpu),
        Instruction::TYA => tya(cpu),
        Instruction::TSX => tsx(cpu),
        Instruction::TXS => txs(cpu),

        // ------ Increment / Decrement ------
        Instruction::INX => inx(cpu),
        Instruction::INY => iny(cpu),
        Instruction::DEX => dex(cpu),
        Instruction::DEY => dey(cpu),

        // ------ Stack ------
        Instruction::PHA => pha(cpu, bus)?,
        Instruction::PLA => pla(cpu, bus)?,
        Instruction::PHP => php(cpu, bus)?,
        Instruction::PLP => pull_status(cpu, bus)?,

        // ------ Flags ------
        Instruction::CLC => set_flag(cpu, CARRY, false),
        Instruction::SEC => set_flag(cpu, CARRY, true),
        Instruction::CLI => set_flag(cpu, IRQ_DISABLE, false),
        Instruction::SEI => set_flag(cpu, IRQ_DISABLE, true),
        Instruction::CLD => set_flag(cpu, DECIMAL, false),
        Instruction::SED => set_flag(cpu, DECIMAL, true),
        Instruction::CLV => set_flag(cpu, OVERFLOW, false),

        Instruction::NOP => {}
        _ => return Ok(false),
    }
    Ok(true)
}

/*!
branches.rs - Conditional branch family handler

```text
BPL / BMI  (N)     BVC / BVS  (V)
BCC / BCS  (C)     BNE / BEQ  (Z)
```

Timing: 2 base cycles, +1 when taken, +2 when taken onto another page. The
page check compares the target with the PC after the operand byte.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Resolved;
use crate::cpu::execute::{branch, get_flag};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::table::{Instruction, Opcode};
use crate::error::BusFault;

pub(super) fn handle<C: CpuRegs, B: Bus + ?Sized>(
    entry: &Opcode,
    r: &Resolved,
    cpu: &mut C,
    _bus: &mut B,
    cycles: &mut u32,
) -> Result<bool, BusFault> {
    let (mask, when_set) = match entry.instruction {
        Instruction::BPL => (NEGATIVE, false),
        Instruction::BMI => (NEGATIVE, true),
        Instruction::BVC => (OVERFLOW, false),
        Instruction::BVS => (OVERFLOW, true),
        Instruction::BCC => (CARRY, false),
        Instruction::BCS => (CARRY, true),
        Instruction::BNE => (ZERO, false),
        Instruction::BEQ => (ZERO, true),
        _ => return Ok(false),
    };
    let cond = get_flag(cpu, mask) == when_set;
    *cycles += branch(cpu, cond, r);
    Ok(true)
}

/*!
control_flow.rs - Control-flow / system family handler

  JMP abs / JMP (ind)  - PC = operand (indirect page quirk handled in resolve)
  JSR abs              - push PC - 1 (last byte of the JSR), PC = target
  RTS                  - pull PC, add 1
  RTI                  - pull status (B dropped, U forced), then PC
  BRK                  - skip the padding byte, run the BRK entry sequence

BRK does not stop the CPU. It vectors through $FFFE like an IRQ, pushing
its own address + 2 with B set in the pushed status.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Resolved;
use crate::cpu::execute::pull_status;
use crate::cpu::interrupts::{Interrupt, enter};
use crate::cpu::regs::CpuRegs;
use crate::cpu::stack::{pop_word, push_word};
use crate::cpu::table::{Instruction, Opcode};
use crate::error::BusFault;

pub(super) fn handle<C: CpuRegs, B: Bus + ?Sized>(
    entry: &Opcode,
    r: &Resolved,
    cpu: &mut C,
    bus: &mut B,
    _cycles: &mut u32,
) -> Result<bool, BusFault> {
    match entry.instruction {
        Instruction::JMP => cpu.set_pc(r.addr()),
        Instruction::JSR => {
            let ret = cpu.pc().wrapping_sub(1);
            push_word(cpu, bus, ret)?;
            cpu.set_pc(r.addr());
        }
        Instruction::RTS => {
            let ret = pop_word(cpu, bus)?;
            cpu.set_pc(ret.wrapping_add(1));
        }
        Instruction::RTI => {
            pull_status(cpu, bus)?;
            let ret = pop_word(cpu, bus)?;
            cpu.set_pc(ret);
        }
        Instruction::BRK => {
            let ret = cpu.pc().wrapping_add(1);
            // Entry cost equals BRK's base count; nothing to add.
            enter(cpu, bus, Interrupt::Brk, ret)?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{BREAK, CARRY, IRQ_DISABLE, UNUSED};
    use crate::test_utils::flat_cpu_with_program;

    #[test]
    fn jsr_rts_round_trip() {
        // $8000 JSR $8010 ... $8010 RTS
        let mut prg = vec![0xEA; 0x11];
        prg[0..3].copy_from_slice(&[0x20, 0x10, 0x80]);
        prg[0x10] = 0x60;
        let (mut cpu, mut bus) = flat_cpu_with_program(&prg);
        assert_eq!(cpu.step(&mut bus), Ok(6));
        assert_eq!(cpu.pc(), 0x8010);
        assert_eq!(bus.peek(0x01FD), 0x80);
        assert_eq!(bus.peek(0x01FC), 0x02);
        assert_eq!(cpu.step(&mut bus), Ok(6));
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn jmp_indirect_uses_page_quirk() {
        let (mut cpu, mut bus) = flat_cpu_with_program(&[0x6C, 0xFF, 0x30]);
        bus.poke(0x30FF, 0x40);
        bus.poke(0x3000, 0x80);
        assert_eq!(cpu.step(&mut bus), Ok(5));
        assert_eq!(cpu.pc(), 0x8040);
    }

    #[test]
    fn brk_then_rti() {
        // $8000 BRK (pad); handler at $9000: RTI
        let (mut cpu, mut bus) = flat_cpu_with_program(&[0x00, 0xFF, 0xEA]);
        bus.load_word(0xFFFE, 0x9000);
        bus.poke(0x9000, 0x40);
        cpu.set_status(CARRY | UNUSED);

        assert_eq!(cpu.step(&mut bus), Ok(7));
        assert_eq!(cpu.pc(), 0x9000);
        assert!(cpu.get_flag(IRQ_DISABLE));
        assert_eq!(bus.peek(0x01FD), 0x80);
        assert_eq!(bus.peek(0x01FC), 0x02);
        assert_eq!(bus.peek(0x01FB), CARRY | UNUSED | BREAK);

        assert_eq!(cpu.step(&mut bus), Ok(6));
        assert_eq!(cpu.pc(), 0x8002);
        assert_eq!(cpu.status(), CARRY | UNUSED);
    }
}

/*!
rmw.rs - Read-modify-write family handler: ASL / LSR / ROL / ROR / INC / DEC

Memory forms read the operand, write it back unchanged, then write the
result (the 2A03's double write). Accumulator forms of the shifts operate on
A with no bus traffic. Indexed forms carry their extra cycle in the base
count, so no page-cross penalty is ever added here.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Resolved;
use crate::cpu::execute::{asl, dec, inc, lsr, rmw, rol, ror};
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
    let op: fn(&mut C, u8) -> u8 = match entry.instruction {
        Instruction::ASL => asl::<C>,
        Instruction::LSR => lsr::<C>,
        Instruction::ROL => rol::<C>,
        Instruction::ROR => ror::<C>,
        Instruction::INC => inc::<C>,
        Instruction::DEC => dec::<C>,
        _ => return Ok(false),
    };
    rmw(cpu, bus, r.operand, op)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{CARRY, NEGATIVE, ZERO};
    use crate::test_utils::flat_cpu_with_program;

    #[test]
    fn accumulator_shifts() {
        // LDA #$81; ASL A; ROR A; LSR A; ROL A
        let (mut cpu, mut bus) =
            flat_cpu_with_program(&[0xA9, 0x81, 0x0A, 0x6A, 0x4A, 0x2A]);
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.step(&mut bus), Ok(2));
        assert_eq!(cpu.a(), 0x02);
        assert!(cpu.get_flag(CARRY));
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a(), 0x81);
        assert!(!cpu.get_flag(CARRY));
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a(), 0x40);
        assert!(cpu.get_flag(CARRY));
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a(), 0x81);
        assert!(cpu.get_flag(NEGATIVE));
    }

    #[test]
    fn inc_dec_memory_cycles() {
        // INC $10; DEC $0300,X; INC $0300,X
        let (mut cpu, mut bus) =
            flat_cpu_with_program(&[0xE6, 0x10, 0xDE, 0x00, 0x03, 0xFE, 0x00, 0x03]);
        bus.poke(0x0010, 0xFF);
        bus.poke(0x0300, 0x01);
        assert_eq!(cpu.step(&mut bus), Ok(5));
        assert_eq!(bus.peek(0x0010), 0x00);
        assert!(cpu.get_flag(ZERO));
        assert_eq!(cpu.step(&mut bus), Ok(7));
        assert_eq!(bus.peek(0x0300), 0x00);
        assert_eq!(cpu.step(&mut bus), Ok(7));
        assert_eq!(bus.peek(0x0300), 0x01);
    }

    #[test]
    fn rol_memory_through_carry() {
        // SEC; ROL $20
        let (mut cpu, mut bus) = flat_cpu_with_program(&[0x38, 0x26, 0x20]);
        bus.poke(0x0020, 0x80);
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.step(&mut bus), Ok(5));
        assert_eq!(bus.peek(0x0020), 0x01);
        assert!(cpu.get_flag(CARRY));
    }
}

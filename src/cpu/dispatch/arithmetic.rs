/*!
arithmetic.rs - ADC / SBC family handler

Binary arithmetic only: the D flag is never consulted. SBC is ADC of the
inverted operand, so both share carry and overflow rules.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Resolved, read_operand};
use crate::cpu::execute::{adc, sbc};
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
    match entry.instruction {
        Instruction::ADC => {
            let v = read_operand(cpu, bus, r.operand)?;
            adc(cpu, v);
        }
        Instruction::SBC => {
            let v = read_operand(cpu, bus, r.operand)?;
            sbc(cpu, v);
        }
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{CARRY, DECIMAL, OVERFLOW, ZERO};
    use crate::test_utils::flat_cpu_with_program;

    #[test]
    fn adc_then_store() {
        // LDA #$05; ADC #$03; STA $10
        let (mut cpu, mut bus) = flat_cpu_with_program(&[0xA9, 0x05, 0x69, 0x03, 0x85, 0x10]);
        cpu.run(&mut bus, 3).unwrap();
        assert_eq!(cpu.a(), 0x08);
        assert_eq!(bus.peek(0x0010), 0x08);
        assert!(!cpu.get_flag(CARRY | ZERO | OVERFLOW));
    }

    #[test]
    fn sbc_in_decimal_mode_is_binary() {
        // SED; SEC; LDA #$10; SBC #$01
        let (mut cpu, mut bus) = flat_cpu_with_program(&[0xF8, 0x38, 0xA9, 0x10, 0xE9, 0x01]);
        cpu.run(&mut bus, 4).unwrap();
        assert!(cpu.get_flag(DECIMAL));
        assert_eq!(cpu.a(), 0x0F);
        assert!(cpu.get_flag(CARRY));
    }

    #[test]
    fn adc_carry_chain() {
        // SEC; LDA #$FF; ADC #$00 -> 0x00, C=1
        let (mut cpu, mut bus) = flat_cpu_with_program(&[0x38, 0xA9, 0xFF, 0x69, 0x00]);
        cpu.run(&mut bus, 3).unwrap();
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.get_flag(CARRY));
        assert!(cpu.get_flag(ZERO));
    }
}

/*!
table.rs - Static 256-entry opcode table.

Each documented opcode maps to `(instruction, addressing mode, base cycles,
page-cross penalty)`. Undocumented opcodes are `None`; the dispatcher hands
those to the opcode policy.

`page_penalty` is set only for read instructions in ABSOLUTE_X, ABSOLUTE_Y
and INDIRECT_Y form (ADC AND CMP EOR LDA LDX LDY ORA SBC). Stores and
read-modify-write forms already include the extra cycle in their base count.
Branch penalties are dynamic and live in `cycles.rs`.
*/

use std::fmt;

use crate::cpu::addressing::AddrMode;

/// The 56 documented 6502 instructions.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    ADC,
    AND,
    ASL,
    BCC,
    BCS,
    BEQ,
    BIT,
    BMI,
    BNE,
    BPL,
    BRK,
    BVC,
    BVS,
    CLC,
    CLD,
    CLI,
    CLV,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    EOR,
    INC,
    INX,
    INY,
    JMP,
    JSR,
    LDA,
    LDX,
    LDY,
    LSR,
    NOP,
    ORA,
    PHA,
    PHP,
    PLA,
    PLP,
    ROL,
    ROR,
    RTI,
    RTS,
    SBC,
    SEC,
    SED,
    SEI,
    STA,
    STX,
    STY,
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub instruction: Instruction,
    pub mode: AddrMode,
    pub cycles: u8,
    pub page_penalty: bool,
}

const fn op(instruction: Instruction, mode: AddrMode, cycles: u8) -> Option<Opcode> {
    Some(Opcode {
        instruction,
        mode,
        cycles,
        page_penalty: false,
    })
}

/// Read form that pays +1 when indexing crosses a page.
const fn op_pc(instruction: Instruction, mode: AddrMode, cycles: u8) -> Option<Opcode> {
    Some(Opcode {
        instruction,
        mode,
        cycles,
        page_penalty: true,
    })
}

pub static OPCODES: [Option<Opcode>; 256] = build_table();

#[inline]
pub fn lookup(opcode: u8) -> Option<&'static Opcode> {
    OPCODES[opcode as usize].as_ref()
}

const fn build_table() -> [Option<Opcode>; 256] {
    use AddrMode::*;
    use Instruction::*;

    let mut t: [Option<Opcode>; 256] = [None; 256];

    // ---------------- Loads ----------------
    t[0xA9] = op(LDA, Immediate, 2);
    t[0xA5] = op(LDA, ZeroPage, 3);
    t[0xB5] = op(LDA, ZeroPageX, 4);
    t[0xAD] = op(LDA, Absolute, 4);
    t[0xBD] = op_pc(LDA, AbsoluteX, 4);
    t[0xB9] = op_pc(LDA, AbsoluteY, 4);
    t[0xA1] = op(LDA, IndirectX, 6);
    t[0xB1] = op_pc(LDA, IndirectY, 5);

    t[0xA2] = op(LDX, Immediate, 2);
    t[0xA6] = op(LDX, ZeroPage, 3);
    t[0xB6] = op(LDX, ZeroPageY, 4);
    t[0xAE] = op(LDX, Absolute, 4);
    t[0xBE] = op_pc(LDX, AbsoluteY, 4);

    t[0xA0] = op(LDY, Immediate, 2);
    t[0xA4] = op(LDY, ZeroPage, 3);
    t[0xB4] = op(LDY, ZeroPageX, 4);
    t[0xAC] = op(LDY, Absolute, 4);
    t[0xBC] = op_pc(LDY, AbsoluteX, 4);

    // ---------------- Stores ----------------
    t[0x85] = op(STA, ZeroPage, 3);
    t[0x95] = op(STA, ZeroPageX, 4);
    t[0x8D] = op(STA, Absolute, 4);
    t[0x9D] = op(STA, AbsoluteX, 5);
    t[0x99] = op(STA, AbsoluteY, 5);
    t[0x81] = op(STA, IndirectX, 6);
    t[0x91] = op(STA, IndirectY, 6);

    t[0x86] = op(STX, ZeroPage, 3);
    t[0x96] = op(STX, ZeroPageY, 4);
    t[0x8E] = op(STX, Absolute, 4);

    t[0x84] = op(STY, ZeroPage, 3);
    t[0x94] = op(STY, ZeroPageX, 4);
    t[0x8C] = op(STY, Absolute, 4);

    // ---------------- Logical ----------------
    t[0x29] = op(AND, Immediate, 2);
    t[0x25] = op(AND, ZeroPage, 3);
    t[0x35] = op(AND, ZeroPageX, 4);
    t[0x2D] = op(AND, Absolute, 4);
    t[0x3D] = op_pc(AND, AbsoluteX, 4);
    t[0x39] = op_pc(AND, AbsoluteY, 4);
    t[0x21] = op(AND, IndirectX, 6);
    t[0x31] = op_pc(AND, IndirectY, 5);

    t[0x09] = op(ORA, Immediate, 2);
    t[0x05] = op(ORA, ZeroPage, 3);
    t[0x15] = op(ORA, ZeroPageX, 4);
    t[0x0D] = op(ORA, Absolute, 4);
    t[0x1D] = op_pc(ORA, AbsoluteX, 4);
    t[0x19] = op_pc(ORA, AbsoluteY, 4);
    t[0x01] = op(ORA, IndirectX, 6);
    t[0x11] = op_pc(ORA, IndirectY, 5);

    t[0x49] = op(EOR, Immediate, 2);
    t[0x45] = op(EOR, ZeroPage, 3);
    t[0x55] = op(EOR, ZeroPageX, 4);
    t[0x4D] = op(EOR, Absolute, 4);
    t[0x5D] = op_pc(EOR, AbsoluteX, 4);
    t[0x59] = op_pc(EOR, AbsoluteY, 4);
    t[0x41] = op(EOR, IndirectX, 6);
    t[0x51] = op_pc(EOR, IndirectY, 5);

    t[0x24] = op(BIT, ZeroPage, 3);
    t[0x2C] = op(BIT, Absolute, 4);

    // ---------------- Arithmetic ----------------
    t[0x69] = op(ADC, Immediate, 2);
    t[0x65] = op(ADC, ZeroPage, 3);
    t[0x75] = op(ADC, ZeroPageX, 4);
    t[0x6D] = op(ADC, Absolute, 4);
    t[0x7D] = op_pc(ADC, AbsoluteX, 4);
    t[0x79] = op_pc(ADC, AbsoluteY, 4);
    t[0x61] = op(ADC, IndirectX, 6);
    t[0x71] = op_pc(ADC, IndirectY, 5);

    t[0xE9] = op(SBC, Immediate, 2);
    t[0xE5] = op(SBC, ZeroPage, 3);
    t[0xF5] = op(SBC, ZeroPageX, 4);
    t[0xED] = op(SBC, Absolute, 4);
    t[0xFD] = op_pc(SBC, AbsoluteX, 4);
    t[0xF9] = op_pc(SBC, AbsoluteY, 4);
    t[0xE1] = op(SBC, IndirectX, 6);
    t[0xF1] = op_pc(SBC, IndirectY, 5);

    // ---------------- Compare ----------------
    t[0xC9] = op(CMP, Immediate, 2);
    t[0xC5] = op(CMP, ZeroPage, 3);
    t[0xD5] = op(CMP, ZeroPageX, 4);
    t[0xCD] = op(CMP, Absolute, 4);
    t[0xDD] = op_pc(CMP, AbsoluteX, 4);
    t[0xD9] = op_pc(CMP, AbsoluteY, 4);
    t[0xC1] = op(CMP, IndirectX, 6);
    t[0xD1] = op_pc(CMP, IndirectY, 5);

    t[0xE0] = op(CPX, Immediate, 2);
    t[0xE4] = op(CPX, ZeroPage, 3);
    t[0xEC] = op(CPX, Absolute, 4);

    t[0xC0] = op(CPY, Immediate, 2);
    t[0xC4] = op(CPY, ZeroPage, 3);
    t[0xCC] = op(CPY, Absolute, 4);

    // ---------------- Branches ----------------
    t[0x90] = op(BCC, Relative, 2);
    t[0xB0] = op(BCS, Relative, 2);
    t[0xF0] = op(BEQ, Relative, 2);
    t[0x30] = op(BMI, Relative, 2);
    t[0xD0] = op(BNE, Relative, 2);
    t[0x10] = op(BPL, Relative, 2);
    t[0x50] = op(BVC, Relative, 2);
    t[0x70] = op(BVS, Relative, 2);

    // ---------------- Read-modify-write ----------------
    t[0x0A] = op(ASL, Accumulator, 2);
    t[0x06] = op(ASL, ZeroPage, 5);
    t[0x16] = op(ASL, ZeroPageX, 6);
    t[0x0E] = op(ASL, Absolute, 6);
    t[0x1E] = op(ASL, AbsoluteX, 7);

    t[0x4A] = op(LSR, Accumulator, 2);
    t[0x46] = op(LSR, ZeroPage, 5);
    t[0x56] = op(LSR, ZeroPageX, 6);
    t[0x4E] = op(LSR, Absolute, 6);
    t[0x5E] = op(LSR, AbsoluteX, 7);

    t[0x2A] = op(ROL, Accumulator, 2);
    t[0x26] = op(ROL, ZeroPage, 5);
    t[0x36] = op(ROL, ZeroPageX, 6);
    t[0x2E] = op(ROL, Absolute, 6);
    t[0x3E] = op(ROL, AbsoluteX, 7);

    t[0x6A] = op(ROR, Accumulator, 2);
    t[0x66] = op(ROR, ZeroPage, 5);
    t[0x76] = op(ROR, ZeroPageX, 6);
    t[0x6E] = op(ROR, Absolute, 6);
    t[0x7E] = op(ROR, AbsoluteX, 7);

    t[0xE6] = op(INC, ZeroPage, 5);
    t[0xF6] = op(INC, ZeroPageX, 6);
    t[0xEE] = op(INC, Absolute, 6);
    t[0xFE] = op(INC, AbsoluteX, 7);

    t[0xC6] = op(DEC, ZeroPage, 5);
    t[0xD6] = op(DEC, ZeroPageX, 6);
    t[0xCE] = op(DEC, Absolute, 6);
    t[0xDE] = op(DEC, AbsoluteX, 7);

    // ---------------- Control flow ----------------
    t[0x4C] = op(JMP, Absolute, 3);
    t[0x6C] = op(JMP, Indirect, 5);
    t[0x20] = op(JSR, Absolute, 6);
    t[0x60] = op(RTS, Implied, 6);
    t[0x40] = op(RTI, Implied, 6);
    t[0x00] = op(BRK, Implied, 7);

    // ---------------- Register / stack / flags ----------------
    t[0xE8] = op(INX, Implied, 2);
    t[0xC8] = op(INY, Implied, 2);
    t[0xCA] = op(DEX, Implied, 2);
    t[0x88] = op(DEY, Implied, 2);

    t[0xAA] = op(TAX, Implied, 2);
    t[0xA8] = op(TAY, Implied, 2);
    t[0xBA] = op(TSX, Implied, 2);
    t[0x8A] = op(TXA, Implied, 2);
    t[0x9A] = op(TXS, Implied, 2);
    t[0x98] = op(TYA, Implied, 2);

    t[0x48] = op(PHA, Implied, 3);
    t[0x08] = op(PHP, Implied, 3);
    t[0x68] = op(PLA, Implied, 4);
    t[0x28] = op(PLP, Implied, 4);

    t[0x18] = op(CLC, Implied, 2);
    t[0x38] = op(SEC, Implied, 2);
    t[0x58] = op(CLI, Implied, 2);
    t[0x78] = op(SEI, Implied, 2);
    t[0xB8] = op(CLV, Implied, 2);
    t[0xD8] = op(CLD, Implied, 2);
    t[0xF8] = op(SED, Implied, 2);

    t[0xEA] = op(NOP, Implied, 2);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_opcode_count() {
        assert_eq!(OPCODES.iter().filter(|e| e.is_some()).count(), 151);
    }

    #[test]
    fn every_instruction_has_an_opcode() {
        let mut seen: Vec<Instruction> = OPCODES.iter().flatten().map(|e| e.instruction).collect();
        seen.sort_by_key(|i| *i as u8);
        seen.dedup();
        assert_eq!(seen.len(), 56);
    }

    #[test]
    fn page_penalty_only_on_indexed_reads() {
        for e in OPCODES.iter().flatten().filter(|e| e.page_penalty) {
            assert!(matches!(
                e.mode,
                AddrMode::AbsoluteX | AddrMode::AbsoluteY | AddrMode::IndirectY
            ));
            assert!(!matches!(
                e.instruction,
                Instruction::STA | Instruction::INC | Instruction::DEC | Instruction::ASL
            ));
        }
        assert!(lookup(0xBD).unwrap().page_penalty);
        assert!(!lookup(0x9D).unwrap().page_penalty);
        assert!(!lookup(0x1E).unwrap().page_penalty);
    }

    #[test]
    fn undocumented_slots_are_empty() {
        for op in [0x02u8, 0x03, 0x1A, 0x80, 0xEB, 0xFF] {
            assert!(lookup(op).is_none(), "{op:#04X}");
        }
    }

    #[test]
    fn mnemonic_display() {
        assert_eq!(lookup(0x6C).unwrap().instruction.to_string(), "JMP");
        assert_eq!(lookup(0x6C).unwrap().mode, AddrMode::Indirect);
    }
}

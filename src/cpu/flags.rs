/*!
flags.rs - Pure ALU helpers that compute results and the C/V flags.

Nothing here touches registers or the bus. Callers apply Z/N from the
returned value via `CpuRegs::update_zn` and store C/V where the
instruction documents it.

The 2A03 has no BCD unit, so neither helper looks at the D flag.
*/

/// Result of an add/subtract: the 8-bit value plus the carry and overflow outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluResult {
    pub value: u8,
    pub carry: bool,
    pub overflow: bool,
}

/// A + M + C. Carry out of bit 7; signed overflow when both inputs share a
/// sign the result does not.
#[inline]
pub fn add_with_carry(a: u8, m: u8, carry_in: bool) -> AluResult {
    let sum = a as u16 + m as u16 + carry_in as u16;
    let value = sum as u8;
    AluResult {
        value,
        carry: sum > 0xFF,
        overflow: ((a ^ value) & (m ^ value) & 0x80) != 0,
    }
}

/// A - M - !C, computed as A + !M + C. Carry set means no borrow.
#[inline]
pub fn sub_with_borrow(a: u8, m: u8, carry_in: bool) -> AluResult {
    add_with_carry(a, !m, carry_in)
}

/// CMP/CPX/CPY: (carry = reg >= m, difference for Z/N).
#[inline]
pub fn compare(reg: u8, m: u8) -> (bool, u8) {
    (reg >= m, reg.wrapping_sub(m))
}

/// Shift left; bit 7 goes to carry.
#[inline]
pub fn asl(v: u8) -> (u8, bool) {
    (v << 1, (v & 0x80) != 0)
}

/// Shift right; bit 0 goes to carry.
#[inline]
pub fn lsr(v: u8) -> (u8, bool) {
    (v >> 1, (v & 0x01) != 0)
}

/// Rotate left through carry.
#[inline]
pub fn rol(v: u8, carry_in: bool) -> (u8, bool) {
    ((v << 1) | carry_in as u8, (v & 0x80) != 0)
}

/// Rotate right through carry.
#[inline]
pub fn ror(v: u8, carry_in: bool) -> (u8, bool) {
    ((v >> 1) | ((carry_in as u8) << 7), (v & 0x01) != 0)
}

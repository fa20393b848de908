/*!
state.rs - Canonical 6502 CPU architectural state (registers + flags).

`CpuState` owns every architecturally visible register. It excludes:
  - Bus / memory logic
  - Instruction decode / dispatch logic
  - Timing / cycle accounting
Those live in the dispatch, execute, and core layers.

Setters do not mask bits. The UNUSED bit is forced on the read side
(`status()`), and BREAK is dropped by PLP/RTI when a pushed copy is pulled.

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (always reads as 1)
  B = BREAK (set only in copies pushed by PHP/BRK)
  D = DECIMAL (settable, ignored by ADC/SBC on the 2A03)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY
*/

/// Processor status flag bit masks.
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Stack pointer after the reset sequence (three suppressed pushes from $00).
pub const RESET_SP: u8 = 0xFD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: RESET_SP,
            pc: 0x0000,
            status: IRQ_DISABLE | UNUSED,
        }
    }
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Basic Accessors (Read)
    // ---------------------------------------------------------------------
    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }
    /// Status as software observes it: bit 5 always reads 1.
    #[inline]
    pub fn status(&self) -> u8 {
        self.status | UNUSED
    }

    // ---------------------------------------------------------------------
    // Mutators (Write)
    // ---------------------------------------------------------------------
    #[inline]
    pub fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    pub fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    pub fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    pub fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    pub fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    pub fn set_status(&mut self, v: u8) {
        self.status = v;
    }

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        (self.status & mask) != 0
    }

    #[inline]
    pub fn set_flag_bit(&mut self, mask: u8) {
        self.status |= mask;
    }

    #[inline]
    pub fn clear_flag_bit(&mut self, mask: u8) {
        self.status &= !mask;
    }

    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.set_flag_bit(mask);
        } else {
            self.clear_flag_bit(mask);
        }
    }

    #[inline]
    pub fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, (result & 0x80) != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_power_up() {
        let s = CpuState::new();
        assert_eq!(s.a(), 0);
        assert_eq!(s.x(), 0);
        assert_eq!(s.y(), 0);
        assert_eq!(s.sp(), 0xFD);
        assert!(s.is_flag_set(IRQ_DISABLE));
        assert!(s.is_flag_set(UNUSED));
    }

    #[test]
    fn unused_bit_always_reads_set() {
        let mut s = CpuState::new();
        s.set_status(0x00);
        assert_eq!(s.status(), UNUSED);
        s.set_status(NEGATIVE | CARRY);
        assert_eq!(s.status(), NEGATIVE | UNUSED | CARRY);
    }

    #[test]
    fn flag_assignment() {
        let mut s = CpuState::new();
        s.clear_flag_bit(IRQ_DISABLE);
        assert!(!s.is_flag_set(IRQ_DISABLE));
        s.set_flag_bit(IRQ_DISABLE);
        assert!(s.is_flag_set(IRQ_DISABLE));
        s.assign_flag(DECIMAL, true);
        assert!(s.is_flag_set(DECIMAL));
        s.assign_flag(DECIMAL, false);
        assert!(!s.is_flag_set(DECIMAL));
    }

    #[test]
    fn update_zn_behavior() {
        let mut s = CpuState::new();
        s.update_zn(0x00);
        assert!(s.is_flag_set(ZERO));
        assert!(!s.is_flag_set(NEGATIVE));
        s.update_zn(0x80);
        assert!(!s.is_flag_set(ZERO));
        assert!(s.is_flag_set(NEGATIVE));
        s.update_zn(0x7F);
        assert!(!s.is_flag_set(ZERO));
        assert!(!s.is_flag_set(NEGATIVE));
    }

    #[test]
    fn pc_advance_wraps() {
        let mut s = CpuState::new();
        s.set_pc(0xFFFF);
        s.advance_pc(1);
        assert_eq!(s.pc(), 0x0000);
        s.advance_pc(2);
        assert_eq!(s.pc(), 0x0002);
    }
}

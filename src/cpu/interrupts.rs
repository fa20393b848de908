/*!
interrupts.rs - RESET / NMI / IRQ / BRK entry sequences and the pending latch.

Entry sequence (NMI, IRQ, BRK)
==============================
1. Push return PC (high, then low).
2. Push status with U set; B set only for BRK.
3. Set I.
4. Load PC from the vector.

RESET performs no stack writes. It zeroes A/X/Y, sets SP to $FD (the
three suppressed pushes from SP = $00), leaves only I and U set in the
status, and loads PC from $FFFC.

Every entry costs `INTERRUPT_CYCLES` (7).

Pending latch
=============
`nmi()` and `irq()` only set a flag. The dispatcher checks the flags at the
next instruction boundary: NMI always wins and is never masked; IRQ waits,
still latched, while I is set.
*/

use std::fmt;

use log::debug;

use crate::bus::Bus;
use crate::cpu::cycles::INTERRUPT_CYCLES;
use crate::cpu::execute::set_flag;
use crate::cpu::regs::CpuRegs;
use crate::cpu::stack::{push, push_word};
use crate::cpu::state::{IRQ_DISABLE, RESET_SP, UNUSED};
use crate::error::BusFault;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Reset,
    Nmi,
    Irq,
    Brk,
}

impl Interrupt {
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Reset => RESET_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq | Interrupt::Brk => IRQ_VECTOR,
        }
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interrupt::Reset => "RESET",
            Interrupt::Nmi => "NMI",
            Interrupt::Irq => "IRQ",
            Interrupt::Brk => "BRK",
        };
        f.write_str(name)
    }
}

/// Run the NMI / IRQ / BRK entry sequence with `return_pc` as the pushed
/// address. RESET is routed to `reset`.
pub(crate) fn enter<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &mut C,
    bus: &mut B,
    kind: Interrupt,
    return_pc: u16,
) -> Result<u32, BusFault> {
    if kind == Interrupt::Reset {
        return reset(cpu, bus);
    }
    push_word(cpu, bus, return_pc)?;
    let status = cpu.compose_status_for_push(kind == Interrupt::Brk);
    push(cpu, bus, status)?;
    set_flag(cpu, IRQ_DISABLE, true);
    let target = bus.read_word(kind.vector())?;
    cpu.set_pc(target);
    debug!("{kind}: return ${return_pc:04X} -> ${target:04X}");
    Ok(INTERRUPT_CYCLES)
}

/// Power-on / reset sequence.
pub(crate) fn reset<C: CpuRegs, B: Bus + ?Sized>(cpu: &mut C, bus: &mut B) -> Result<u32, BusFault> {
    let target = bus.read_word(RESET_VECTOR)?;
    cpu.set_a(0);
    cpu.set_x(0);
    cpu.set_y(0);
    cpu.set_sp(RESET_SP);
    cpu.set_status(IRQ_DISABLE | UNUSED);
    cpu.set_pc(target);
    debug!("RESET: vector ${target:04X}");
    Ok(INTERRUPT_CYCLES)
}

/// NMI / IRQ request latch sampled at instruction boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingInterrupts {
    pub nmi: bool,
    pub irq: bool,
}

impl PendingInterrupts {
    #[inline]
    pub fn request_nmi(&mut self) {
        self.nmi = true;
    }

    #[inline]
    pub fn request_irq(&mut self) {
        self.irq = true;
    }

    #[inline]
    pub fn clear_irq(&mut self) {
        self.irq = false;
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Consume the interrupt to service now, if any. A masked IRQ stays latched.
    pub fn take(&mut self, irq_masked: bool) -> Option<Interrupt> {
        if self.nmi {
            self.nmi = false;
            Some(Interrupt::Nmi)
        } else if self.irq && !irq_masked {
            self.irq = false;
            Some(Interrupt::Irq)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatRam;
    use crate::cpu::state::{BREAK, CARRY, CpuState};

    fn setup() -> (CpuState, FlatRam) {
        let mut bus = FlatRam::new();
        bus.load_word(NMI_VECTOR, 0x9000);
        bus.load_word(RESET_VECTOR, 0x8000);
        bus.load_word(IRQ_VECTOR, 0xA000);
        (CpuState::new(), bus)
    }

    #[test]
    fn nmi_entry_pushes_b_clear() {
        let (mut cpu, mut bus) = setup();
        cpu.set_status(CARRY | UNUSED);
        let cycles = enter(&mut cpu, &mut bus, Interrupt::Nmi, 0x1234).unwrap();
        assert_eq!(cycles, 7);
        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.sp(), 0xFA);
        assert_eq!(bus.peek(0x01FD), 0x12);
        assert_eq!(bus.peek(0x01FC), 0x34);
        assert_eq!(bus.peek(0x01FB), CARRY | UNUSED);
        assert!(cpu.is_flag_set(IRQ_DISABLE));
    }

    #[test]
    fn brk_entry_pushes_b_set() {
        let (mut cpu, mut bus) = setup();
        enter(&mut cpu, &mut bus, Interrupt::Brk, 0x8002).unwrap();
        assert_eq!(cpu.pc(), 0xA000);
        assert_ne!(bus.peek(0x01FB) & BREAK, 0);
        // The live register never carries B.
        assert!(!cpu.is_flag_set(BREAK));
    }

    #[test]
    fn reset_writes_nothing_to_the_stack() {
        let (mut cpu, mut bus) = setup();
        cpu.set_a(1);
        cpu.set_x(2);
        cpu.set_y(3);
        cpu.set_sp(0x10);
        cpu.set_status(0xFF);
        let cycles = enter(&mut cpu, &mut bus, Interrupt::Reset, 0).unwrap();
        assert_eq!(cycles, 7);
        assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0, 0, 0));
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.status(), IRQ_DISABLE | UNUSED);
        assert_eq!(cpu.pc(), 0x8000);
        assert!((0x0100..=0x01FF).all(|a| bus.peek(a) == 0));
    }

    #[test]
    fn pending_priority_and_masking() {
        let mut p = PendingInterrupts::default();
        p.request_irq();
        p.request_nmi();
        assert_eq!(p.take(true), Some(Interrupt::Nmi));
        assert_eq!(p.take(true), None);
        assert!(p.irq, "masked IRQ stays latched");
        assert_eq!(p.take(false), Some(Interrupt::Irq));
        assert_eq!(p.take(false), None);

        p.request_irq();
        p.clear_irq();
        assert_eq!(p.take(false), None);
    }

    #[test]
    fn vectors() {
        assert_eq!(Interrupt::Nmi.vector(), 0xFFFA);
        assert_eq!(Interrupt::Reset.vector(), 0xFFFC);
        assert_eq!(Interrupt::Irq.vector(), 0xFFFE);
        assert_eq!(Interrupt::Brk.vector(), 0xFFFE);
    }
}

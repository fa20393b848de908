//! Hardware stack on page $01. Push writes then decrements; pop increments
//! then reads. SP wraps silently in both directions.

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;
use crate::error::BusFault;

pub const STACK_BASE: u16 = 0x0100;

#[inline]
pub(crate) fn push<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &mut C,
    bus: &mut B,
    v: u8,
) -> Result<(), BusFault> {
    let sp = cpu.sp();
    bus.write_byte(STACK_BASE | sp as u16, v)?;
    cpu.set_sp(sp.wrapping_sub(1));
    Ok(())
}

#[inline]
pub(crate) fn pop<C: CpuRegs, B: Bus + ?Sized>(cpu: &mut C, bus: &mut B) -> Result<u8, BusFault> {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read_byte(STACK_BASE | sp as u16)
}

/// High byte first, so the low byte ends up at the lower address.
#[inline]
pub(crate) fn push_word<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &mut C,
    bus: &mut B,
    v: u16,
) -> Result<(), BusFault> {
    push(cpu, bus, (v >> 8) as u8)?;
    push(cpu, bus, (v & 0xFF) as u8)
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &mut C,
    bus: &mut B,
) -> Result<u16, BusFault> {
    let lo = pop(cpu, bus)? as u16;
    let hi = pop(cpu, bus)? as u16;
    Ok((hi << 8) | lo)
}

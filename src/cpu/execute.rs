/*!
execute.rs - 6502 instruction semantic helpers (ALU, transfers, stack ops, RMW, branch).

Every helper is generic over `CpuRegs` (and `Bus` where memory is touched) and
shared by the dispatch family handlers. Arithmetic and shifts delegate their
result/carry/overflow computation to `flags.rs`; this layer stores the results
into registers and applies Z/N.

Flag discipline
===============
- Loads, transfers (except TXS), INC/DEC, logical ops: Z and N only.
- Compares: C, Z, N.
- ADC/SBC: C, Z, N, V. D is ignored.
- BIT: Z from A & M; N and V copied from bits 7 and 6 of M.
- PHP pushes with B and U set. PLP discards B and forces U.

RMW choreography
================
`rmw` performs read, dummy write of the unmodified value, then the final
write, matching the bus traffic the 2A03 produces. Accumulator forms skip
the bus entirely.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Operand, Resolved, read_operand, write_operand};
use crate::cpu::cycles::branch_penalty;
use crate::cpu::flags;
use crate::cpu::regs::CpuRegs;
use crate::cpu::stack::{pop, push};
use crate::cpu::state::{BREAK, CARRY, NEGATIVE, OVERFLOW, UNUSED, ZERO};
use crate::error::BusFault;

// ---------------------------------------------------------------------------
// Flag helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn set_flag<C: CpuRegs>(cpu: &mut C, mask: u8, on: bool) {
    cpu.assign_flag(mask, on);
}

#[inline]
pub(crate) fn get_flag<C: CpuRegs>(cpu: &C, mask: u8) -> bool {
    cpu.is_flag_set(mask)
}

// ---------------------------------------------------------------------------
// Loads / transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let a = cpu.a();
    ldx(cpu, a);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let a = cpu.a();
    ldy(cpu, a);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    let x = cpu.x();
    lda(cpu, x);
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    let y = cpu.y();
    lda(cpu, y);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    let sp = cpu.sp();
    ldx(cpu, sp);
}

/// TXS leaves the flags alone.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    let x = cpu.x();
    cpu.set_sp(x);
}

// ---------------------------------------------------------------------------
// Register increment / decrement
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_add(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_add(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x().wrapping_sub(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y().wrapping_sub(1);
    ldy(cpu, v);
}

// ---------------------------------------------------------------------------
// Logical
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() & v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() | v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = cpu.a() ^ v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    let zero = (cpu.a() & v) == 0;
    set_flag(cpu, ZERO, zero);
    set_flag(cpu, NEGATIVE, (v & 0x80) != 0);
    set_flag(cpu, OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Arithmetic / compare
// ---------------------------------------------------------------------------

#[inline]
fn store_alu<C: CpuRegs>(cpu: &mut C, r: flags::AluResult) {
    lda(cpu, r.value);
    cpu.update_carry(r.carry);
    cpu.update_overflow(r.overflow);
}

#[inline]
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = flags::add_with_carry(cpu.a(), v, get_flag(cpu, CARRY));
    store_alu(cpu, r);
}

#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let r = flags::sub_with_borrow(cpu.a(), v, get_flag(cpu, CARRY));
    store_alu(cpu, r);
}

#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    let (carry, diff) = flags::compare(reg, v);
    cpu.update_carry(carry);
    cpu.update_zn(diff);
}

// ---------------------------------------------------------------------------
// Shifts / rotates / INC / DEC (value transforms used by `rmw`)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let (r, c) = flags::asl(v);
    cpu.update_carry(c);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let (r, c) = flags::lsr(v);
    cpu.update_carry(c);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let (r, c) = flags::rol(v, get_flag(cpu, CARRY));
    cpu.update_carry(c);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let (r, c) = flags::ror(v, get_flag(cpu, CARRY));
    cpu.update_carry(c);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn inc<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_add(1);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn dec<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v.wrapping_sub(1);
    cpu.update_zn(r);
    r
}

/// Read-modify-write through `operand`: read, dummy write, final write.
pub(crate) fn rmw<C, B, F>(cpu: &mut C, bus: &mut B, operand: Operand, f: F) -> Result<(), BusFault>
where
    C: CpuRegs,
    B: Bus + ?Sized,
    F: FnOnce(&mut C, u8) -> u8,
{
    let old = read_operand(cpu, bus, operand)?;
    if let Operand::Memory(addr) = operand {
        bus.write_byte(addr, old)?;
    }
    let new = f(cpu, old);
    write_operand(cpu, bus, operand, new)
}

// ---------------------------------------------------------------------------
// Stack instructions
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn php<C: CpuRegs, B: Bus + ?Sized>(cpu: &mut C, bus: &mut B) -> Result<(), BusFault> {
    let v = cpu.compose_status_for_push(true);
    push(cpu, bus, v)
}

/// Status pulled from the stack (PLP/RTI): B dropped, U forced.
#[inline]
pub(crate) fn pull_status<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &mut C,
    bus: &mut B,
) -> Result<(), BusFault> {
    let v = pop(cpu, bus)?;
    cpu.set_status((v | UNUSED) & !BREAK);
    Ok(())
}

#[inline]
pub(crate) fn pha<C: CpuRegs, B: Bus + ?Sized>(cpu: &mut C, bus: &mut B) -> Result<(), BusFault> {
    let a = cpu.a();
    push(cpu, bus, a)
}

#[inline]
pub(crate) fn pla<C: CpuRegs, B: Bus + ?Sized>(cpu: &mut C, bus: &mut B) -> Result<(), BusFault> {
    let v = pop(cpu, bus)?;
    lda(cpu, v);
    Ok(())
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// Take the branch when `cond` holds; returns the extra cycles (0, 1 or 2).
#[inline]
pub(crate) fn branch<C: CpuRegs>(cpu: &mut C, cond: bool, target: &Resolved) -> u32 {
    if cond {
        cpu.set_pc(target.addr());
    }
    branch_penalty(cond, target.page_crossed)
}

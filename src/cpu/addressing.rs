/*!
addressing.rs - 6502 addressing modes and operand resolution.

Overview
========
- `AddrMode`: the 13 documented addressing modes.
- `resolve`: consumes the operand bytes at PC (advancing it) and yields the
  effective operand plus whether indexing crossed a page.
- `read_operand` / `write_operand`: load or store through a resolved operand,
  routing the accumulator marker to `A`.

Caller Assumptions
==================
- PC points just past the opcode byte when `resolve` is called.
- Callers advance PC exclusively via the fetch helpers here.

Quirks reproduced
=================
- Zero-page indexed modes wrap inside page zero.
- (zp,X) and (zp),Y pointer high bytes are read from `(zp + 1) & 0xFF`.
- JMP ($xxFF) reads its high byte from $xx00, not the next page.
- Page-cross detection compares the high bytes of the base and the final
  address; for RELATIVE the base is the PC after the operand.

Nothing here applies cycle penalties; `cycles.rs` and the dispatcher do.
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;
use crate::error::BusFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
}

impl AddrMode {
    /// Operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u16 {
        match self {
            AddrMode::Implied | AddrMode::Accumulator => 0,
            AddrMode::Immediate
            | AddrMode::ZeroPage
            | AddrMode::ZeroPageX
            | AddrMode::ZeroPageY
            | AddrMode::IndirectX
            | AddrMode::IndirectY
            | AddrMode::Relative => 1,
            AddrMode::Absolute | AddrMode::AbsoluteX | AddrMode::AbsoluteY | AddrMode::Indirect => 2,
        }
    }
}

/// Effective operand of one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (register-only or stack instructions).
    Implied,
    /// The A register.
    Accumulator,
    /// A bus address. For IMMEDIATE this is the operand byte's own address;
    /// for RELATIVE it is the branch target.
    Memory(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    pub bytes: u16,
    pub page_crossed: bool,
}

impl Resolved {
    /// Address for memory operands. Implied/accumulator yield 0, which no
    /// instruction using those modes reads.
    #[inline]
    pub fn addr(&self) -> u16 {
        match self.operand {
            Operand::Memory(a) => a,
            _ => 0,
        }
    }
}

// -------------------------
// Instruction stream fetch
// -------------------------

/// Fetch next byte from the instruction stream, incrementing PC.
pub(crate) fn fetch_byte<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &mut C,
    bus: &mut B,
) -> Result<u8, BusFault> {
    let v = bus.read_byte(cpu.pc())?;
    cpu.advance_pc_one();
    Ok(v)
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
pub(crate) fn fetch_word<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &mut C,
    bus: &mut B,
) -> Result<u16, BusFault> {
    let lo = fetch_byte(cpu, bus)? as u16;
    let hi = fetch_byte(cpu, bus)? as u16;
    Ok((hi << 8) | lo)
}

// -------------------------
// Low-level pointer reads
// -------------------------

/// Read a 16-bit pointer from zero page; the high byte wraps to $00.
#[inline]
pub(crate) fn read_word_zp<B: Bus + ?Sized>(bus: &mut B, base: u8) -> Result<u16, BusFault> {
    let lo = bus.read_byte(base as u16)? as u16;
    let hi = bus.read_byte(base.wrapping_add(1) as u16)? as u16;
    Ok((hi << 8) | lo)
}

/// JMP (indirect) pointer read: a pointer at $xxFF takes its high byte from $xx00.
#[inline]
pub(crate) fn read_word_indirect_bug<B: Bus + ?Sized>(
    bus: &mut B,
    addr: u16,
) -> Result<u16, BusFault> {
    let lo = bus.read_byte(addr)? as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = bus.read_byte(hi_addr)? as u16;
    Ok((hi << 8) | lo)
}

#[inline]
fn crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

// -------------------------
// Resolution
// -------------------------

pub fn resolve<C: CpuRegs, B: Bus + ?Sized>(
    mode: AddrMode,
    cpu: &mut C,
    bus: &mut B,
) -> Result<Resolved, BusFault> {
    let mut page_crossed = false;
    let operand = match mode {
        AddrMode::Implied => Operand::Implied,
        AddrMode::Accumulator => Operand::Accumulator,
        AddrMode::Immediate => {
            let addr = cpu.pc();
            cpu.advance_pc_one();
            Operand::Memory(addr)
        }
        AddrMode::ZeroPage => Operand::Memory(fetch_byte(cpu, bus)? as u16),
        AddrMode::ZeroPageX => {
            let zp = fetch_byte(cpu, bus)?;
            Operand::Memory(zp.wrapping_add(cpu.x()) as u16)
        }
        AddrMode::ZeroPageY => {
            let zp = fetch_byte(cpu, bus)?;
            Operand::Memory(zp.wrapping_add(cpu.y()) as u16)
        }
        AddrMode::Absolute => Operand::Memory(fetch_word(cpu, bus)?),
        AddrMode::AbsoluteX => {
            let base = fetch_word(cpu, bus)?;
            let addr = base.wrapping_add(cpu.x() as u16);
            page_crossed = crossed(base, addr);
            Operand::Memory(addr)
        }
        AddrMode::AbsoluteY => {
            let base = fetch_word(cpu, bus)?;
            let addr = base.wrapping_add(cpu.y() as u16);
            page_crossed = crossed(base, addr);
            Operand::Memory(addr)
        }
        AddrMode::Indirect => {
            let ptr = fetch_word(cpu, bus)?;
            Operand::Memory(read_word_indirect_bug(bus, ptr)?)
        }
        AddrMode::IndirectX => {
            let zp = fetch_byte(cpu, bus)?.wrapping_add(cpu.x());
            Operand::Memory(read_word_zp(bus, zp)?)
        }
        AddrMode::IndirectY => {
            let zp = fetch_byte(cpu, bus)?;
            let base = read_word_zp(bus, zp)?;
            let addr = base.wrapping_add(cpu.y() as u16);
            page_crossed = crossed(base, addr);
            Operand::Memory(addr)
        }
        AddrMode::Relative => {
            let offset = fetch_byte(cpu, bus)? as i8;
            let next = cpu.pc();
            let target = next.wrapping_add(offset as i16 as u16);
            page_crossed = crossed(next, target);
            Operand::Memory(target)
        }
    };
    Ok(Resolved {
        operand,
        bytes: mode.operand_bytes(),
        page_crossed,
    })
}

// -------------------------
// Operand access
// -------------------------

/// Read the operand value. Implied operands read as A, which only the
/// accumulator-form shifts rely on.
#[inline]
pub(crate) fn read_operand<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &C,
    bus: &mut B,
    operand: Operand,
) -> Result<u8, BusFault> {
    match operand {
        Operand::Memory(addr) => bus.read_byte(addr),
        Operand::Accumulator | Operand::Implied => Ok(cpu.a()),
    }
}

#[inline]
pub(crate) fn write_operand<C: CpuRegs, B: Bus + ?Sized>(
    cpu: &mut C,
    bus: &mut B,
    operand: Operand,
    v: u8,
) -> Result<(), BusFault> {
    match operand {
        Operand::Memory(addr) => bus.write_byte(addr, v),
        Operand::Accumulator | Operand::Implied => {
            cpu.set_a(v);
            Ok(())
        }
    }
}

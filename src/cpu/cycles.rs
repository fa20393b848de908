/*!
cycles.rs - Cycle timing helpers for the 6502 CPU core.

Provides:
  - `base_cycles(entry)`     : documented base count from the opcode table.
  - `page_cross_penalty`     : +1 for indexed reads that crossed a page.
  - `branch_penalty`         : +1 taken, +2 taken across a page.
  - `INTERRUPT_CYCLES`       : RESET / NMI / IRQ / BRK entry length.
  - `ILLEGAL_NOP_CYCLES`     : cost of an undocumented opcode under the
                               permissive policy.

Stores and read-modify-write forms pay their indexed cycle unconditionally
through the base count, so they never get a page-cross penalty here.
*/

use crate::cpu::table::Opcode;

pub const INTERRUPT_CYCLES: u32 = 7;
pub const ILLEGAL_NOP_CYCLES: u32 = 2;

/// Base cycle count before any penalty.
#[inline]
pub(crate) fn base_cycles(entry: &Opcode) -> u32 {
    entry.cycles as u32
}

#[inline]
pub(crate) fn page_cross_penalty(entry: &Opcode, crossed: bool) -> u32 {
    (entry.page_penalty && crossed) as u32
}

#[inline]
pub(crate) fn branch_penalty(taken: bool, crossed: bool) -> u32 {
    match (taken, crossed) {
        (false, _) => 0,
        (true, false) => 1,
        (true, true) => 2,
    }
}

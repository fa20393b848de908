/*!
core::Cpu - Public 6502 CPU facade.

`Cpu` owns the architectural state, the NMI/IRQ latch, the configuration,
and the running cycle counter. Every instruction runs through
`dispatch::step` over the caller's `Bus`.

Failure atomicity
=================
A step that fails (strict-mode illegal opcode, or a bus fault part way
through an instruction) restores the register file and the interrupt latch
to their values before the step. Bus writes already issued are not undone;
the bus owns its memory.
*/

use crate::bus::Bus;
use crate::cpu::config::CpuConfig;
use crate::cpu::dispatch;
use crate::cpu::interrupts::{self, PendingInterrupts};
use crate::cpu::state::{CpuState, NEGATIVE, ZERO};
use crate::error::{BusFault, CpuError};

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    pending: PendingInterrupts,
    config: CpuConfig,
    cycles: u64,
}

impl Cpu {
    /// Construct a new CPU with power-up defaults and the default config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CpuConfig) {
        self.config = config;
    }

    /// Immutable view of the register file.
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Mutable register file, for test harnesses and debuggers.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Run the reset sequence: A, X and Y zeroed, P = I|U, PC from $FFFC,
    /// pending interrupts dropped, cycle counter set to 7.
    ///
    /// SP is not zeroed. It ends at $FD, where the three stack pushes the
    /// hardware suppresses during reset leave it.
    pub fn reset<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), BusFault> {
        let cycles = interrupts::reset(&mut self.state, bus)?;
        self.pending.clear();
        self.cycles = cycles as u64;
        Ok(())
    }

    /// Execute one instruction, or one interrupt entry, and return its cycles.
    pub fn step<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        let snapshot = (self.state, self.pending);
        match dispatch::step(&mut self.state, bus, &mut self.pending, &self.config) {
            Ok(cycles) => {
                self.cycles += cycles as u64;
                Ok(cycles)
            }
            Err(e) => {
                (self.state, self.pending) = snapshot;
                Err(e)
            }
        }
    }

    /// Run up to `max_steps` steps; returns the cycles they consumed.
    /// Stops at the first error.
    pub fn run<B: Bus + ?Sized>(&mut self, bus: &mut B, max_steps: usize) -> Result<u64, CpuError> {
        let mut total = 0u64;
        for _ in 0..max_steps {
            total += self.step(bus)? as u64;
        }
        Ok(total)
    }

    // ---------------------------------------------------------------------
    // Interrupt lines
    // ---------------------------------------------------------------------

    /// Latch an NMI; it is taken at the next instruction boundary.
    pub fn nmi(&mut self) {
        self.pending.request_nmi();
    }

    /// Latch an IRQ; it is taken at the first boundary where I is clear.
    pub fn irq(&mut self) {
        self.pending.request_irq();
    }

    pub fn clear_irq(&mut self) {
        self.pending.clear_irq();
    }

    pub fn pending(&self) -> PendingInterrupts {
        self.pending
    }

    /// Total cycles since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a()
    }
    pub fn x(&self) -> u8 {
        self.state.x()
    }
    pub fn y(&self) -> u8 {
        self.state.y()
    }
    pub fn sp(&self) -> u8 {
        self.state.sp()
    }
    pub fn pc(&self) -> u16 {
        self.state.pc()
    }
    pub fn status(&self) -> u8 {
        self.state.status()
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.set_a(v);
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.set_x(v);
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.set_y(v);
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.set_sp(v);
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.set_pc(v);
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.set_status(v);
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }

    /// True if any bit of `mask` is set.
    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }

    pub fn update_zn(&mut self, v: u8) {
        self.set_flag(ZERO, v == 0);
        self.set_flag(NEGATIVE, (v & 0x80) != 0);
    }
}

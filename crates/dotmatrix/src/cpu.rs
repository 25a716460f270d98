mod control;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;
mod table;

pub use control::{di, ei, nop, prefix_cb, reti};
pub use regs::{Flag, Registers};
pub use table::{OpHandler, OpcodeTables, PREFIX_CB};

/// Cycles charged for accepting an interrupt (5 M-cycles).
pub const INTERRUPT_DISPATCH_CYCLES: u32 = 20;

/// Game Boy CPU (SM83) dispatch core.
///
/// Owns the register file, IME, the per-step clock accumulator and its copy
/// of the opcode tables. Memory is not owned: every `step` receives the
/// shared bus explicitly, and opcode handlers get that same handle.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt Master Enable.
    pub ime: bool,
    /// T-cycles accumulated during the current `step`.
    clock: u32,
    tables: OpcodeTables,
}

impl Cpu {
    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.set_f(0);
    }

    /// Cycles consumed by the most recent `step`.
    #[inline]
    pub fn clock(&self) -> u32 {
        self.clock
    }

    /// Charge `cycles` T-cycles to the current step. Called by opcode
    /// handlers to report their cost.
    #[inline]
    pub fn add_cycles(&mut self, cycles: u32) {
        self.clock += cycles;
    }

    pub fn tables(&self) -> &OpcodeTables {
        &self.tables
    }

    pub fn tables_mut(&mut self) -> &mut OpcodeTables {
        &mut self.tables
    }
}

use super::{Cpu, OpcodeTables, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new(OpcodeTables::with_control())
    }
}

impl Cpu {
    /// Create a CPU dispatching through `tables`.
    ///
    /// Registers start zeroed and IME starts set; loading post-boot register
    /// values is left to whoever owns system reset.
    pub fn new(tables: OpcodeTables) -> Self {
        Self {
            regs: Registers::default(),
            ime: true,
            clock: 0,
            tables,
        }
    }

    /// Zero AF, BC, DE, HL, SP and PC.
    ///
    /// IME and memory-mapped registers belong to system-level reset and are
    /// left alone.
    pub fn reset(&mut self) {
        self.regs.set_af(0);
        self.regs.set_bc(0);
        self.regs.set_de(0);
        self.regs.set_hl(0);
        self.regs.sp = 0;
        self.regs.pc = 0;
        self.clock = 0;
    }
}

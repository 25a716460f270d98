use crate::error::CpuError;
use crate::memory::Bus;

use super::Cpu;

impl Cpu {
    /// Execute one interrupt dispatch or one instruction and return the
    /// number of T-cycles taken.
    ///
    /// The clock accumulator restarts at zero. A pending, enabled interrupt
    /// (with IME set) is serviced instead of fetching an opcode. Otherwise
    /// the byte at PC selects a primary-table handler, which advances PC,
    /// applies the instruction and charges its cycles.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        self.clock = 0;

        if let Some(cycles) = self.handle_interrupts(bus) {
            self.add_cycles(cycles);
            return Ok(self.clock);
        }

        let pc = self.regs.pc;
        let opcode = bus.read8(pc);
        let Some(handler) = self.tables.primary(opcode) else {
            log::error!(
                "CPU halted on unregistered opcode 0x{opcode:02X} at PC=0x{pc:04X} ({regs})",
                regs = self.regs,
            );
            return Err(CpuError::UnregisteredOpcode { opcode, pc });
        };

        handler(self, bus)?;
        Ok(self.clock)
    }

    /// Second level of the two-table dispatch, reached through primary opcode
    /// 0xCB.
    ///
    /// `prefix_pc` is the address of the 0xCB byte, used for error reporting.
    /// PC must already point past the extended opcode byte.
    pub fn dispatch_extended(
        &mut self,
        bus: &mut dyn Bus,
        opcode: u8,
        prefix_pc: u16,
    ) -> Result<(), CpuError> {
        let Some(handler) = self.tables.extended(opcode) else {
            log::error!(
                "CPU halted on unregistered extended opcode 0xCB 0x{opcode:02X} at PC=0x{prefix_pc:04X} ({regs})",
                regs = self.regs,
            );
            return Err(CpuError::UnregisteredExtendedOpcode {
                opcode,
                pc: prefix_pc,
            });
        };

        handler(self, bus)
    }
}

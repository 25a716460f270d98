use crate::io::{Interrupt, InterruptFlags, IE, IF};
use crate::memory::Bus;

use super::{Cpu, INTERRUPT_DISPATCH_CYCLES};

impl Cpu {
    /// Highest-priority interrupt that should be taken now, if any.
    ///
    /// Requires IME and at least one source both enabled in IE and requested
    /// in IF. Only the low five bits of either register are interrupt lines.
    pub(super) fn poll_pending_interrupt<B: Bus + ?Sized>(&self, bus: &B) -> Option<Interrupt> {
        if !self.ime {
            return None;
        }

        let ie = bus.read8(IE);
        let iflags = bus.read8(IF);
        let pending = InterruptFlags::from_bits_truncate(ie & iflags);

        // Find lowest-numbered pending interrupt (VBlank > LCD STAT > Timer > Serial > Joypad).
        Interrupt::highest(pending)
    }

    /// Handle maskable interrupts if IME is set and a pending interrupt exists.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken, or `None` otherwise.
    /// Entry sequence: acknowledge the IF bit, clear IME, push PC, jump to
    /// the vector.
    pub(super) fn handle_interrupts<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Option<u32> {
        let source = self.poll_pending_interrupt(bus)?;

        let iflags = bus.read8(IF);
        bus.write8(IF, iflags & !source.flag().bits());
        self.ime = false;

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = source.vector();

        log::debug!(
            "CPU interrupt: idx={} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
            source.index(),
            self.regs.pc,
            pc,
            self.regs.sp,
            bus.read8(IF) & 0x1F,
            bus.read8(IE),
        );

        Some(INTERRUPT_DISPATCH_CYCLES)
    }
}

use crate::memory::Bus;

use super::Cpu;

/// Building blocks for opcode handlers.
///
/// Handlers receive the bus as `&mut dyn Bus`, so every helper accepts
/// unsized buses as well.
impl Cpu {
    /// Move PC forward by `len` bytes without reading them.
    #[inline]
    pub fn advance_pc(&mut self, len: u16) {
        self.regs.pc = self.regs.pc.wrapping_add(len);
    }

    /// Read the byte at PC and step past it.
    #[inline]
    pub fn fetch8<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Read a little-endian immediate word at PC and step past it.
    #[inline]
    pub fn fetch16<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Stack grows downward: after the push, memory[SP] = low byte and
    /// memory[SP+1] = high byte.
    #[inline]
    pub fn push_u16<B: Bus + ?Sized>(&mut self, bus: &mut B, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        bus.write16(self.regs.sp, value);
    }

    #[inline]
    pub fn pop_u16<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let value = bus.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }
}

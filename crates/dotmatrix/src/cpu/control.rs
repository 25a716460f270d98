//! Handlers the interrupt framework itself depends on.
//!
//! Everything else in the instruction set is registered by the embedder.

use crate::error::CpuError;
use crate::memory::Bus;

use super::Cpu;

/// 0xCB: fetch the second byte and dispatch through the extended table.
///
/// Consumes both bytes of the encoding. The prefix itself is free; the
/// extended handler charges the whole instruction's cost (8/12/16 cycles in
/// the published tables).
pub fn prefix_cb(cpu: &mut Cpu, bus: &mut dyn Bus) -> Result<(), CpuError> {
    let prefix_pc = cpu.regs.pc;
    cpu.advance_pc(1);
    let opcode = cpu.fetch8(bus);
    cpu.dispatch_extended(bus, opcode, prefix_pc)
}

/// 0x00: NOP.
pub fn nop(cpu: &mut Cpu, _bus: &mut dyn Bus) -> Result<(), CpuError> {
    cpu.advance_pc(1);
    cpu.add_cycles(4);
    Ok(())
}

/// 0xF3: DI.
pub fn di(cpu: &mut Cpu, _bus: &mut dyn Bus) -> Result<(), CpuError> {
    cpu.advance_pc(1);
    cpu.ime = false;
    cpu.add_cycles(4);
    Ok(())
}

/// 0xFB: EI.
///
/// IME is set as soon as the instruction completes, so an interrupt already
/// pending is taken on the very next step.
pub fn ei(cpu: &mut Cpu, _bus: &mut dyn Bus) -> Result<(), CpuError> {
    cpu.advance_pc(1);
    cpu.ime = true;
    cpu.add_cycles(4);
    Ok(())
}

/// 0xD9: RETI.
pub fn reti(cpu: &mut Cpu, bus: &mut dyn Bus) -> Result<(), CpuError> {
    let addr = cpu.pop_u16(bus);
    cpu.regs.pc = addr;
    cpu.ime = true;
    cpu.add_cycles(16);
    Ok(())
}

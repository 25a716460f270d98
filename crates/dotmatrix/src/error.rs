use thiserror::Error;

/// Faults surfaced by [`Cpu::step`](crate::Cpu::step).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    #[error("no handler registered for opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnregisteredOpcode { opcode: u8, pc: u16 },

    #[error("no handler registered for extended opcode 0xCB 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnregisteredExtendedOpcode { opcode: u8, pc: u16 },

    #[error("primary opcode 0xCB is the extended-table prefix and cannot be replaced")]
    ReservedPrefix,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpuError {
    #[error("draw_line called before an output sink was bound")]
    OutputNotBound,

    #[error("scanline {0} is outside the visible 0..144 range")]
    LineOutOfRange(u8),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    #[error("memory image is {len} bytes, larger than the 64 KiB address space")]
    ImageTooLarge { len: usize },
}

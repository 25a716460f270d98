use crate::error::CpuError;
use crate::memory::Bus;

use super::{control, Cpu};

/// Opcode handler: applies one instruction to the CPU and the shared bus.
///
/// A handler must advance PC past every byte of its encoding and charge its
/// cycle cost with [`Cpu::add_cycles`].
pub type OpHandler = fn(&mut Cpu, &mut dyn Bus) -> Result<(), CpuError>;

/// Primary opcode that routes into the extended table.
pub const PREFIX_CB: u8 = 0xCB;

/// The two 256-entry dispatch tables.
///
/// Lookup is a direct array index. The primary entry for [`PREFIX_CB`] is
/// fixed to [`control::prefix_cb`], which reads the next byte and dispatches
/// through the extended table.
#[derive(Clone)]
pub struct OpcodeTables {
    primary: [Option<OpHandler>; 256],
    extended: [Option<OpHandler>; 256],
}

impl Default for OpcodeTables {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OpcodeTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (primary, extended) = self.registered();
        f.debug_struct("OpcodeTables")
            .field("primary", &primary)
            .field("extended", &extended)
            .finish()
    }
}

impl OpcodeTables {
    /// Empty tables apart from the 0xCB prefix entry.
    pub fn new() -> Self {
        let mut primary: [Option<OpHandler>; 256] = [None; 256];
        primary[PREFIX_CB as usize] = Some(control::prefix_cb);
        Self {
            primary,
            extended: [None; 256],
        }
    }

    /// Tables pre-populated with the interrupt-control instructions
    /// (NOP, DI, EI, RETI).
    pub fn with_control() -> Self {
        let mut tables = Self::new();
        tables.primary[0x00] = Some(control::nop);
        tables.primary[0xF3] = Some(control::di);
        tables.primary[0xFB] = Some(control::ei);
        tables.primary[0xD9] = Some(control::reti);
        tables
    }

    /// Install `handler` for a primary opcode, replacing any previous entry.
    ///
    /// The 0xCB slot is part of the two-level dispatch contract and is
    /// refused.
    pub fn register(&mut self, opcode: u8, handler: OpHandler) -> Result<&mut Self, CpuError> {
        if opcode == PREFIX_CB {
            return Err(CpuError::ReservedPrefix);
        }
        self.primary[opcode as usize] = Some(handler);
        Ok(self)
    }

    /// Install `handler` for the extended opcode `0xCB opcode`.
    pub fn register_extended(&mut self, opcode: u8, handler: OpHandler) -> &mut Self {
        self.extended[opcode as usize] = Some(handler);
        self
    }

    #[inline]
    pub fn primary(&self, opcode: u8) -> Option<OpHandler> {
        self.primary[opcode as usize]
    }

    #[inline]
    pub fn extended(&self, opcode: u8) -> Option<OpHandler> {
        self.extended[opcode as usize]
    }

    /// Number of registered (primary, extended) entries.
    pub fn registered(&self) -> (usize, usize) {
        (
            self.primary.iter().flatten().count(),
            self.extended.iter().flatten().count(),
        )
    }
}

use crate::error::MemoryError;

/// Total addressable memory for the Game Boy (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// Abstraction over the Game Boy address space (memory and IO).
///
/// Both the CPU and the renderer receive an explicit handle to the one shared
/// instance on every call. Reads take `&self` so the renderer can scan tile
/// data without exclusive access; all mutation goes through `write8`.
pub trait Bus {
    fn read8(&self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read. The high byte comes from `addr + 1`,
    /// wrapping at the top of the address space.
    fn read16(&self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write: low byte at `addr`, high byte at `addr + 1`.
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}

impl<T: Bus + ?Sized> Bus for &mut T {
    fn read8(&self, addr: u16) -> u8 {
        (**self).read8(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        (**self).write8(addr, value)
    }
}

/// Flat 64 KiB address space with no banking or IO side effects.
///
/// Enough for driving the core in tests and for rendering memory snapshots;
/// a full system would put its cartridge mapper and IO registers behind
/// `Bus` instead.
#[derive(Clone)]
pub struct FlatMemory {
    memory: Box<[u8; MEMORY_SIZE]>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("len", &self.memory.len())
            .finish()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            memory: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Build a memory from a snapshot image loaded at address 0.
    ///
    /// Images shorter than 64 KiB leave the remaining bytes zeroed.
    pub fn from_image(image: &[u8]) -> Result<Self, MemoryError> {
        if image.len() > MEMORY_SIZE {
            return Err(MemoryError::ImageTooLarge { len: image.len() });
        }
        let mut mem = Self::new();
        mem.memory[..image.len()].copy_from_slice(image);
        Ok(mem)
    }

    /// Copy `data` into memory starting at `addr`, wrapping at 0xFFFF.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            self.memory[addr.wrapping_add(offset as u16) as usize] = byte;
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.memory[..]
    }
}

impl Bus for FlatMemory {
    #[inline]
    fn read8(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_access_is_little_endian() {
        let mut mem = FlatMemory::new();
        mem.write16(0xC000, 0xBEEF);
        assert_eq!(mem.read8(0xC000), 0xEF);
        assert_eq!(mem.read8(0xC001), 0xBE);
        assert_eq!(mem.read16(0xC000), 0xBEEF);
    }

    #[test]
    fn word_access_wraps_at_top_of_address_space() {
        let mut mem = FlatMemory::new();
        mem.write16(0xFFFF, 0x1234);
        assert_eq!(mem.read8(0xFFFF), 0x34);
        assert_eq!(mem.read8(0x0000), 0x12);
        assert_eq!(mem.read16(0xFFFF), 0x1234);
    }

    #[test]
    fn from_image_rejects_oversized_snapshots() {
        let image = vec![0u8; MEMORY_SIZE + 1];
        assert_eq!(
            FlatMemory::from_image(&image).unwrap_err(),
            MemoryError::ImageTooLarge {
                len: MEMORY_SIZE + 1
            }
        );

        let mem = FlatMemory::from_image(&[1, 2, 3]).unwrap();
        assert_eq!(mem.read8(0x0002), 3);
        assert_eq!(mem.read8(0x0003), 0);
    }
}

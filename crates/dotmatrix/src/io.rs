//! Memory-mapped registers shared by the CPU and the renderer.

use bitflags::bitflags;

use crate::memory::Bus;

/// Interrupt Flag / request register.
pub const IF: u16 = 0xFF0F;
/// LCD control.
pub const LCDC: u16 = 0xFF40;
/// Background vertical scroll.
pub const SCY: u16 = 0xFF42;
/// Background horizontal scroll.
pub const SCX: u16 = 0xFF43;
/// Background palette.
pub const BGP: u16 = 0xFF47;
/// Interrupt Enable register.
pub const IE: u16 = 0xFFFF;

pub const TILE_DATA_UNSIGNED_BASE: u16 = 0x8000;
pub const TILE_DATA_SIGNED_BASE: u16 = 0x9000;
pub const BG_MAP_0_BASE: u16 = 0x9800;
pub const BG_MAP_1_BASE: u16 = 0x9C00;

bitflags! {
    /// LCDC ($FF40) bits.
    ///
    /// The renderer here only consumes `BG_TILE_MAP` and `TILE_DATA_UNSIGNED`;
    /// the rest are named so that traces read sensibly.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Lcdc: u8 {
        const BG_ENABLE = 0x01;
        const OBJ_ENABLE = 0x02;
        const OBJ_SIZE = 0x04;
        /// Background map at $9C00 instead of $9800.
        const BG_TILE_MAP = 0x08;
        /// Tile data at $8000 with unsigned indices instead of $9000 signed.
        const TILE_DATA_UNSIGNED = 0x10;
        const WINDOW_ENABLE = 0x20;
        const WINDOW_TILE_MAP = 0x40;
        const LCD_ENABLE = 0x80;
    }
}

impl Lcdc {
    pub fn read(bus: &(impl Bus + ?Sized)) -> Self {
        Self::from_bits_retain(bus.read8(LCDC))
    }

    pub fn bg_map_base(self) -> u16 {
        if self.contains(Lcdc::BG_TILE_MAP) {
            BG_MAP_1_BASE
        } else {
            BG_MAP_0_BASE
        }
    }

    /// Address of the first byte of tile `index` under the current tile-data
    /// addressing mode.
    ///
    /// In signed mode the index is sign-extended around $9000, so 0x80..=0xFF
    /// reach down into $8800..$8FFF.
    pub fn tile_data_addr(self, index: u8) -> u16 {
        if self.contains(Lcdc::TILE_DATA_UNSIGNED) {
            TILE_DATA_UNSIGNED_BASE.wrapping_add(index as u16 * 16)
        } else {
            let offset = index as i8 as i16 * 16;
            TILE_DATA_SIGNED_BASE.wrapping_add_signed(offset)
        }
    }
}

bitflags! {
    /// Interrupt source bits shared by IE ($FFFF) and IF ($FF0F).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

/// Interrupt sources in priority order (highest first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Handler address: $40, $48, $50, $58, $60.
    pub fn vector(self) -> u16 {
        0x0040 + ((self as u16) << 3)
    }

    pub fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_retain(1 << self as u8)
    }

    /// Highest-priority source among `pending`, if any.
    pub fn highest(pending: InterruptFlags) -> Option<Interrupt> {
        Interrupt::ALL
            .into_iter()
            .find(|source| pending.contains(source.flag()))
    }
}

/// Raise the request bit for `source` in IF.
///
/// Peripherals (timer, renderer timing, joypad) own request bits; the CPU
/// only clears the one it services.
pub fn request_interrupt(bus: &mut (impl Bus + ?Sized), source: Interrupt) {
    let iflags = bus.read8(IF) | source.flag().bits();
    bus.write8(IF, iflags);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    #[test]
    fn vectors_follow_priority_order() {
        let vectors: Vec<u16> = Interrupt::ALL.iter().map(|i| i.vector()).collect();
        assert_eq!(vectors, vec![0x40, 0x48, 0x50, 0x58, 0x60]);
    }

    #[test]
    fn highest_picks_lowest_bit() {
        let pending = InterruptFlags::JOYPAD | InterruptFlags::LCD_STAT;
        assert_eq!(Interrupt::highest(pending), Some(Interrupt::LcdStat));
        assert_eq!(Interrupt::highest(InterruptFlags::empty()), None);
    }

    #[test]
    fn tile_addressing_modes() {
        let signed = Lcdc::empty();
        let unsigned = Lcdc::TILE_DATA_UNSIGNED;

        assert_eq!(signed.tile_data_addr(0xFF), 0x8FF0);
        assert_eq!(unsigned.tile_data_addr(0xFF), 0x8FF0);

        assert_eq!(signed.tile_data_addr(0x00), 0x9000);
        assert_eq!(unsigned.tile_data_addr(0x00), 0x8000);
        assert_eq!(signed.tile_data_addr(0x7F), 0x97F0);
        assert_eq!(unsigned.tile_data_addr(0x7F), 0x87F0);
        assert_eq!(signed.tile_data_addr(0x80), 0x8800);
        assert_eq!(unsigned.tile_data_addr(0x80), 0x8800);
    }

    #[test]
    fn request_interrupt_keeps_other_bits() {
        let mut mem = FlatMemory::new();
        mem.write8(IF, 0x01);
        request_interrupt(&mut mem, Interrupt::Timer);
        assert_eq!(mem.read8(IF), 0x05);
    }
}

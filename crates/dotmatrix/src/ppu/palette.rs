use dotmatrix_common::SHADE_COLORS;

use crate::io::BGP;
use crate::memory::Bus;

/// Mapping from raw 2-bit tile color index to DMG shade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette(pub [u8; 4]);

impl Default for Palette {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Palette {
    /// Raw index n shows shade n. Used by the tile atlas view.
    pub const IDENTITY: Palette = Palette([0, 1, 2, 3]);

    /// Unpack a BGP-style byte: slot 0 in bits 0-1 up to slot 3 in bits 6-7.
    pub fn from_bgp(byte: u8) -> Self {
        Palette([byte & 0x03, (byte >> 2) & 0x03, (byte >> 4) & 0x03, byte >> 6])
    }

    /// Current background palette.
    pub fn read(bus: &(impl Bus + ?Sized)) -> Self {
        Self::from_bgp(bus.read8(BGP))
    }

    #[inline]
    pub fn shade(&self, color_index: u8) -> u8 {
        self.0[(color_index & 0x03) as usize]
    }

    #[inline]
    pub fn color(&self, color_index: u8) -> u32 {
        SHADE_COLORS[self.shade(color_index) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bgp_is_identity() {
        let palette = Palette::from_bgp(0b1110_0100);
        assert_eq!(palette, Palette::IDENTITY);
        let colors: Vec<u32> = (0..4).map(|i| palette.color(i)).collect();
        assert_eq!(colors, SHADE_COLORS[..4].to_vec());
    }

    #[test]
    fn slots_unpack_low_to_high() {
        assert_eq!(Palette::from_bgp(0b0001_1011).0, [3, 2, 1, 0]);
        assert_eq!(Palette::from_bgp(0b1100_0000).0, [0, 0, 0, 3]);
        assert_eq!(Palette::from_bgp(0b1100_0000).color(3), SHADE_COLORS[3]);
        assert_eq!(Palette::from_bgp(0b1100_0000).color(2), SHADE_COLORS[0]);
    }
}

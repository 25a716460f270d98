pub mod sink;

pub use sink::{FrameBuffer, Image, ImageSink, LineSink};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);

    /// The four DMG LCD shades, lightest first.
    pub const DMG_LIGHTEST: Color = Color::new_rgb(0x9B, 0xBC, 0x0F);
    pub const DMG_LIGHT: Color = Color::new_rgb(0x8B, 0xAC, 0x0F);
    pub const DMG_DARK: Color = Color::new_rgb(0x30, 0x62, 0x30);
    pub const DMG_DARKEST: Color = Color::new_rgb(0x0F, 0x38, 0x0F);
    /// Pale panel color shown while the LCD is powered off.
    pub const DMG_SCREEN_OFF: Color = Color::new_rgb(0xCA, 0xDC, 0x9F);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    #[inline]
    pub const fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Pack as little-endian RGBA bytes, the layout canvas-style pixel
    /// buffers expect when viewed as `u32`.
    pub const fn to_u32(&self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    pub const fn from_u32(value: u32) -> Color {
        let [r, g, b, a] = value.to_le_bytes();
        Color { r, g, b, a }
    }
}

/// Index of the reserved slot in [`SHADE_COLORS`].
///
/// No tile decode ever produces it (shades are 0..=3); it holds the blank
/// panel color used when the display is switched off.
pub const SCREEN_OFF_SLOT: usize = 4;

/// Packed output colors indexed by DMG shade (0 = lightest, 3 = darkest),
/// followed by the reserved screen-off slot.
pub const SHADE_COLORS: [u32; 5] = [
    Color::DMG_LIGHTEST.to_u32(),
    Color::DMG_LIGHT.to_u32(),
    Color::DMG_DARK.to_u32(),
    Color::DMG_DARKEST.to_u32(),
    Color::DMG_SCREEN_OFF.to_u32(),
];

mod debug;
mod palette;

use dotmatrix_common::{
    FrameBuffer, LineSink, SCREEN_HEIGHT, SCREEN_OFF_SLOT, SCREEN_WIDTH, SHADE_COLORS,
};
use typed_builder::TypedBuilder;

use crate::error::PpuError;
use crate::io::{Lcdc, SCX, SCY};
use crate::memory::Bus;

pub use debug::{ATLAS_COLUMNS, ATLAS_HEIGHT, ATLAS_TILES, ATLAS_WIDTH, BG_MAP_SIZE};
pub use palette::Palette;

/// Pixels per tile row.
const TILE_WIDTH: usize = 8;
/// Bytes per tile (8 rows x 2 bitplanes).
const TILE_BYTES: u16 = 16;
/// Tiles per background map row.
const MAP_WIDTH_TILES: u16 = 32;
/// Enough whole tiles to cover a 160-pixel line at any fine scroll.
const LINE_TILES: usize = SCREEN_WIDTH / TILE_WIDTH + 1;

/// Initial switch state for a [`Ppu`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct PpuConfig {
    /// Host-level renderer switch, independent of the emulated LCD.
    #[builder(default = true)]
    pub enabled: bool,
    /// Emulated LCD power.
    #[builder(default = false)]
    pub display_enabled: bool,
}

impl Default for PpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Background scanline renderer.
///
/// Reads LCDC/SCX/SCY/BGP, the tile map and tile data from the shared bus on
/// every call and pushes finished rows into the bound [`LineSink`].
#[derive(Debug)]
pub struct Ppu<S = FrameBuffer> {
    enabled: bool,
    display_enabled: bool,
    output: Option<S>,
    line: [u32; SCREEN_WIDTH],
}

impl<S: LineSink> Default for Ppu<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LineSink> Ppu<S> {
    pub fn new() -> Self {
        Self::from_config(PpuConfig::default())
    }

    pub fn from_config(config: PpuConfig) -> Self {
        Self {
            enabled: config.enabled,
            display_enabled: config.display_enabled,
            output: None,
            line: [0; SCREEN_WIDTH],
        }
    }

    /// Attach the destination for rendered scanlines, replacing any previous
    /// one.
    pub fn bind_output(&mut self, sink: S) {
        self.output = Some(sink);
    }

    pub fn output(&self) -> Option<&S> {
        self.output.as_ref()
    }

    pub fn output_mut(&mut self) -> Option<&mut S> {
        self.output.as_mut()
    }

    pub fn take_output(&mut self) -> Option<S> {
        self.output.take()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Host-level kill switch. Does not touch the bound output.
    pub fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
    }

    pub fn display_enabled(&self) -> bool {
        self.display_enabled
    }

    /// Emulated LCD power.
    ///
    /// Switching the display off blanks the whole visible frame to the
    /// screen-off color right away, as the panel does when powered down
    /// mid-frame.
    pub fn set_display_enabled(&mut self, on: bool) {
        self.display_enabled = on;
        if on {
            return;
        }

        match self.output.as_mut() {
            Some(output) => {
                let blank = [SHADE_COLORS[SCREEN_OFF_SLOT]; SCREEN_WIDTH];
                for y in 0..SCREEN_HEIGHT {
                    output.write_row(y, &blank);
                }
            }
            None => log::debug!("PPU: display off with no output bound, nothing to clear"),
        }
    }

    /// Render background scanline `ly` (0..144) and hand it to the output.
    ///
    /// Does nothing while either the renderer or the display is disabled.
    pub fn draw_line<B: Bus + ?Sized>(&mut self, bus: &B, ly: u8) -> Result<(), PpuError> {
        if !self.enabled || !self.display_enabled {
            return Ok(());
        }
        if ly as usize >= SCREEN_HEIGHT {
            return Err(PpuError::LineOutOfRange(ly));
        }
        let Some(output) = self.output.as_mut() else {
            return Err(PpuError::OutputNotBound);
        };

        // Snapshot the registers we care about.
        let lcdc = Lcdc::read(bus);
        let scy = bus.read8(SCY);
        let scx = bus.read8(SCX);
        let palette = Palette::read(bus);

        // Scroll-adjusted row in BG space.
        let bg_y = ly.wrapping_add(scy);
        let tile_row = (bg_y >> 3) as u16;
        let pixel_row = bg_y & 7;
        let map_row = lcdc.bg_map_base() + tile_row * MAP_WIDTH_TILES;

        // Decode every tile the line touches, starting with the one holding
        // bg_x = SCX. Tile columns wrap with bg_x, so the map row repeats
        // seamlessly past column 31.
        let first_col = (scx >> 3) as u16;
        let fine_x = (scx & 7) as usize;
        let mut strip = [0u32; LINE_TILES * TILE_WIDTH];
        for i in 0..LINE_TILES {
            let tile_col = (first_col + i as u16) % MAP_WIDTH_TILES;
            let tile_index = bus.read8(map_row + tile_col);
            let tile_addr = lcdc.tile_data_addr(tile_index);
            fetch_tile_line(bus, tile_addr, pixel_row, &mut strip, i * TILE_WIDTH, &palette);
        }

        self.line.copy_from_slice(&strip[fine_x..fine_x + SCREEN_WIDTH]);
        output.write_row(ly as usize, &self.line);
        Ok(())
    }
}

/// Decode the 8 pixels of one tile row into `dest[offset..offset + 8]`.
///
/// Each row is 2 bytes at `tile_addr + 2 * row`: low bitplane then high
/// bitplane. Bit 7 is the leftmost pixel. The 2-bit color index goes through
/// `palette` to a shade and then to the output color table.
pub fn fetch_tile_line<B: Bus + ?Sized>(
    bus: &B,
    tile_addr: u16,
    row: u8,
    dest: &mut [u32],
    offset: usize,
    palette: &Palette,
) {
    let row_addr = tile_addr.wrapping_add(2 * row as u16);
    let lo = bus.read8(row_addr);
    let hi = bus.read8(row_addr.wrapping_add(1));

    for (i, pixel) in dest[offset..offset + TILE_WIDTH].iter_mut().enumerate() {
        let bit = 7 - i;
        let color_index = ((lo >> bit) & 0x01) | (((hi >> bit) & 0x01) << 1);
        *pixel = palette.color(color_index);
    }
}

//! Full-image VRAM viewers. Read-only; they bypass the per-line state.

use dotmatrix_common::{Image, ImageSink};

use crate::io::{Lcdc, TILE_DATA_UNSIGNED_BASE};
use crate::memory::Bus;

use super::{fetch_tile_line, Palette, Ppu, MAP_WIDTH_TILES, TILE_BYTES, TILE_WIDTH};

/// Tiles stored in the $8000-$97FF tile data block.
pub const ATLAS_TILES: usize = 384;
/// Tiles per atlas row.
pub const ATLAS_COLUMNS: usize = 16;
pub const ATLAS_WIDTH: usize = ATLAS_COLUMNS * TILE_WIDTH;
pub const ATLAS_HEIGHT: usize = ATLAS_TILES / ATLAS_COLUMNS * TILE_WIDTH;

pub const BG_MAP_SIZE: usize = MAP_WIDTH_TILES as usize * TILE_WIDTH;

impl<S> Ppu<S> {
    /// Decode all 384 tiles at $8000 (unsigned indexing, identity palette)
    /// into a 128x192 grid, 16 tiles per row.
    pub fn render_tile_atlas<B: Bus + ?Sized>(&self, bus: &B, sink: &mut impl ImageSink) {
        let mut pixels = vec![0u32; ATLAS_WIDTH * ATLAS_HEIGHT];
        for tile in 0..ATLAS_TILES {
            let tile_addr = TILE_DATA_UNSIGNED_BASE + tile as u16 * TILE_BYTES;
            let tile_x = (tile % ATLAS_COLUMNS) * TILE_WIDTH;
            let tile_y = (tile / ATLAS_COLUMNS) * TILE_WIDTH;
            for row in 0..TILE_WIDTH {
                let offset = (tile_y + row) * ATLAS_WIDTH + tile_x;
                fetch_tile_line(bus, tile_addr, row as u8, &mut pixels, offset, &Palette::IDENTITY);
            }
        }
        sink.write_image(ATLAS_WIDTH, ATLAS_HEIGHT, &pixels);
    }

    /// Decode the whole 32x32-tile background map selected by LCDC into a
    /// 256x256 image, with the current BGP and the same tile addressing as
    /// `draw_line`.
    pub fn render_background_map<B: Bus + ?Sized>(&self, bus: &B, sink: &mut impl ImageSink) {
        let lcdc = Lcdc::read(bus);
        let map_base = lcdc.bg_map_base();
        let palette = Palette::read(bus);

        let mut pixels = vec![0u32; BG_MAP_SIZE * BG_MAP_SIZE];
        let mut offset = 0;
        for tile_y in 0..MAP_WIDTH_TILES {
            for row in 0..TILE_WIDTH as u8 {
                for tile_x in 0..MAP_WIDTH_TILES {
                    let tile_index = bus.read8(map_base + tile_y * MAP_WIDTH_TILES + tile_x);
                    let tile_addr = lcdc.tile_data_addr(tile_index);
                    fetch_tile_line(bus, tile_addr, row, &mut pixels, offset, &palette);
                    offset += TILE_WIDTH;
                }
            }
        }
        sink.write_image(BG_MAP_SIZE, BG_MAP_SIZE, &pixels);
    }

    pub fn tile_atlas<B: Bus + ?Sized>(&self, bus: &B) -> Image {
        let mut image = Image::default();
        self.render_tile_atlas(bus, &mut image);
        image
    }

    pub fn background_map<B: Bus + ?Sized>(&self, bus: &B) -> Image {
        let mut image = Image::default();
        self.render_background_map(bus, &mut image);
        image
    }
}

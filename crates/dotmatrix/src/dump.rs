//! Render a memory snapshot to a raw RGB24 file.
//!
//! Used by the `vram_dump` binary to inspect VRAM without a running system.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use typed_builder::TypedBuilder;

use crate::memory::FlatMemory;
use crate::ppu::{Ppu, PpuConfig};
use crate::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum DumpView {
    /// All 384 tiles at $8000 (128x192).
    Tiles,
    /// The full 256x256 background map.
    Background,
    /// The 160x144 visible background, rendered line by line.
    #[default]
    Frame,
}

impl FromStr for DumpView {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tiles" | "atlas" => Ok(DumpView::Tiles),
            "bg" | "background" => Ok(DumpView::Background),
            "frame" | "screen" => Ok(DumpView::Frame),
            other => bail!("unknown view '{other}'. Supported: tiles, bg, frame"),
        }
    }
}

#[derive(Clone, Debug, TypedBuilder)]
pub struct DumpConfig {
    /// Memory snapshot loaded at address 0 (at most 64 KiB).
    #[builder(setter(into))]
    pub image: PathBuf,
    /// Destination for the RGB24 pixels.
    #[builder(setter(into))]
    pub output: PathBuf,
    #[builder(default)]
    pub view: DumpView,
}

/// What `run` wrote.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DumpReport {
    pub width: usize,
    pub height: usize,
    pub bytes: usize,
}

pub fn run(config: &DumpConfig) -> Result<DumpReport> {
    let image = std::fs::read(&config.image)
        .with_context(|| format!("failed to read memory image '{}'", config.image.display()))?;
    let memory = FlatMemory::from_image(&image)
        .with_context(|| format!("invalid memory image '{}'", config.image.display()))?;

    let (width, height, rgb) = render(&memory, config.view)?;
    std::fs::write(&config.output, &rgb)
        .with_context(|| format!("failed to write '{}'", config.output.display()))?;

    log::info!(
        "Wrote {:?} view ({}x{} rgb24) to '{}'",
        config.view,
        width,
        height,
        config.output.display()
    );

    Ok(DumpReport {
        width,
        height,
        bytes: rgb.len(),
    })
}

fn render(memory: &FlatMemory, view: DumpView) -> Result<(usize, usize, Vec<u8>)> {
    match view {
        DumpView::Tiles => {
            let ppu: Ppu = Ppu::new();
            let atlas = ppu.tile_atlas(memory);
            Ok((atlas.width, atlas.height, atlas.to_rgb24()))
        }
        DumpView::Background => {
            let ppu: Ppu = Ppu::new();
            let map = ppu.background_map(memory);
            Ok((map.width, map.height, map.to_rgb24()))
        }
        DumpView::Frame => {
            let mut ppu: Ppu =
                Ppu::from_config(PpuConfig::builder().display_enabled(true).build());
            ppu.bind_output(FrameBuffer::new());
            for ly in 0..SCREEN_HEIGHT as u8 {
                ppu.draw_line(memory, ly)?;
            }
            let frame = ppu
                .take_output()
                .context("renderer lost its frame buffer")?;
            let mut rgb = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
            frame.to_rgb24(&mut rgb);
            Ok((SCREEN_WIDTH, SCREEN_HEIGHT, rgb))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Bus, MEMORY_SIZE};
    use crate::Color;

    fn snapshot_with_dark_tile() -> Vec<u8> {
        let mut mem = FlatMemory::new();
        // LCD on, BG on, unsigned tile data, identity BGP.
        mem.write8(0xFF40, 0x91);
        mem.write8(0xFF47, 0b1110_0100);
        for row in 0..16u16 {
            mem.write8(0x8000 + row, 0xFF);
        }
        mem.as_slice().to_vec()
    }

    #[test]
    fn view_names_parse() {
        assert_eq!("tiles".parse::<DumpView>().unwrap(), DumpView::Tiles);
        assert_eq!("bg".parse::<DumpView>().unwrap(), DumpView::Background);
        assert_eq!("frame".parse::<DumpView>().unwrap(), DumpView::Frame);
        assert!("sprites".parse::<DumpView>().is_err());
    }

    #[test]
    fn frame_dump_writes_rgb24() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("mem.bin");
        let output = dir.path().join("frame.rgb");
        std::fs::write(&image, snapshot_with_dark_tile()).unwrap();

        let config = DumpConfig::builder()
            .image(image.clone())
            .output(output.clone())
            .build();
        let report = run(&config).unwrap();

        assert_eq!(report.width, 160);
        assert_eq!(report.height, 144);
        let rgb = std::fs::read(&output).unwrap();
        assert_eq!(rgb.len(), 160 * 144 * 3);
        assert_eq!(report.bytes, rgb.len());
        let (r, g, b) = Color::DMG_DARKEST.rgb();
        assert_eq!(&rgb[..3], &[r, g, b]);
    }

    #[test]
    fn tile_dump_has_atlas_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("mem.bin");
        std::fs::write(&image, snapshot_with_dark_tile()).unwrap();

        let config = DumpConfig::builder()
            .image(image)
            .output(dir.path().join("tiles.rgb"))
            .view(DumpView::Tiles)
            .build();
        let report = run(&config).unwrap();

        assert_eq!((report.width, report.height), (128, 192));
        assert_eq!(report.bytes, 128 * 192 * 3);
    }

    #[test]
    fn oversized_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("big.bin");
        std::fs::write(&image, vec![0u8; MEMORY_SIZE + 16]).unwrap();

        let config = DumpConfig::builder()
            .image(image)
            .output(dir.path().join("out.rgb"))
            .view(DumpView::Background)
            .build();
        let err = run(&config).unwrap_err();

        assert!(format!("{err:#}").contains("larger than the 64 KiB"));
        assert!(!dir.path().join("out.rgb").exists());
    }
}

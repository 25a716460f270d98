use crate::{Color, SCREEN_HEIGHT, SCREEN_OFF_SLOT, SCREEN_WIDTH, SHADE_COLORS};

/// Destination for rendered scanlines.
///
/// Receives one 160-pixel row at a time and places it at vertical offset `y`.
pub trait LineSink {
    fn write_row(&mut self, y: usize, pixels: &[u32; SCREEN_WIDTH]);
}

/// Destination for whole-image debug dumps (tile atlas, background map).
pub trait ImageSink {
    fn write_image(&mut self, width: usize, height: usize, pixels: &[u32]);
}

impl<T: LineSink + ?Sized> LineSink for &mut T {
    fn write_row(&mut self, y: usize, pixels: &[u32; SCREEN_WIDTH]) {
        (**self).write_row(y, pixels)
    }
}

impl<T: ImageSink + ?Sized> ImageSink for &mut T {
    fn write_image(&mut self, width: usize, height: usize, pixels: &[u32]) {
        (**self).write_image(width, height, pixels)
    }
}

fn write_rgb24(pixels: &[u32], buffer: &mut [u8]) {
    for (dst, &pixel) in buffer.chunks_exact_mut(3).zip(pixels) {
        let (r, g, b) = Color::from_u32(pixel).rgb();
        dst[0] = r;
        dst[1] = g;
        dst[2] = b;
    }
}

/// In-memory 160x144 frame assembled from scanlines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<u32>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// A frame showing the blank (screen-off) panel color.
    pub fn new() -> Self {
        Self {
            pixels: vec![SHADE_COLORS[SCREEN_OFF_SLOT]; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * SCREEN_WIDTH + x]
    }

    pub fn row(&self, y: usize) -> &[u32] {
        &self.pixels[y * SCREEN_WIDTH..(y + 1) * SCREEN_WIDTH]
    }

    /// Convert to an RGB24 buffer (3 bytes per pixel), the layout the
    /// frame-dump tooling writes to disk.
    pub fn to_rgb24(&self, buffer: &mut [u8]) {
        write_rgb24(&self.pixels, buffer);
    }
}

impl LineSink for FrameBuffer {
    fn write_row(&mut self, y: usize, pixels: &[u32; SCREEN_WIDTH]) {
        if y >= SCREEN_HEIGHT {
            log::warn!("FrameBuffer: dropping row {y} outside the visible frame");
            return;
        }
        self.pixels[y * SCREEN_WIDTH..(y + 1) * SCREEN_WIDTH].copy_from_slice(pixels);
    }
}

/// Owned image produced by a debug dump.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Image {
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    pub fn to_rgb24(&self) -> Vec<u8> {
        let mut buffer = vec![0u8; self.pixels.len() * 3];
        write_rgb24(&self.pixels, &mut buffer);
        buffer
    }
}

impl ImageSink for Image {
    fn write_image(&mut self, width: usize, height: usize, pixels: &[u32]) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.extend_from_slice(pixels);
    }
}

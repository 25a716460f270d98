pub mod cpu;
pub mod dump;
pub mod error;
pub mod io;
pub mod memory;
pub mod ppu;

pub use cpu::{Cpu, Flag, OpHandler, OpcodeTables, Registers};
pub use error::{CpuError, MemoryError, PpuError};
pub use memory::{Bus, FlatMemory};
pub use ppu::{Palette, Ppu, PpuConfig};

pub use dotmatrix_common::{
    Color, FrameBuffer, Image, ImageSink, LineSink, SCREEN_HEIGHT, SCREEN_WIDTH, SHADE_COLORS,
};

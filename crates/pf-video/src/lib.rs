//! Frame presentation for psxfront
//!
//! Display surfaces, the presenter that owns them, the overlay font and an
//! in-memory driver for headless runs.

pub mod font;
pub mod headless;
pub mod presenter;
pub mod surface;

pub use headless::{HeadlessVideo, SurfaceMonitor, MemorySurface};
pub use presenter::FramePresenter;
pub use surface::{
    BufferingMode, FrameRing, Surface, VideoDriver, VideoError, VideoMode, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

//! Display surface abstraction
//!
//! A surface is a fixed 320x240 16bpp framebuffer with one or more
//! buffers behind it. Pixels are only reachable through
//! [`Surface::with_pixels`], so the writable buffer is fetched again for
//! every access and never survives a flip.

use std::fmt;

use thiserror::Error;

/// Logical display width
pub const SCREEN_WIDTH: usize = 320;

/// Logical display height
pub const SCREEN_HEIGHT: usize = 240;

/// Video errors
#[derive(Error, Debug)]
pub enum VideoError {
    #[error("Unable to set {mode} video mode: {reason}")]
    ModeUnavailable { mode: VideoMode, reason: String },

    #[error("Video backend error: {0}")]
    Backend(String),
}

/// Requested display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    pub width: usize,
    pub height: usize,
    pub bpp: u8,
}

impl VideoMode {
    /// The only mode the frontend uses
    pub const PSX: VideoMode = VideoMode {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        bpp: 16,
    };

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for VideoMode {
    fn default() -> Self {
        Self::PSX
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.bpp)
    }
}

/// Number of buffers behind the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferingMode {
    Single,
    #[default]
    Double,
    Triple,
}

impl BufferingMode {
    pub fn buffer_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Flips needed after a clear so that every buffer has been cleared once
    pub fn purge_flips(self) -> usize {
        self.buffer_count() - 1
    }
}

/// A display surface
pub trait Surface {
    fn mode(&self) -> VideoMode;

    fn buffering(&self) -> BufferingMode;

    /// Whether pixel access requires the surface to be locked
    fn must_lock(&self) -> bool;

    fn lock(&mut self);

    fn unlock(&mut self);

    /// Show the current back buffer
    fn flip(&mut self);

    /// Run `f` over the currently writable buffer
    fn with_pixels(&mut self, f: &mut dyn FnMut(&mut [u16]));
}

/// Acquires display surfaces
pub trait VideoDriver {
    fn set_video_mode(
        &mut self,
        mode: VideoMode,
        buffering: BufferingMode,
    ) -> Result<Box<dyn Surface>, VideoError>;
}

/// Software buffer ring shared by the CPU-side surfaces.
///
/// Writes go to the back buffer; [`FrameRing::advance`] shows it and moves
/// on to the next buffer in the ring.
#[derive(Debug, Clone)]
pub struct FrameRing {
    mode: VideoMode,
    buffers: Vec<Vec<u16>>,
    back: usize,
}

impl FrameRing {
    pub fn new(mode: VideoMode, buffering: BufferingMode) -> Self {
        Self {
            mode,
            buffers: vec![vec![0; mode.pixel_count()]; buffering.buffer_count()],
            back: 0,
        }
    }

    pub fn mode(&self) -> VideoMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Index of the writable buffer
    pub fn back_index(&self) -> usize {
        self.back
    }

    pub fn back_mut(&mut self) -> &mut [u16] {
        &mut self.buffers[self.back]
    }

    pub fn buffer(&self, index: usize) -> Option<&[u16]> {
        self.buffers.get(index).map(Vec::as_slice)
    }

    /// Overwrite every buffer in the ring
    pub fn fill_all(&mut self, value: u16) {
        for buffer in &mut self.buffers {
            buffer.fill(value);
        }
    }

    /// Present the back buffer, returning it
    pub fn advance(&mut self) -> &[u16] {
        let shown = self.back;
        self.back = (self.back + 1) % self.buffers.len();
        &self.buffers[shown]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purge_flips() {
        assert_eq!(BufferingMode::Single.purge_flips(), 0);
        assert_eq!(BufferingMode::Double.purge_flips(), 1);
        assert_eq!(BufferingMode::Triple.purge_flips(), 2);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(VideoMode::PSX.to_string(), "320x240x16");
        assert_eq!(VideoMode::PSX.pixel_count(), 76_800);
    }

    #[test]
    fn test_ring_rotation() {
        let mut ring = FrameRing::new(VideoMode::PSX, BufferingMode::Triple);
        assert_eq!(ring.len(), 3);

        ring.back_mut()[0] = 0x1234;
        assert_eq!(ring.advance()[0], 0x1234);
        assert_eq!(ring.back_index(), 1);
        assert_eq!(ring.back_mut()[0], 0);

        ring.advance();
        ring.advance();
        assert_eq!(ring.back_index(), 0);
        assert_eq!(ring.back_mut()[0], 0x1234);
    }

    #[test]
    fn test_single_buffer_stays_put() {
        let mut ring = FrameRing::new(VideoMode::PSX, BufferingMode::Single);
        ring.advance();
        assert_eq!(ring.back_index(), 0);
    }
}

//! Frame presentation
//!
//! [`FramePresenter`] owns the display surface. When the surface needs
//! locking it stays locked at all times except for the duration of a
//! flip.

use crate::font::{glyph, GLYPH_SIZE};
use crate::surface::{BufferingMode, Surface, VideoMode};

/// Overlay glyph colour (white)
const TEXT_ON: u16 = 0xFFFF;
/// Overlay background colour (black)
const TEXT_OFF: u16 = 0x0000;

/// Owns the display surface and every write to it
pub struct FramePresenter {
    surface: Box<dyn Surface>,
    locked: bool,
    flips: u64,
}

impl FramePresenter {
    /// Take ownership of a surface, locking it if required
    pub fn new(mut surface: Box<dyn Surface>) -> Self {
        let locked = surface.must_lock();
        if locked {
            surface.lock();
        }
        tracing::debug!(
            "Frame presenter on {} surface, {:?} buffering",
            surface.mode(),
            surface.buffering()
        );

        Self {
            surface,
            locked,
            flips: 0,
        }
    }

    pub fn mode(&self) -> VideoMode {
        self.surface.mode()
    }

    pub fn buffering(&self) -> BufferingMode {
        self.surface.buffering()
    }

    pub fn flip_count(&self) -> u64 {
        self.flips
    }

    /// Fill the writable buffer with black
    pub fn clear(&mut self) {
        self.surface.with_pixels(&mut |pixels| pixels.fill(0));
    }

    /// Show the writable buffer: unlock, flip, lock again
    pub fn flip(&mut self) {
        if self.locked {
            self.surface.unlock();
        }

        self.surface.flip();
        self.flips += 1;

        if self.locked {
            self.surface.lock();
        }
    }

    /// Clear and flip until every buffer in the chain is blank
    pub fn purge(&mut self) {
        self.clear();
        for _ in 0..self.buffering().purge_flips() {
            self.flip();
            self.clear();
        }
    }

    /// Draw 8x8 glyphs for the bytes of `text` into the writable buffer.
    ///
    /// Nothing is clipped: glyphs running past the right edge continue on
    /// the following rows, and pixels beyond the end of the buffer are
    /// dropped.
    pub fn overlay_text(&mut self, x: usize, y: usize, text: &str) {
        let stride = self.mode().width;

        self.surface.with_pixels(&mut |pixels| {
            let origin = y * stride + x;
            for (i, &byte) in text.as_bytes().iter().enumerate() {
                let rows = glyph(byte);
                for (l, &row) in rows.iter().enumerate() {
                    let start = origin + i * GLYPH_SIZE + l * stride;
                    for bit in 0..GLYPH_SIZE {
                        if let Some(pixel) = pixels.get_mut(start + bit) {
                            *pixel = if row & (0x80 >> bit) != 0 {
                                TEXT_ON
                            } else {
                                TEXT_OFF
                            };
                        }
                    }
                }
            }
        });
    }

    /// Copy a core frame into the writable buffer, clipped to the display
    /// size. `width` is the row stride of `frame`.
    pub fn blit(&mut self, frame: &[u16], width: usize, height: usize) {
        let mode = self.mode();
        let w = width.min(mode.width);
        let h = height.min(mode.height);

        self.surface.with_pixels(&mut |pixels| {
            for (row, src) in frame.chunks(width.max(1)).take(h).enumerate() {
                let n = w.min(src.len());
                let dst = row * mode.width;
                pixels[dst..dst + n].copy_from_slice(&src[..n]);
            }
        });
    }

    /// Give up the lock held on the surface
    pub fn release(&mut self) {
        if self.locked {
            self.surface.unlock();
            self.locked = false;
            tracing::debug!("Display surface unlocked");
        }
    }
}

impl Drop for FramePresenter {
    fn drop(&mut self) {
        self.release();
    }
}

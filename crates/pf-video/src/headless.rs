//! Headless video driver
//!
//! Keeps the frames in memory. Used when no window system is wanted and by
//! tests, which inspect the surface through a [`SurfaceMonitor`] after the
//! presenter has taken ownership of it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::surface::{BufferingMode, FrameRing, Surface, VideoDriver, VideoError, VideoMode};

#[derive(Debug)]
struct MemoryFrames {
    ring: FrameRing,
    buffering: BufferingMode,
    must_lock: bool,
    locked: bool,
    lock_calls: u64,
    flips: u64,
    flips_while_locked: u64,
    writes_while_unlocked: u64,
    last_shown: Option<Vec<u16>>,
}

impl MemoryFrames {
    fn new(mode: VideoMode, buffering: BufferingMode, must_lock: bool) -> Self {
        Self {
            ring: FrameRing::new(mode, buffering),
            buffering,
            must_lock,
            locked: false,
            lock_calls: 0,
            flips: 0,
            flips_while_locked: 0,
            writes_while_unlocked: 0,
            last_shown: None,
        }
    }
}

/// In-memory surface
pub struct MemorySurface {
    frames: Rc<RefCell<MemoryFrames>>,
}

impl Surface for MemorySurface {
    fn mode(&self) -> VideoMode {
        self.frames.borrow().ring.mode()
    }

    fn buffering(&self) -> BufferingMode {
        self.frames.borrow().buffering
    }

    fn must_lock(&self) -> bool {
        self.frames.borrow().must_lock
    }

    fn lock(&mut self) {
        let mut frames = self.frames.borrow_mut();
        frames.locked = true;
        frames.lock_calls += 1;
    }

    fn unlock(&mut self) {
        self.frames.borrow_mut().locked = false;
    }

    fn flip(&mut self) {
        let mut frames = self.frames.borrow_mut();
        if frames.locked {
            frames.flips_while_locked += 1;
        }
        frames.flips += 1;
        let shown = frames.ring.advance().to_vec();
        frames.last_shown = Some(shown);
    }

    fn with_pixels(&mut self, f: &mut dyn FnMut(&mut [u16])) {
        let mut frames = self.frames.borrow_mut();
        if frames.must_lock && !frames.locked {
            frames.writes_while_unlocked += 1;
        }
        f(frames.ring.back_mut());
    }
}

/// Read access to a [`MemorySurface`] that the presenter owns
#[derive(Clone)]
pub struct SurfaceMonitor {
    frames: Rc<RefCell<MemoryFrames>>,
}

impl SurfaceMonitor {
    pub fn is_locked(&self) -> bool {
        self.frames.borrow().locked
    }

    pub fn lock_calls(&self) -> u64 {
        self.frames.borrow().lock_calls
    }

    pub fn flips(&self) -> u64 {
        self.frames.borrow().flips
    }

    pub fn flips_while_locked(&self) -> u64 {
        self.frames.borrow().flips_while_locked
    }

    pub fn writes_while_unlocked(&self) -> u64 {
        self.frames.borrow().writes_while_unlocked
    }

    /// Copy of the most recently flipped buffer
    pub fn last_shown(&self) -> Option<Vec<u16>> {
        self.frames.borrow().last_shown.clone()
    }

    /// Whether every buffer in the ring is black
    pub fn all_blank(&self) -> bool {
        let frames = self.frames.borrow();
        (0..frames.ring.len())
            .filter_map(|i| frames.ring.buffer(i))
            .all(|buffer| buffer.iter().all(|&p| p == 0))
    }

    /// Paint every buffer, e.g. to simulate a menu screen left behind
    pub fn fill_all(&self, value: u16) {
        self.frames.borrow_mut().ring.fill_all(value);
    }
}

/// Video driver producing [`MemorySurface`]s
pub struct HeadlessVideo {
    frames: Rc<RefCell<MemoryFrames>>,
    must_lock: bool,
    failure: Option<String>,
}

impl HeadlessVideo {
    pub fn new() -> Self {
        Self {
            frames: Rc::new(RefCell::new(MemoryFrames::new(
                VideoMode::PSX,
                BufferingMode::default(),
                false,
            ))),
            must_lock: false,
            failure: None,
        }
    }

    /// Report surfaces as needing a lock around pixel access
    pub fn with_locking(mut self, must_lock: bool) -> Self {
        self.must_lock = must_lock;
        self
    }

    /// A driver whose mode set always fails
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new()
        }
    }

    pub fn monitor(&self) -> SurfaceMonitor {
        SurfaceMonitor {
            frames: self.frames.clone(),
        }
    }
}

impl Default for HeadlessVideo {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoDriver for HeadlessVideo {
    fn set_video_mode(
        &mut self,
        mode: VideoMode,
        buffering: BufferingMode,
    ) -> Result<Box<dyn Surface>, VideoError> {
        if let Some(reason) = &self.failure {
            return Err(VideoError::ModeUnavailable {
                mode,
                reason: reason.clone(),
            });
        }

        *self.frames.borrow_mut() = MemoryFrames::new(mode, buffering, self.must_lock);
        tracing::info!("Headless video mode {} ({:?} buffering)", mode, buffering);

        Ok(Box::new(MemorySurface {
            frames: self.frames.clone(),
        }))
    }
}

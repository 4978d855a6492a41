//! Frame rate statistics behind the FPS overlay

use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Counts presented frames and turns them into an overlay message
#[derive(Debug, Clone)]
pub struct FrameStats {
    frames: u32,
    window_start: Instant,
    paused_at: Option<Instant>,
    fps: u32,
    message: String,
    console_output: bool,
}

impl FrameStats {
    /// `console_output` also logs every new rate
    pub fn new(console_output: bool, now: Instant) -> Self {
        Self {
            frames: 0,
            window_start: now,
            paused_at: None,
            fps: 0,
            message: String::new(),
            console_output,
        }
    }

    /// Start a fresh measurement window
    pub fn reset(&mut self, now: Instant) {
        self.frames = 0;
        self.window_start = now;
        self.paused_at = None;
        self.fps = 0;
        self.message.clear();
    }

    /// Record a presented frame
    pub fn frame_presented(&mut self, now: Instant) {
        if self.paused_at.is_some() {
            return;
        }

        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < WINDOW {
            return;
        }

        let millis = elapsed.as_millis().max(1) as u64;
        self.fps = (u64::from(self.frames) * 1000 / millis) as u32;
        self.message = format!("FPS: {}", self.fps);
        self.frames = 0;
        self.window_start = now;

        if self.console_output {
            tracing::info!("{}", self.message);
        }
    }

    /// Stop the clock, e.g. while the menu is up
    pub fn pause(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Restart the clock, excluding the paused time from the window
    pub fn resume(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            self.window_start += now.saturating_duration_since(paused_at);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Most recent rate
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Overlay text; empty until the first window completes
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_message() {
        let start = Instant::now();
        let mut stats = FrameStats::new(false, start);

        for i in 1..60 {
            stats.frame_presented(start + Duration::from_millis(i * 16));
        }
        assert_eq!(stats.message(), "");

        stats.frame_presented(start + Duration::from_millis(1000));
        assert_eq!(stats.fps(), 60);
        assert_eq!(stats.message(), "FPS: 60");
    }

    #[test]
    fn test_pause_excludes_menu_time() {
        let start = Instant::now();
        let mut stats = FrameStats::new(false, start);

        for i in 1..=30 {
            stats.frame_presented(start + Duration::from_millis(i * 16));
        }
        stats.pause(start + Duration::from_millis(500));
        stats.frame_presented(start + Duration::from_millis(2000));
        assert!(stats.is_paused());
        stats.resume(start + Duration::from_secs(10));

        // 30 frames before the pause plus 30 after, inside one second of running time
        for i in 1..30 {
            stats.frame_presented(start + Duration::from_secs(10) + Duration::from_millis(i * 16));
        }
        assert_eq!(stats.message(), "");
        stats.frame_presented(start + Duration::from_millis(10_500));
        assert_eq!(stats.message(), "FPS: 60");
    }

    #[test]
    fn test_reset() {
        let start = Instant::now();
        let mut stats = FrameStats::new(true, start);
        stats.frame_presented(start + Duration::from_secs(2));
        assert!(!stats.message().is_empty());

        stats.reset(start + Duration::from_secs(2));
        assert_eq!(stats.message(), "");
        assert_eq!(stats.fps(), 0);
    }
}

//! Session state shared by the frontend components

use std::path::{Path, PathBuf};

use pf_core::{Config, DirectoryLayout, SaveStateManager};
use pf_input::{PadState, PAD_COUNT};

/// Frontend mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeState {
    #[default]
    Running,
    Menu,
}

/// Content mounted for this session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    pub disc: Option<PathBuf>,
    pub executable: Option<PathBuf>,
}

impl Content {
    pub fn is_empty(&self) -> bool {
        self.disc.is_none() && self.executable.is_none()
    }
}

/// State owned by one emulation session
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub config: Config,
    pub layout: DirectoryLayout,
    pub mode: ModeState,
    pub pads: [PadState; PAD_COUNT],
    pub content: Content,
    pub save_states: SaveStateManager,
}

impl SessionContext {
    pub fn new(config: Config, layout: DirectoryLayout) -> Self {
        let save_states = SaveStateManager::new(layout.save_states.clone());
        Self {
            config,
            layout,
            mode: ModeState::Running,
            pads: [PadState::released(); PAD_COUNT],
            content: Content::default(),
            save_states,
        }
    }

    /// Current mask of a controller port; ports without a pad read released
    pub fn pad_read(&self, port: usize) -> u16 {
        self.pads
            .get(port)
            .copied()
            .unwrap_or_default()
            .raw()
    }

    /// Remember the directory content was picked from
    pub fn remember_dir_of(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.config.set_last_dir(parent) {
                tracing::warn!("Not storing last directory {}: path too long", parent.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_input::PadButtons;

    #[test]
    fn test_pad_read() {
        let mut ctx = SessionContext::new(Config::default(), DirectoryLayout::under("/home/user"));
        ctx.pads[0].set_pressed(PadButtons::START, true);

        assert_eq!(ctx.pad_read(0), 0xFFF7);
        assert_eq!(ctx.pad_read(1), 0xFFFF);
        assert_eq!(ctx.pad_read(7), 0xFFFF);
    }

    #[test]
    fn test_remember_dir_of() {
        let mut ctx = SessionContext::new(Config::default(), DirectoryLayout::under("/home/user"));
        ctx.remember_dir_of(Path::new("/games/psx/ff7.cue"));
        assert_eq!(ctx.config.paths.last_dir, "/games/psx");

        ctx.remember_dir_of(Path::new("bare.cue"));
        assert_eq!(ctx.config.paths.last_dir, "/games/psx");
    }

    #[test]
    fn test_save_states_follow_layout() {
        let ctx = SessionContext::new(Config::default(), DirectoryLayout::under("/home/user"));
        assert_eq!(
            ctx.save_states.dir(),
            Path::new("/home/user/.psxfront/sstates")
        );
    }
}

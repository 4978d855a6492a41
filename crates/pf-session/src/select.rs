//! Interactive content selection

use std::path::PathBuf;

use pf_core::Config;
use pf_video::FramePresenter;

/// Asks the user for content when none was given on the command line
pub trait ContentSelector {
    /// Blocks until the user picks a disc image, or returns `None` if they
    /// back out
    fn select(&mut self, config: &Config, presenter: &mut FramePresenter) -> Option<PathBuf>;
}

/// Selector with a fixed answer, for headless runs
#[derive(Debug, Clone, Default)]
pub struct FixedSelection {
    choice: Option<PathBuf>,
}

impl FixedSelection {
    pub fn new(choice: Option<PathBuf>) -> Self {
        Self { choice }
    }

    /// Selector that never picks anything
    pub fn none() -> Self {
        Self::default()
    }
}

impl ContentSelector for FixedSelection {
    fn select(&mut self, _config: &Config, _presenter: &mut FramePresenter) -> Option<PathBuf> {
        self.choice.take()
    }
}

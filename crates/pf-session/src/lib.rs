//! Session lifecycle for psxfront
//!
//! Ties configuration, input, presentation and the externally supplied
//! emulation core together: command line overlay, startup ordering,
//! the running/menu mode switch and the per-frame callbacks.

pub mod bootstrap;
pub mod cli;
pub mod context;
pub mod frontend;
pub mod mode;
pub mod null;
pub mod select;
pub mod stats;

pub use bootstrap::{BootOptions, Collaborators, SessionBootstrap, SessionReport};
pub use cli::{CliOverlay, ConfigOverride};
pub use context::{Content, ModeState, SessionContext};
pub use frontend::Frontend;
pub use mode::{Menu, MenuAction, MenuSession, ModeController, Transition};
pub use null::{MachineState, NullCore, NullMenu, NullPlugin, NullProvider};
pub use select::{ContentSelector, FixedSelection};
pub use stats::FrameStats;

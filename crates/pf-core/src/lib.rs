//! Core frontend types for psxfront
//!
//! This crate provides configuration and its persistence, the on-disk
//! directory layout, save-state slots, the interfaces of the externally
//! supplied emulation core and plugins, error handling and logging.

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod plugin;
pub mod savestate;

pub use config::{Config, ConfigStore, LoadOutcome};
pub use error::{CliError, ConfigError, CoreError, FrontendError, Result, SaveStateError};
pub use paths::DirectoryLayout;
pub use plugin::{
    CpuVariant, EmulationCore, FrameHost, HostControl, Plugin, PluginKind, PluginProvider,
    PluginSelection, PluginSet, SpuVariant,
};
pub use savestate::SaveStateManager;

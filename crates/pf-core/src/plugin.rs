//! Emulation core and plugin interfaces
//!
//! The frontend never emulates anything itself. The CPU core and the
//! GPU/SPU plugins are supplied from outside and driven through these
//! lifecycle calls; the core calls back into the frontend through
//! [`FrameHost`] once per frame.

use std::fmt;
use std::path::Path;

use crate::config::{Config, CpuCore};
use crate::error::CoreError;

/// Outcome of a frontend callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostControl {
    /// Keep executing
    Continue,
    /// The user asked to quit; the core should return from `execute`
    Quit,
}

/// Services the frontend provides to a running core
pub trait FrameHost {
    /// Poll input and handle hotkeys. May run the menu before returning.
    fn update_input(&mut self, core: &mut dyn EmulationCore) -> HostControl;

    /// Current 16-bit pad bitmask for a controller port (active-low)
    fn pad_read(&self, port: usize) -> u16;

    /// Copy a rendered frame into the display, clipped to the display size, and flip
    fn present_frame(&mut self, pixels: &[u16], width: usize, height: usize);

    /// Flip whatever is in the display buffer
    fn flip(&mut self);
}

/// The emulation core collaborator
pub trait EmulationCore {
    /// Initialize the core
    fn init(&mut self, config: &Config) -> Result<(), CoreError>;

    /// Reset to the initial architectural state
    fn reset(&mut self);

    /// Validate a disc image, returning its content identifier
    fn check_disc(&mut self, path: &Path) -> Result<String, CoreError>;

    /// Mount a previously checked disc image
    fn mount_disc(&mut self, path: &Path) -> Result<(), CoreError>;

    /// Load a standalone executable into memory
    fn load_executable(&mut self, path: &Path) -> Result<(), CoreError>;

    /// Run until the host asks to quit
    fn execute(&mut self, host: &mut dyn FrameHost) -> Result<(), CoreError>;

    /// Suspend internal timing
    fn pause(&mut self);

    /// Resume internal timing
    fn resume(&mut self);

    /// Flush and close memory card files opened for writing
    fn sync_memory_cards(&mut self);

    /// Serialize the machine state to `path`
    fn save_state(&mut self, path: &Path) -> Result<(), CoreError>;

    /// Restore the machine state from `path`
    fn load_state(&mut self, path: &Path) -> Result<(), CoreError>;

    /// Release everything the core holds
    fn shutdown(&mut self);
}

/// Plugin subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    Cpu,
    Gpu,
    Spu,
}

impl PluginKind {
    /// Load order
    pub const ALL: [PluginKind; 3] = [PluginKind::Cpu, PluginKind::Gpu, PluginKind::Spu];
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "CPU"),
            Self::Gpu => write!(f, "GPU"),
            Self::Spu => write!(f, "SPU"),
        }
    }
}

/// CPU plugin variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuVariant {
    Recompiler,
    Interpreter,
}

/// SPU plugin variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpuVariant {
    /// No sound processing at all
    Null,
    Rearmed,
}

/// Plugin variants picked from configuration at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginSelection {
    pub cpu: CpuVariant,
    pub spu: SpuVariant,
}

impl PluginSelection {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cpu: match config.core.cpu {
                CpuCore::Recompiler => CpuVariant::Recompiler,
                CpuCore::Interpreter => CpuVariant::Interpreter,
            },
            spu: if config.spu.disabled {
                SpuVariant::Null
            } else {
                SpuVariant::Rearmed
            },
        }
    }
}

/// A loaded plugin
pub trait Plugin {
    fn kind(&self) -> PluginKind;

    /// Human-readable name for logs
    fn name(&self) -> &str;

    fn init(&mut self, config: &Config) -> Result<(), CoreError>;

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn shutdown(&mut self) {}
}

/// Creates plugin instances for a selection
pub trait PluginProvider {
    fn create(
        &mut self,
        kind: PluginKind,
        selection: &PluginSelection,
    ) -> Result<Box<dyn Plugin>, CoreError>;
}

/// The loaded plugin subsystems, in load order
#[derive(Default)]
pub struct PluginSet {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and initialize every plugin kind in order.
    ///
    /// If one fails, the plugins already loaded are shut down again and the
    /// failing kind is returned with its error.
    pub fn load(
        provider: &mut dyn PluginProvider,
        config: &Config,
    ) -> Result<Self, (PluginKind, CoreError)> {
        let selection = PluginSelection::from_config(config);
        let mut set = Self::new();

        for kind in PluginKind::ALL {
            let loaded = provider.create(kind, &selection).and_then(|mut plugin| {
                plugin.init(config)?;
                Ok(plugin)
            });

            match loaded {
                Ok(plugin) => {
                    tracing::info!("Loaded {} plugin: {}", kind, plugin.name());
                    set.plugins.push(plugin);
                }
                Err(e) => {
                    set.release();
                    return Err((kind, e));
                }
            }
        }

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn pause_all(&mut self) {
        for plugin in &mut self.plugins {
            plugin.pause();
        }
    }

    pub fn resume_all(&mut self) {
        for plugin in &mut self.plugins {
            plugin.resume();
        }
    }

    /// Shut down every plugin, last loaded first
    pub fn release(&mut self) {
        while let Some(mut plugin) = self.plugins.pop() {
            tracing::debug!("Releasing {} plugin", plugin.kind());
            plugin.shutdown();
        }
    }
}

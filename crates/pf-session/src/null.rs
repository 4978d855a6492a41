//! Stand-in collaborators
//!
//! A core and plugins that emulate nothing. The null core draws a moving
//! test pattern and keeps just enough machine state to make save states
//! observable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pf_core::{
    Config, CoreError, CpuVariant, EmulationCore, FrameHost, HostControl, Plugin, PluginKind,
    PluginProvider, PluginSelection, SpuVariant,
};
use pf_video::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::mode::{Menu, MenuAction, MenuSession};

/// Serialized machine state of the null core
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineState {
    pub frame: u64,
    pub disc: Option<String>,
    pub executable: Option<String>,
}

/// Emulation core that only produces test frames
pub struct NullCore {
    state: MachineState,
    frame_budget: Option<u64>,
    initialized: bool,
    paused: bool,
    framebuffer: Vec<u16>,
}

impl NullCore {
    /// `frame_budget` stops `execute` after that many frames
    pub fn new(frame_budget: Option<u64>) -> Self {
        Self {
            state: MachineState::default(),
            frame_budget,
            initialized: false,
            paused: false,
            framebuffer: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn render(&mut self) {
        let shift = self.state.frame as usize;
        for (i, pixel) in self.framebuffer.iter_mut().enumerate() {
            let x = i % SCREEN_WIDTH;
            let y = i / SCREEN_WIDTH;
            *pixel = (((x + shift) ^ y) & 0x1F) as u16;
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl EmulationCore for NullCore {
    fn init(&mut self, _config: &Config) -> Result<(), CoreError> {
        self.initialized = true;
        tracing::info!("Null core initialized");
        Ok(())
    }

    fn reset(&mut self) {
        self.state = MachineState::default();
    }

    fn check_disc(&mut self, path: &Path) -> Result<String, CoreError> {
        if !path.is_file() {
            return Err(CoreError::Disc(format!("{} is not a file", path.display())));
        }
        let id: String = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if id.is_empty() {
            return Err(CoreError::Disc(format!(
                "no identifier in {}",
                path.display()
            )));
        }
        Ok(id)
    }

    fn mount_disc(&mut self, path: &Path) -> Result<(), CoreError> {
        self.state.disc = Some(file_label(path));
        Ok(())
    }

    fn load_executable(&mut self, path: &Path) -> Result<(), CoreError> {
        if !path.is_file() {
            return Err(CoreError::Executable(format!(
                "{} is not a file",
                path.display()
            )));
        }
        self.state.executable = Some(file_label(path));
        Ok(())
    }

    fn execute(&mut self, host: &mut dyn FrameHost) -> Result<(), CoreError> {
        if !self.initialized {
            return Err(CoreError::Init("core not initialized".to_string()));
        }

        loop {
            if self.frame_budget.is_some_and(|budget| self.state.frame >= budget) {
                tracing::info!("Frame budget of {} reached", self.state.frame);
                return Ok(());
            }
            if host.update_input(self) == HostControl::Quit {
                return Ok(());
            }

            self.render();
            host.present_frame(&self.framebuffer, SCREEN_WIDTH, SCREEN_HEIGHT);
            self.state.frame += 1;
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn sync_memory_cards(&mut self) {}

    fn save_state(&mut self, path: &Path) -> Result<(), CoreError> {
        let bytes =
            serde_json::to_vec(&self.state).map_err(|e| CoreError::State(e.to_string()))?;
        fs::write(path, bytes).map_err(|e| CoreError::State(e.to_string()))
    }

    fn load_state(&mut self, path: &Path) -> Result<(), CoreError> {
        let bytes = fs::read(path).map_err(|e| CoreError::State(e.to_string()))?;
        self.state = serde_json::from_slice(&bytes).map_err(|e| CoreError::State(e.to_string()))?;
        Ok(())
    }

    fn shutdown(&mut self) {
        self.initialized = false;
        tracing::info!("Null core shut down");
    }
}

/// Plugin that accepts every lifecycle call
#[derive(Debug, Clone)]
pub struct NullPlugin {
    kind: PluginKind,
    name: &'static str,
}

impl Plugin for NullPlugin {
    fn kind(&self) -> PluginKind {
        self.kind
    }

    fn name(&self) -> &str {
        self.name
    }

    fn init(&mut self, _config: &Config) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Provides [`NullPlugin`]s named after the selected variants
#[derive(Debug, Clone, Default)]
pub struct NullProvider;

impl PluginProvider for NullProvider {
    fn create(
        &mut self,
        kind: PluginKind,
        selection: &PluginSelection,
    ) -> Result<Box<dyn Plugin>, CoreError> {
        let name = match kind {
            PluginKind::Cpu => match selection.cpu {
                CpuVariant::Recompiler => "recompiler",
                CpuVariant::Interpreter => "interpreter",
            },
            PluginKind::Gpu => "null gpu",
            PluginKind::Spu => match selection.spu {
                SpuVariant::Null => "null spu",
                SpuVariant::Rearmed => "rearmed spu",
            },
        };
        Ok(Box::new(NullPlugin { kind, name }))
    }
}

/// Menu that returns straight away
#[derive(Debug, Clone, Copy)]
pub struct NullMenu {
    action: MenuAction,
}

impl NullMenu {
    pub fn new(action: MenuAction) -> Self {
        Self { action }
    }
}

impl Default for NullMenu {
    fn default() -> Self {
        Self::new(MenuAction::Resume)
    }
}

impl Menu for NullMenu {
    fn run(&mut self, _session: &mut MenuSession<'_>) -> MenuAction {
        self.action
    }
}

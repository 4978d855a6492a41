//! Recording fakes shared by the session tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use pf_core::{
    Config, CoreError, EmulationCore, FrameHost, HostControl, Plugin, PluginKind, PluginProvider,
    PluginSelection,
};
use pf_session::{Menu, MenuAction, MenuSession};

pub type Log = Rc<RefCell<Vec<String>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

/// Core that records every call and runs a fixed number of frames
#[derive(Default)]
pub struct RecordingCore {
    pub log: Log,
    pub frames: u64,
    pub fail_init: bool,
    pub fail_check: bool,
    pub fail_mount: bool,
    pub fail_exe: bool,
    pub value: u32,
}

impl RecordingCore {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            ..Self::default()
        }
    }

    fn record(&self, entry: impl Into<String>) {
        self.log.borrow_mut().push(entry.into());
    }
}

impl EmulationCore for RecordingCore {
    fn init(&mut self, _config: &Config) -> Result<(), CoreError> {
        self.record("core init");
        if self.fail_init {
            return Err(CoreError::Init("no memory".to_string()));
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.record("core reset");
    }

    fn check_disc(&mut self, path: &Path) -> Result<String, CoreError> {
        self.record("core check_disc");
        if self.fail_check {
            return Err(CoreError::Disc(format!("bad image {}", path.display())));
        }
        Ok("SLUS00001".to_string())
    }

    fn mount_disc(&mut self, _path: &Path) -> Result<(), CoreError> {
        self.record("core mount_disc");
        if self.fail_mount {
            return Err(CoreError::Disc("unreadable".to_string()));
        }
        Ok(())
    }

    fn load_executable(&mut self, _path: &Path) -> Result<(), CoreError> {
        self.record("core load_executable");
        if self.fail_exe {
            return Err(CoreError::Executable("bad header".to_string()));
        }
        Ok(())
    }

    fn execute(&mut self, host: &mut dyn FrameHost) -> Result<(), CoreError> {
        self.record("core execute");
        let frame = vec![0x1234u16; 320 * 240];
        for _ in 0..self.frames {
            if host.update_input(self) == HostControl::Quit {
                self.record("core quit");
                break;
            }
            host.present_frame(&frame, 320, 240);
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.record("core pause");
    }

    fn resume(&mut self) {
        self.record("core resume");
    }

    fn sync_memory_cards(&mut self) {
        self.record("core sync_memory_cards");
    }

    fn save_state(&mut self, path: &Path) -> Result<(), CoreError> {
        self.record("core save_state");
        fs::write(path, self.value.to_le_bytes()).map_err(|e| CoreError::State(e.to_string()))
    }

    fn load_state(&mut self, path: &Path) -> Result<(), CoreError> {
        self.record("core load_state");
        let bytes = fs::read(path).map_err(|e| CoreError::State(e.to_string()))?;
        let raw: [u8; 4] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CoreError::State("truncated".to_string()))?;
        self.value = u32::from_le_bytes(raw);
        Ok(())
    }

    fn shutdown(&mut self) {
        self.record("core shutdown");
    }
}

pub struct RecordingPlugin {
    kind: PluginKind,
    log: Log,
}

impl Plugin for RecordingPlugin {
    fn kind(&self) -> PluginKind {
        self.kind
    }

    fn name(&self) -> &str {
        "recording"
    }

    fn init(&mut self, _config: &Config) -> Result<(), CoreError> {
        self.log.borrow_mut().push(format!("{} init", self.kind));
        Ok(())
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push(format!("{} pause", self.kind));
    }

    fn resume(&mut self) {
        self.log.borrow_mut().push(format!("{} resume", self.kind));
    }

    fn shutdown(&mut self) {
        self.log.borrow_mut().push(format!("{} shutdown", self.kind));
    }
}

pub struct RecordingProvider {
    pub log: Log,
    pub fail: Option<PluginKind>,
}

impl RecordingProvider {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            fail: None,
        }
    }
}

impl PluginProvider for RecordingProvider {
    fn create(
        &mut self,
        kind: PluginKind,
        _selection: &PluginSelection,
    ) -> Result<Box<dyn Plugin>, CoreError> {
        if self.fail == Some(kind) {
            return Err(CoreError::Plugin("missing device".to_string()));
        }
        Ok(Box::new(RecordingPlugin {
            kind,
            log: self.log.clone(),
        }))
    }
}

/// Menu that records the mode it ran in, then returns a fixed action
pub struct RecordingMenu {
    pub log: Log,
    pub action: MenuAction,
    pub save_slot: Option<u32>,
}

impl RecordingMenu {
    pub fn new(log: &Log, action: MenuAction) -> Self {
        Self {
            log: log.clone(),
            action,
            save_slot: None,
        }
    }
}

impl Menu for RecordingMenu {
    fn run(&mut self, session: &mut MenuSession<'_>) -> MenuAction {
        self.log
            .borrow_mut()
            .push(format!("menu run {:?}", session.mode));
        if let Some(slot) = self.save_slot {
            let result = session.save_states.save(slot, &mut *session.core);
            self.log
                .borrow_mut()
                .push(format!("menu save {}", result.is_ok()));
        }
        session.presenter.clear();
        session.presenter.overlay_text(8, 8, "MENU");
        session.presenter.flip();
        self.action
    }
}

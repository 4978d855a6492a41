//! Save-state slots
//!
//! A slot is addressed by the content identifier of the mounted disc and a
//! slot number, and maps to `<save-states-dir>/<content-id>.<slot>.sav`.
//! The state bytes themselves belong to the emulation core.

use std::path::{Path, PathBuf};

use crate::error::SaveStateError;
use crate::plugin::EmulationCore;

/// Maps (content, slot) pairs to files and delegates to the core
#[derive(Debug, Clone)]
pub struct SaveStateManager {
    dir: PathBuf,
    content_id: Option<String>,
}

impl SaveStateManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            content_id: None,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref()
    }

    /// Bind the manager to the content of a freshly reset session.
    ///
    /// The identifier must be non-empty and usable as a file name.
    pub fn bind_content(&mut self, content_id: &str) -> Result<(), SaveStateError> {
        let valid = !content_id.is_empty()
            && content_id != "."
            && content_id != ".."
            && !content_id.contains(['/', '\\', '\0']);
        if !valid {
            return Err(SaveStateError::InvalidContentId(content_id.to_string()));
        }

        tracing::debug!("Save states bound to content {}", content_id);
        self.content_id = Some(content_id.to_string());
        Ok(())
    }

    /// Forget the bound content (full reset)
    pub fn unbind(&mut self) {
        self.content_id = None;
    }

    /// File backing a slot
    pub fn slot_path(&self, slot: u32) -> Result<PathBuf, SaveStateError> {
        let id = self.content_id.as_deref().ok_or(SaveStateError::NoContent)?;
        Ok(self.dir.join(format!("{}.{}.sav", id, slot)))
    }

    /// Save the machine state into a slot. No retry on failure.
    pub fn save(&self, slot: u32, core: &mut dyn EmulationCore) -> Result<(), SaveStateError> {
        let path = self.slot_path(slot)?;
        core.save_state(&path)?;
        tracing::info!("Saved state slot {} to {}", slot, path.display());
        Ok(())
    }

    /// Restore the machine state from a slot.
    ///
    /// A slot file that does not exist is reported without calling the core.
    pub fn load(&self, slot: u32, core: &mut dyn EmulationCore) -> Result<(), SaveStateError> {
        let path = self.slot_path(slot)?;
        if !path.is_file() {
            return Err(SaveStateError::Missing(path));
        }
        core.load_state(&path)?;
        tracing::info!("Loaded state slot {} from {}", slot, path.display());
        Ok(())
    }

    /// Whether a slot file exists
    pub fn exists(&self, slot: u32) -> bool {
        self.slot_path(slot).map(|p| p.is_file()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_path() {
        let mut manager = SaveStateManager::new("/states");
        assert!(matches!(manager.slot_path(0), Err(SaveStateError::NoContent)));

        manager.bind_content("SLUS00594").unwrap();
        assert_eq!(
            manager.slot_path(3).unwrap(),
            PathBuf::from("/states/SLUS00594.3.sav")
        );
    }

    #[test]
    fn test_rejects_unusable_content_ids() {
        let mut manager = SaveStateManager::new("/states");
        for id in ["", "..", "a/b", "a\\b"] {
            assert!(matches!(
                manager.bind_content(id),
                Err(SaveStateError::InvalidContentId(_))
            ));
        }
        assert_eq!(manager.content_id(), None);
    }
}

//! On-disk directory layout

use std::path::{Path, PathBuf};

/// Name of the per-user frontend directory inside the home location
pub const HOME_DIR_NAME: &str = ".psxfront";

/// Config file name inside the frontend directory
pub const CONFIG_FILE_NAME: &str = "psxfront.cfg";

/// Directories the frontend reads from and writes to.
///
/// Derived once at startup from the home location. [`DirectoryLayout::create_all`]
/// makes sure each one exists before any dependent component runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLayout {
    /// Location the layout was derived from (user home or working directory)
    pub home: PathBuf,
    /// Frontend directory, holds the config file
    pub root: PathBuf,
    pub save_states: PathBuf,
    pub memory_cards: PathBuf,
    pub bios: PathBuf,
    pub patches: PathBuf,
}

impl DirectoryLayout {
    /// Derive the layout below an explicit home location
    pub fn under(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let root = home.join(HOME_DIR_NAME);

        Self {
            save_states: root.join("sstates"),
            memory_cards: root.join("memcards"),
            bios: root.join("bios"),
            patches: root.join("patches"),
            root,
            home,
        }
    }

    /// Derive the layout from the environment.
    ///
    /// Uses the user's home directory, then the current working directory,
    /// then `.` when neither can be determined.
    pub fn resolve() -> Self {
        let home = dirs::home_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::under(home)
    }

    /// Create every directory of the layout. Best effort: failures are logged
    /// and the remaining directories are still attempted.
    ///
    /// Returns the number of directories that exist afterwards.
    pub fn create_all(&self) -> usize {
        let mut present = 0;
        for dir in self.directories() {
            match std::fs::create_dir_all(dir) {
                Ok(()) => present += 1,
                Err(e) => tracing::warn!("Failed to create directory {}: {}", dir.display(), e),
            }
        }
        present
    }

    /// The five managed directories, parents first
    pub fn directories(&self) -> [&Path; 5] {
        [
            &self.root,
            &self.save_states,
            &self.memory_cards,
            &self.bios,
            &self.patches,
        ]
    }

    /// Path of the config file
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Path of a memory card image (`index` is 1 or 2)
    pub fn memory_card(&self, index: u8) -> PathBuf {
        self.memory_cards.join(format!("mcd{:03}.mcr", index))
    }
}

/// Check that `path` names a directory that can be listed
pub fn is_openable_dir(path: &Path) -> bool {
    std::fs::read_dir(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_below_home() {
        let layout = DirectoryLayout::under("/home/player");
        assert_eq!(layout.root, PathBuf::from("/home/player/.psxfront"));
        assert_eq!(layout.save_states, PathBuf::from("/home/player/.psxfront/sstates"));
        assert_eq!(layout.memory_cards, PathBuf::from("/home/player/.psxfront/memcards"));
        assert_eq!(layout.bios, PathBuf::from("/home/player/.psxfront/bios"));
        assert_eq!(layout.patches, PathBuf::from("/home/player/.psxfront/patches"));
        assert_eq!(
            layout.config_file(),
            PathBuf::from("/home/player/.psxfront/psxfront.cfg")
        );
        assert_eq!(
            layout.memory_card(2),
            PathBuf::from("/home/player/.psxfront/memcards/mcd002.mcr")
        );
    }

    #[test]
    fn test_create_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = DirectoryLayout::under(tmp.path());

        assert_eq!(layout.create_all(), 5);
        assert_eq!(layout.create_all(), 5);
        for dir in layout.directories() {
            assert!(dir.is_dir(), "{} missing", dir.display());
        }
    }

    #[test]
    fn test_create_all_is_best_effort() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the frontend directory should go blocks every child
        let blocker = tmp.path().join(HOME_DIR_NAME);
        std::fs::write(&blocker, b"not a directory").unwrap();

        let layout = DirectoryLayout::under(tmp.path());
        assert_eq!(layout.create_all(), 0);
    }

    #[test]
    fn test_openable_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(is_openable_dir(tmp.path()));
        assert!(!is_openable_dir(&tmp.path().join("absent")));

        let file = tmp.path().join("file");
        std::fs::write(&file, b"x").unwrap();
        assert!(!is_openable_dir(&file));
    }
}

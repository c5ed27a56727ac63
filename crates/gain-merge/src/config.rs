use std::path::{Path, PathBuf};

use gain_store::{JsonFileStore, DEFAULT_BACKUP_SUFFIX};
use serde::{Deserialize, Serialize};

/// File name of the primary catalog.
pub const DEFAULT_PRIMARY_FILE: &str = "exercises.json";

/// File name of the incoming catalog.
pub const DEFAULT_INCOMING_FILE: &str = "new_exercises.json";

/// Locations of the stores a [`Merger`](crate::Merger) works on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// The catalog that is updated in place.
    pub primary: PathBuf,
    /// The catalog whose records are merged in. Never modified.
    pub incoming: PathBuf,
    /// Appended to `primary` to name the backup file.
    pub backup_suffix: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            primary: PathBuf::from(DEFAULT_PRIMARY_FILE),
            incoming: PathBuf::from(DEFAULT_INCOMING_FILE),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }
}

impl MergeConfig {
    /// Default file names, co-located in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            primary: dir.join(DEFAULT_PRIMARY_FILE),
            incoming: dir.join(DEFAULT_INCOMING_FILE),
            ..Default::default()
        }
    }

    pub fn primary_store(&self) -> JsonFileStore {
        JsonFileStore::with_backup_suffix(&self.primary, &self.backup_suffix)
    }

    pub fn incoming_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.incoming)
    }
}

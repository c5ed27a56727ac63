use std::ffi::OsString;
use std::fs::{self, File, FileTimes};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use gain_types::RecordSet;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::codec;
use crate::error::{StoreError, StoreResult};
use crate::traits::RecordStore;

/// Suffix appended to the store path to form the backup path.
pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";

/// A record set kept in a single JSON file.
///
/// The backup slot is a sibling file named after the store plus a suffix
/// (`exercises.json` → `exercises.json.bak`). Replacement writes a temporary
/// file in the same directory and renames it over the store, so a failed
/// write never leaves a truncated store behind.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    backup_path: PathBuf,
}

impl JsonFileStore {
    /// Store at `path` with the default `.bak` backup suffix.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_backup_suffix(path, DEFAULT_BACKUP_SUFFIX)
    }

    /// Store at `path` whose backup is `path` + `suffix`.
    pub fn with_backup_suffix(path: impl Into<PathBuf>, suffix: &str) -> Self {
        let path = path.into();
        let backup_path = sibling_with_suffix(&path, suffix);
        Self { path, backup_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Directory that holds the store; temporary files are created here so
    /// the final rename stays on one filesystem.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn metadata(&self) -> StoreResult<Option<fs::Metadata>> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(Some(meta)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl RecordStore for JsonFileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> StoreResult<RecordSet> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.location()))
            }
            Err(e) => return Err(e.into()),
        };
        let records = codec::decode(&bytes, &self.location())?;
        debug!(path = %self.path.display(), records = records.len(), bytes = bytes.len(), "loaded record set");
        Ok(records)
    }

    fn backup(&self) -> StoreResult<bool> {
        let Some(meta) = self.metadata()? else {
            debug!(path = %self.path.display(), "no existing store; skipping backup");
            return Ok(false);
        };

        let backup_err = |source: io::Error| StoreError::Backup {
            location: self.location(),
            backup: self.backup_path.display().to_string(),
            source,
        };

        // fs::copy carries permission bits over; timestamps are applied below.
        let copied = fs::copy(&self.path, &self.backup_path).map_err(backup_err)?;

        match (meta.accessed(), meta.modified()) {
            (Ok(accessed), Ok(modified)) => {
                let times = FileTimes::new().set_accessed(accessed).set_modified(modified);
                let applied = File::options()
                    .write(true)
                    .open(&self.backup_path)
                    .and_then(|f| f.set_times(times));
                if let Err(e) = applied {
                    warn!(backup = %self.backup_path.display(), error = %e, "backup timestamps not preserved");
                }
            }
            _ => debug!("platform does not report file times; backup keeps copy-time stamps"),
        }

        debug!(from = %self.path.display(), to = %self.backup_path.display(), bytes = copied, "backup written");
        Ok(true)
    }

    fn replace(&self, records: &RecordSet) -> StoreResult<()> {
        let persist_err = |source: io::Error| StoreError::Persist {
            location: self.location(),
            source,
        };
        let previous = self.metadata()?;

        let tmp = NamedTempFile::new_in(self.parent_dir()).map_err(persist_err)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, records)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            writer.flush().map_err(persist_err)?;
        }
        tmp.as_file().sync_all().map_err(persist_err)?;

        // Temporary files are created owner-only; keep the store's own mode.
        if let Some(meta) = previous {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(persist_err)?;
        }

        tmp.persist(&self.path).map_err(|e| persist_err(e.error))?;
        debug!(path = %self.path.display(), records = records.len(), "store replaced");
        Ok(())
    }
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

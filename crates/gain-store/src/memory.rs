use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use gain_types::RecordSet;

use crate::codec;
use crate::error::{StoreError, StoreResult};
use crate::traits::RecordStore;

/// In-memory record store holding raw JSON bytes.
///
/// Intended for tests. Content is kept as bytes, not as a decoded set, so
/// that malformed stores and byte-exact backups behave the same way they do
/// on disk. Backup and replace failures can be injected.
pub struct InMemoryRecordStore {
    name: String,
    content: RwLock<Option<Vec<u8>>>,
    backup: RwLock<Option<Vec<u8>>>,
    fail_backup: AtomicBool,
    fail_replace: AtomicBool,
}

impl InMemoryRecordStore {
    /// Create an empty store (no content, as if the file did not exist).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: RwLock::new(None),
            backup: RwLock::new(None),
            fail_backup: AtomicBool::new(false),
            fail_replace: AtomicBool::new(false),
        }
    }

    /// Create a store holding the given raw bytes.
    pub fn with_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::new(name);
        *store.content.write().expect("lock poisoned") = Some(bytes.into());
        store
    }

    /// Create a store holding `records` encoded the way a file store would.
    pub fn with_records(name: impl Into<String>, records: &RecordSet) -> StoreResult<Self> {
        Ok(Self::with_bytes(name, codec::encode(records)?))
    }

    /// Current raw content, if any.
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.content.read().expect("lock poisoned").clone()
    }

    /// Raw content of the backup slot, if a backup was taken.
    pub fn backup_bytes(&self) -> Option<Vec<u8>> {
        self.backup.read().expect("lock poisoned").clone()
    }

    /// Make subsequent `backup` calls fail with a permission error.
    pub fn fail_backups(&self, fail: bool) {
        self.fail_backup.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `replace` calls fail with a storage-full error.
    pub fn fail_replaces(&self, fail: bool) {
        self.fail_replace.store(fail, Ordering::SeqCst);
    }
}

impl RecordStore for InMemoryRecordStore {
    fn location(&self) -> String {
        format!("memory:{}", self.name)
    }

    fn load(&self) -> StoreResult<RecordSet> {
        let content = self.content.read().expect("lock poisoned");
        match content.as_deref() {
            Some(bytes) => codec::decode(bytes, &self.location()),
            None => Err(StoreError::NotFound(self.location())),
        }
    }

    fn backup(&self) -> StoreResult<bool> {
        let content = self.content.read().expect("lock poisoned");
        let Some(bytes) = content.as_ref() else {
            return Ok(false);
        };
        if self.fail_backup.load(Ordering::SeqCst) {
            return Err(StoreError::Backup {
                location: self.location(),
                backup: format!("{}.bak", self.location()),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "backup slot is read-only"),
            });
        }
        *self.backup.write().expect("lock poisoned") = Some(bytes.clone());
        Ok(true)
    }

    fn replace(&self, records: &RecordSet) -> StoreResult<()> {
        if self.fail_replace.load(Ordering::SeqCst) {
            return Err(StoreError::Persist {
                location: self.location(),
                source: io::Error::new(io::ErrorKind::Other, "no space left on device"),
            });
        }
        let bytes = codec::encode(records)?;
        *self.content.write().expect("lock poisoned") = Some(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gain_types::Record;

    #[test]
    fn new_store_is_absent() {
        let store = InMemoryRecordStore::new("primary");
        assert!(store.bytes().is_none());
        assert!(matches!(store.load(), Err(StoreError::NotFound(_))));
        assert!(!store.backup().unwrap());
        assert!(store.backup_bytes().is_none());
    }

    #[test]
    fn replace_then_load() {
        let store = InMemoryRecordStore::new("primary");
        let set: RecordSet = vec![Record::new("A").with_field("reps", 3)].into();
        store.replace(&set).unwrap();
        assert_eq!(store.load().unwrap(), set);
    }

    #[test]
    fn backup_is_byte_exact() {
        let store = InMemoryRecordStore::with_bytes("primary", b"[ ]".to_vec());
        assert!(store.backup().unwrap());
        assert_eq!(store.backup_bytes().unwrap(), b"[ ]");
    }

    #[test]
    fn injected_backup_failure() {
        let store = InMemoryRecordStore::with_bytes("primary", b"[]".to_vec());
        store.fail_backups(true);
        assert!(matches!(store.backup(), Err(StoreError::Backup { .. })));
        assert!(store.backup_bytes().is_none());
    }

    #[test]
    fn injected_replace_failure_keeps_content() {
        let store = InMemoryRecordStore::with_bytes("primary", b"[]".to_vec());
        store.fail_replaces(true);
        let set: RecordSet = vec![Record::new("A")].into();
        assert!(matches!(store.replace(&set), Err(StoreError::Persist { .. })));
        assert_eq!(store.bytes().unwrap(), b"[]");
    }

    #[test]
    fn location_is_prefixed() {
        assert_eq!(InMemoryRecordStore::new("incoming").location(), "memory:incoming");
    }
}

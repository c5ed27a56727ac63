use std::io;

use gain_types::RecordError;

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store has no content yet.
    #[error("store not found: {0}")]
    NotFound(String),

    /// The content is not well-formed JSON (includes an empty file).
    #[error("malformed JSON in {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON that is not a valid record set.
    #[error("invalid records in {location}: {source}")]
    Record {
        location: String,
        #[source]
        source: RecordError,
    },

    /// The pre-write snapshot could not be taken.
    #[error("cannot back up {location} to {backup}: {source}")]
    Backup {
        location: String,
        backup: String,
        #[source]
        source: io::Error,
    },

    /// The replacement content could not be written or moved into place.
    #[error("cannot write {location}: {source}")]
    Persist {
        location: String,
        #[source]
        source: io::Error,
    },

    /// Serialization failure while encoding a record set.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StoreError {
    /// Whether a primary store in this state may be treated as empty.
    ///
    /// Absent and syntactically broken stores qualify. A store that parses
    /// but holds something other than valid records does not: writing over
    /// it would discard data the merge never understood.
    pub fn is_fresh_start(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Parse { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

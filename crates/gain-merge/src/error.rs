use gain_store::StoreError;

/// Errors from a merge run, tagged with the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The primary store exists but could not be read or holds invalid records.
    #[error("cannot read primary records: {0}")]
    Primary(#[source] StoreError),

    /// The incoming store is missing, malformed, or holds invalid records.
    #[error("cannot read incoming records: {0}")]
    Incoming(#[source] StoreError),

    /// The pre-write backup failed; the primary store was not touched.
    #[error("backup failed, primary store left unchanged: {0}")]
    Backup(#[source] StoreError),

    /// Writing the merged set failed.
    #[error("cannot write merged records: {0}")]
    Write(#[source] StoreError),
}

/// Result alias for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

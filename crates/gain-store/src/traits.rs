use gain_types::RecordSet;

use crate::error::StoreResult;

/// A persisted record set that can be read, snapshotted, and replaced.
///
/// Implementations must satisfy these invariants:
/// - `load` never modifies the store.
/// - `backup` copies the current content byte for byte to a single backup
///   slot, overwriting whatever the slot held. It returns `Ok(false)` and does
///   nothing when the store has no content.
/// - `replace` is all-or-nothing: on error the previous content is intact.
pub trait RecordStore: Send + Sync {
    /// Human-readable location used in logs and error messages.
    fn location(&self) -> String;

    /// Read and validate the stored record set.
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) when the
    /// store has no content.
    fn load(&self) -> StoreResult<RecordSet>;

    /// Snapshot the current content into the backup slot.
    fn backup(&self) -> StoreResult<bool>;

    /// Replace the stored content with `records`.
    fn replace(&self, records: &RecordSet) -> StoreResult<()>;
}

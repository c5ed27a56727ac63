//! Record set storage for the GAIN exercise catalog.
//!
//! A store holds one [`RecordSet`](gain_types::RecordSet) as a JSON array and
//! owns a single backup slot for the content it held before the last write.
//!
//! # Storage Backends
//!
//! All backends implement the [`RecordStore`] trait:
//!
//! - [`JsonFileStore`] -- a JSON file with a sibling `.bak` backup
//! - [`InMemoryRecordStore`] -- byte buffer store for tests, with failure injection
//!
//! # Design Rules
//!
//! 1. Loading never writes.
//! 2. Backups are byte copies of whatever the store holds, parsable or not.
//! 3. Replacement is atomic: write a temporary file, then rename it into place.
//! 4. Missing content is reported as [`StoreError::NotFound`]; deciding whether
//!    that is fatal is the caller's business.

pub mod codec;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::{JsonFileStore, DEFAULT_BACKUP_SUFFIX};
pub use memory::InMemoryRecordStore;
pub use traits::RecordStore;

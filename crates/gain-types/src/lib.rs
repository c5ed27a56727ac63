//! Foundation types for the GAIN exercise catalog.
//!
//! An exercise catalog is a JSON array of loosely structured objects. The only
//! field the tooling understands is `name`, which identifies an exercise and
//! serves as the merge key. Everything else is carried through untouched.
//!
//! # Key Types
//!
//! - [`Record`] — One exercise: an ordered JSON object with a validated `name`
//! - [`RecordSet`] — An ordered list of records, as stored on disk
//! - [`NameIndex`] — Name-to-position lookup used while merging
//! - [`RecordError`] — Validation failures at the JSON boundary

pub mod error;
pub mod index;
pub mod record;
pub mod set;

pub use error::{RecordError, RecordResult};
pub use index::NameIndex;
pub use record::{Record, NAME_FIELD};
pub use set::RecordSet;

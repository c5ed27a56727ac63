//! Merge engine for the GAIN exercise catalog.
//!
//! Folds an incoming catalog into the primary one by exercise name: known
//! names are updated field by field in place, unknown names are appended.
//! The primary store is backed up before it is replaced, and replacement is
//! atomic.
//!
//! # Modules
//!
//! - [`config`] — [`MergeConfig`]: where the stores live
//! - [`reconcile`] — the name-keyed overlay/append pass
//! - [`merger`] — [`merge_stores`] and the file-backed [`Merger`]
//! - [`report`] — [`MergeReport`] counts and the never-failing [`MergeOutcome`]
//! - [`error`] — [`MergeError`], tagged by stage

pub mod config;
pub mod error;
pub mod merger;
pub mod reconcile;
pub mod report;

pub use config::{MergeConfig, DEFAULT_INCOMING_FILE, DEFAULT_PRIMARY_FILE};
pub use error::{MergeError, MergeResult};
pub use merger::{merge_stores, Merger};
pub use reconcile::{reconcile, Reconciled};
pub use report::{MergeOutcome, MergeReport};

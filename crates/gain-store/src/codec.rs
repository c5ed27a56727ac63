//! JSON encoding shared by every store backend.
//!
//! Decoding happens in two passes: bytes to a generic JSON value, then value
//! to a validated [`RecordSet`]. The split lets callers tell a syntactically
//! broken store ([`StoreError::Parse`]) from one that is well-formed but has
//! the wrong shape ([`StoreError::Record`]).

use gain_types::RecordSet;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// Decode stored bytes into a record set.
pub fn decode(bytes: &[u8], location: &str) -> StoreResult<RecordSet> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| StoreError::Parse {
        location: location.to_string(),
        source,
    })?;
    RecordSet::from_value(value).map_err(|source| StoreError::Record {
        location: location.to_string(),
        source,
    })
}

/// Encode a record set as pretty JSON with two-space indentation.
///
/// No trailing newline is written.
pub fn encode(records: &RecordSet) -> StoreResult<Vec<u8>> {
    serde_json::to_vec_pretty(records).map_err(|e| StoreError::Serialization(e.to_string()))
}

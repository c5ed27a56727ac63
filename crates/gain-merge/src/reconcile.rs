//! Name-keyed reconciliation of an incoming record set into a primary one.

use gain_types::{NameIndex, RecordSet};
use tracing::{debug, warn};

/// Addition and update counts from one reconciliation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reconciled {
    pub added: usize,
    pub updated: usize,
}

/// Index `primary` by name, warning about duplicate names already present.
pub fn index_primary(primary: &RecordSet) -> NameIndex {
    let index = NameIndex::build(primary);
    for &position in index.shadowed() {
        if let Some(record) = primary.get(position) {
            warn!(name = record.name(), position, "duplicate name in primary records; only the last is updated");
        }
    }
    index
}

/// Merge `incoming` into `primary`, in incoming order.
///
/// A record whose name is already indexed is overlaid field by field onto
/// the existing entry, which keeps its position. Any other record is
/// appended and indexed immediately, so a later incoming record with the
/// same name accumulates onto it as an update.
pub fn reconcile(primary: &mut RecordSet, index: &mut NameIndex, incoming: RecordSet) -> Reconciled {
    let mut counts = Reconciled::default();
    for record in incoming {
        match index.get(record.name()).and_then(|pos| primary.get_mut(pos)) {
            Some(existing) => {
                let changed = existing.overlay(&record);
                debug!(name = record.name(), changed, "updated record");
                counts.updated += 1;
            }
            None => {
                let name = record.name().to_string();
                let position = primary.push(record);
                debug!(name = %name, position, "added record");
                index.insert(name, position);
                counts.added += 1;
            }
        }
    }
    counts
}

use gain_store::{RecordStore, StoreError};
use gain_types::RecordSet;
use tracing::{debug, error, info, warn};

use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};
use crate::reconcile::{index_primary, reconcile};
use crate::report::{MergeOutcome, MergeReport};

/// Merges the incoming catalog into the primary catalog.
///
/// The run is linear: load primary (absent or unparsable means empty), load
/// incoming (any failure aborts), reconcile, back up the primary store, then
/// replace it. Nothing is written unless every earlier step succeeded, and
/// the primary store is only replaced after its backup exists.
pub fn merge_stores(primary: &dyn RecordStore, incoming: &dyn RecordStore) -> MergeResult<MergeReport> {
    let mut records = load_primary(primary)?;
    let mut index = index_primary(&records);

    let incoming_records = incoming.load().map_err(MergeError::Incoming)?;
    debug!(location = %incoming.location(), records = incoming_records.len(), "loaded incoming records");

    let counts = reconcile(&mut records, &mut index, incoming_records);

    let backed_up = primary.backup().map_err(MergeError::Backup)?;
    primary.replace(&records).map_err(MergeError::Write)?;

    let report = MergeReport {
        added: counts.added,
        updated: counts.updated,
        records: records.len(),
        backed_up,
    };
    info!(
        added = report.added,
        updated = report.updated,
        records = report.records,
        backed_up = report.backed_up,
        "merge complete"
    );
    Ok(report)
}

fn load_primary(store: &dyn RecordStore) -> MergeResult<RecordSet> {
    match store.load() {
        Ok(records) => Ok(records),
        Err(StoreError::NotFound(location)) => {
            debug!(%location, "no primary records; starting fresh");
            Ok(RecordSet::new())
        }
        Err(e) if e.is_fresh_start() => {
            warn!(error = %e, "primary records unreadable; starting fresh");
            Ok(RecordSet::new())
        }
        Err(e) => Err(MergeError::Primary(e)),
    }
}

/// File-backed merge driven by a [`MergeConfig`].
#[derive(Clone, Debug, Default)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Run the merge and propagate any failure.
    pub fn merge(&self) -> MergeResult<MergeReport> {
        debug!(
            primary = %self.config.primary.display(),
            incoming = %self.config.incoming.display(),
            "starting merge"
        );
        merge_stores(&self.config.primary_store(), &self.config.incoming_store())
    }

    /// Run the merge, converting any failure into a message.
    pub fn run(&self) -> MergeOutcome {
        match self.merge() {
            Ok(report) => MergeOutcome::Merged(report),
            Err(e) => {
                error!(error = %e, "merge failed");
                MergeOutcome::Failed(e.to_string())
            }
        }
    }
}

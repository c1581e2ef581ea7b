use ii_core::ports::ProgressPort;
use ii_core::IngestId;
use tracing::info;

/// Progress indicator for a terminal session: lookups show up in the log.
pub struct TracingProgress;

impl ProgressPort for TracingProgress {
    fn start(&self, ingest_id: &IngestId) {
        info!(ingest_id = %ingest_id, "Looking up ingest");
    }

    fn done(&self, ingest_id: &IngestId) {
        info!(ingest_id = %ingest_id, "Lookup finished");
    }
}

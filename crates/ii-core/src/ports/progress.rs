use crate::ids::IngestId;

/// Global loading indicator.
///
/// Purely a notification: nothing waits on it, and the lookup behaves the
/// same whether or not anyone listens.
pub trait ProgressPort: Send + Sync {
    fn start(&self, ingest_id: &IngestId);
    fn done(&self, ingest_id: &IngestId);
}

pub struct NoopProgress;

impl ProgressPort for NoopProgress {
    fn start(&self, _ingest_id: &IngestId) {}
    fn done(&self, _ingest_id: &IngestId) {}
}

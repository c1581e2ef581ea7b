use async_trait::async_trait;

use crate::ingest::IngestRecord;

/// Post-lookup hook, invoked by the caller after a lookup succeeded.
#[async_trait]
pub trait IngestLookupObserver: Send + Sync {
    async fn on_ingest_found(&self, record: &IngestRecord) -> anyhow::Result<()>;
}

//! Bounded, persisted history of recently inspected ingests.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info_span, warn, Instrument};

use ii_core::ports::{IngestLookupObserver, KeyValueStorePort};
use ii_core::{IngestRecord, RecentIngestEntry, RecentIngests};

/// Storage slot holding the serialized history.
pub const RECENT_INGESTS_KEY: &str = "recent-ingests";

/// Use case for reading and updating the recent-ingests history.
///
/// Absent or unreadable history is treated as empty. Writes from this
/// process are serialized; across processes the last write wins.
pub struct RecentIngestStore {
    store: Arc<dyn KeyValueStorePort>,
    write_lock: Mutex<()>,
}

impl RecentIngestStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Entries, most recent first.
    pub async fn list(&self) -> Result<Vec<RecentIngestEntry>> {
        let span = info_span!("usecase.recent_ingests.list");

        async { Ok(self.load().await?.into_entries()) }
            .instrument(span)
            .await
    }

    /// Moves `record` to the front of the history and persists it.
    pub async fn record(&self, record: &IngestRecord) -> Result<()> {
        let span = info_span!("usecase.recent_ingests.record", ingest_id = %record.id);

        async {
            let _guard = self.write_lock.lock().await;

            let mut recent = self.load().await?;
            recent.record(record);

            let serialized = serde_json::to_string(recent.entries())
                .context("Failed to serialize recent ingests")?;
            self.store
                .set(RECENT_INGESTS_KEY, &serialized)
                .await
                .context("Failed to persist recent ingests")?;

            debug!(entries = recent.entries().len(), "Recent ingests updated");
            Ok(())
        }
        .instrument(span)
        .await
    }

    async fn load(&self) -> Result<RecentIngests> {
        let Some(raw) = self
            .store
            .get(RECENT_INGESTS_KEY)
            .await
            .context("Failed to read recent ingests")?
        else {
            return Ok(RecentIngests::default());
        };

        match serde_json::from_str::<Vec<RecentIngestEntry>>(&raw) {
            Ok(entries) => Ok(RecentIngests::from_entries(entries)),
            Err(err) => {
                warn!(error = %err, "Recent ingest history is corrupt, starting empty");
                Ok(RecentIngests::default())
            }
        }
    }
}

#[async_trait]
impl IngestLookupObserver for RecentIngestStore {
    async fn on_ingest_found(&self, record: &IngestRecord) -> Result<()> {
        self.record(record).await
    }
}

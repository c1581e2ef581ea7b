//! Bounded history of recently inspected ingests.

use serde::{Deserialize, Serialize};

use crate::ids::{IngestId, SpaceId};
use crate::ingest::IngestRecord;

pub const MAX_RECENT_INGESTS: usize = 10;

/// One remembered lookup, keyed by ingest id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentIngestEntry {
    pub ingest_id: IngestId,
    pub space: SpaceId,
    pub external_identifier: String,
    /// Record as it was last seen.
    pub ingest: IngestRecord,
}

impl RecentIngestEntry {
    pub fn from_record(record: &IngestRecord) -> Self {
        Self {
            ingest_id: record.id.clone(),
            space: record.space_id().clone(),
            external_identifier: record.external_identifier().to_string(),
            ingest: record.clone(),
        }
    }
}

/// Most-recent-first, duplicate-free, at most [`MAX_RECENT_INGESTS`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentIngests {
    entries: Vec<RecentIngestEntry>,
}

impl RecentIngests {
    /// Re-establishes the invariants on entries loaded from storage.
    pub fn from_entries(entries: Vec<RecentIngestEntry>) -> Self {
        let mut recent = Self::default();
        for entry in entries.into_iter().rev() {
            recent.push_front(entry);
        }
        recent
    }

    pub fn record(&mut self, record: &IngestRecord) {
        self.push_front(RecentIngestEntry::from_record(record));
    }

    pub fn entries(&self) -> &[RecentIngestEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RecentIngestEntry> {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_front(&mut self, entry: RecentIngestEntry) {
        self.entries
            .retain(|existing| existing.ingest_id != entry.ingest_id);
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_RECENT_INGESTS);
    }
}

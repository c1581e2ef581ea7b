//! Business logic use cases
//!
//! LookupIngest → observers (RecentIngestStore) → IngestViewComposer,
//! orchestrated by InspectIngest.

pub mod inspect_ingest;
pub mod lookup_ingest;
pub mod recent_ingests;

pub use inspect_ingest::{IngestInspection, InspectIngest};
pub use lookup_ingest::LookupIngest;
pub use recent_ingests::{RecentIngestStore, RECENT_INGESTS_KEY};

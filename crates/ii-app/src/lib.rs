//! Ingest inspector application layer
//!
//! Use cases that sit between the presentation shell and the ports:
//! looking an ingest up, remembering it, and turning the outcome into
//! something displayable.

pub mod app_paths;
pub mod usecases;

pub use app_paths::AppPaths;
pub use usecases::{
    IngestInspection, InspectIngest, LookupIngest, RecentIngestStore, RECENT_INGESTS_KEY,
};

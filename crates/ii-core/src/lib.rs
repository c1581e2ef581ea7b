//! # ii-core
//!
//! Core domain models and presentation logic for the ingest inspector.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the event timeline builder, the recency-aware time formatter, the ingest
//! view composer and the recent-history policy, plus the ports that
//! infrastructure implements.

// Public module exports
pub mod config;
pub mod errors;
pub mod ids;
pub mod ingest;
pub mod ports;
pub mod recent;
pub mod time_format;
pub mod timeline;
pub mod view;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use errors::{LookupError, TimeFormatError};
pub use ids::{IngestId, SpaceId};
pub use ingest::{Environment, EnvironmentSelector, IngestRecord, IngestStatus, RawEvent};
pub use recent::{RecentIngestEntry, RecentIngests};
pub use time_format::{LocaleRegistry, TimeFormatter};
pub use timeline::{DisplayEvent, EventTimelineBuilder};
pub use view::{describe_failure, IngestViewComposer, IngestViewModel, LookupFailureView};

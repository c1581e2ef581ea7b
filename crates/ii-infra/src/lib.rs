//! Infrastructure adapters for the ingest inspector
//!
//! Implements the `ii-core` ports against reqwest, the file system, the
//! system clock and the process environment.

pub mod fs;
pub mod http;
pub mod progress;
pub mod time;

pub use fs::{DirsAppDirsAdapter, FileKeyValueStore};
pub use http::{HttpIngestGateway, IngestApiEndpoints};
pub use progress::TracingProgress;
pub use time::{SystemClock, SystemLocale};

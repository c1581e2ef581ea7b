//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations. Everything with I/O or ambient state (wall clock,
//! locale, network, durable storage) sits behind one of these traits.

pub mod app_dirs;
mod clock;
pub mod errors;
pub mod ingest_gateway;
pub mod key_value_store;
mod locale;
pub mod observer;
pub mod progress;

pub use app_dirs::{AppDirs, AppDirsPort};
pub use clock::*;
pub use errors::AppDirsError;
pub use ingest_gateway::IngestGatewayPort;
pub use key_value_store::KeyValueStorePort;
pub use locale::*;
pub use observer::IngestLookupObserver;
pub use progress::{NoopProgress, ProgressPort};

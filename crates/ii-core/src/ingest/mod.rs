//! Ingest records as returned by the ingest API.

pub mod environment;
pub mod model;
pub mod source_location;

pub use environment::{Environment, EnvironmentSelector, StorageBuckets, UnknownEnvironment};
pub use model::{
    BagDescriptor, BagInfo, Callback, CallbackStatusRef, IngestRecord, IngestStatus, RawEvent,
    SpaceRef, StatusRef,
};
pub use source_location::SourceLocation;

//! Display models handed to the presentation layer.

mod composer;
mod failure;
mod model;

pub use composer::IngestViewComposer;
pub use failure::{describe_failure, LookupFailureView, API_LOGS_URL};
pub use model::{
    BagLocation, BagLocations, CallbackDisplay, IngestViewModel, SourceLink, VersionDisplay,
};

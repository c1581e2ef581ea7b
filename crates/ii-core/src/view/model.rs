use std::fmt;

use serde::Serialize;

use crate::ids::{IngestId, SpaceId};
use crate::ingest::{Environment, IngestStatus};
use crate::timeline::DisplayEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum VersionDisplay {
    Assigned(String),
    NoneAssigned,
}

impl fmt::Display for VersionDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionDisplay::Assigned(version) => f.write_str(version),
            VersionDisplay::NoneAssigned => f.write_str("none assigned"),
        }
    }
}

/// One stored copy of the bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BagLocation {
    pub bucket: String,
    /// `s3://<bucket>/<path>`
    pub uri: String,
    pub console_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BagLocations {
    pub primary: BagLocation,
    pub glacier: BagLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLink {
    pub href: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackDisplay {
    pub label: String,
    pub raw_status: String,
}

/// Read-only view of one ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestViewModel {
    pub id: IngestId,
    pub environment: Environment,
    pub status: IngestStatus,
    pub space: SpaceId,
    pub external_identifier: String,
    pub version: VersionDisplay,
    pub bag_path: String,
    pub source: Option<SourceLink>,
    /// Present only for succeeded ingests.
    pub bag_locations: Option<BagLocations>,
    pub created_date: String,
    pub created_display: String,
    pub last_updated_date: Option<String>,
    pub last_updated_display: String,
    pub callback: Option<CallbackDisplay>,
    pub events: Vec<DisplayEvent>,
}

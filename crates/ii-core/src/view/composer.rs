use tracing::warn;

use super::model::{
    BagLocation, BagLocations, CallbackDisplay, IngestViewModel, SourceLink, VersionDisplay,
};
use crate::errors::TimeFormatError;
use crate::ingest::{IngestRecord, IngestStatus, StorageBuckets};
use crate::time_format::{TimeFormatter, UNKNOWN_DATE_PLACEHOLDER};
use crate::timeline::EventTimelineBuilder;

/// Callback status the API reports while the notification is outstanding.
const CALLBACK_PROCESSING: &str = "processing";

/// Turns an [`IngestRecord`] into the display model.
///
/// Composition never fails: timestamps that cannot be parsed render as
/// [`UNKNOWN_DATE_PLACEHOLDER`] and the rest of the view is still built.
#[derive(Clone)]
pub struct IngestViewComposer {
    formatter: TimeFormatter,
}

impl IngestViewComposer {
    pub fn new(formatter: TimeFormatter) -> Self {
        Self { formatter }
    }

    pub fn compose(&self, record: &IngestRecord) -> IngestViewModel {
        let bag_path = bag_path(record);
        let bag_locations = (record.status() == &IngestStatus::Succeeded)
            .then(|| bag_locations(record, &bag_path));

        let last_updated_date = record.last_updated().map(str::to_string);
        let last_updated_display = match last_updated_date.as_deref() {
            Some(timestamp) => self.display_or_placeholder(timestamp, |ts| {
                Ok(format!(
                    "{}{}",
                    self.formatter.localize(ts)?,
                    self.formatter.delta_suffix(ts)?
                ))
            }),
            None => UNKNOWN_DATE_PLACEHOLDER.to_string(),
        };

        IngestViewModel {
            id: record.id.clone(),
            environment: record.environment,
            status: record.status().clone(),
            space: record.space_id().clone(),
            external_identifier: record.external_identifier().to_string(),
            version: match record.version() {
                Some(version) => VersionDisplay::Assigned(version.to_string()),
                None => VersionDisplay::NoneAssigned,
            },
            bag_path,
            source: source_link(record),
            bag_locations,
            created_date: record.created_date.clone(),
            created_display: self.display_or_placeholder(&record.created_date, |ts| {
                self.formatter.localize(ts)
            }),
            last_updated_date,
            last_updated_display,
            callback: record.callback.as_ref().map(|callback| {
                let raw_status = callback.status.id.clone();
                let label = if raw_status == CALLBACK_PROCESSING {
                    "pending".to_string()
                } else {
                    raw_status.clone()
                };
                CallbackDisplay { label, raw_status }
            }),
            events: EventTimelineBuilder::build(&record.events),
        }
    }

    fn display_or_placeholder<F>(&self, timestamp: &str, render: F) -> String
    where
        F: FnOnce(&str) -> Result<String, TimeFormatError>,
    {
        render(timestamp).unwrap_or_else(|err| {
            warn!(error = %err, "Rendering placeholder for unparseable timestamp");
            UNKNOWN_DATE_PLACEHOLDER.to_string()
        })
    }
}

/// `<space>/<externalIdentifier>/<version>`
fn bag_path(record: &IngestRecord) -> String {
    format!(
        "{}/{}/{}",
        record.space_id(),
        record.external_identifier(),
        record.version().unwrap_or_default()
    )
}

fn bag_locations(record: &IngestRecord, bag_path: &str) -> BagLocations {
    let buckets = StorageBuckets::for_environment(record.environment);
    BagLocations {
        primary: bag_location(buckets.primary, bag_path),
        glacier: bag_location(buckets.glacier, bag_path),
    }
}

fn bag_location(bucket: &str, bag_path: &str) -> BagLocation {
    BagLocation {
        bucket: bucket.to_string(),
        uri: format!("s3://{bucket}/{bag_path}"),
        console_url: format!(
            "https://s3.console.aws.amazon.com/s3/buckets/{bucket}/{bag_path}/?region=eu-west-1&tab=overview"
        ),
    }
}

/// Pre-rendered links from the record win over the derived ones.
fn source_link(record: &IngestRecord) -> Option<SourceLink> {
    let href = record.s3_url.clone().filter(|url| !url.is_empty());
    let display = record.display_s3_url.clone().filter(|url| !url.is_empty());

    match (href, display, &record.source_location) {
        (Some(href), Some(display), _) => Some(SourceLink { href, display }),
        (Some(href), None, location) => Some(SourceLink {
            display: location
                .as_ref()
                .map(|location| location.display_uri())
                .unwrap_or_else(|| href.clone()),
            href,
        }),
        (None, display, Some(location)) => Some(SourceLink {
            href: location.console_url(),
            display: display.unwrap_or_else(|| location.display_uri()),
        }),
        (None, _, None) => None,
    }
}

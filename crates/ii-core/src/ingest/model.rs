use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Environment, SourceLocation};
use crate::ids::{IngestId, SpaceId};

/// Lifecycle state of an ingest.
///
/// Values the inspector does not know about are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IngestStatus {
    Accepted,
    Processing,
    Succeeded,
    Failed,
    Other(String),
}

impl IngestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            IngestStatus::Accepted => "accepted",
            IngestStatus::Processing => "processing",
            IngestStatus::Succeeded => "succeeded",
            IngestStatus::Failed => "failed",
            IngestStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for IngestStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "accepted" => IngestStatus::Accepted,
            "processing" => IngestStatus::Processing,
            "succeeded" => IngestStatus::Succeeded,
            "failed" => IngestStatus::Failed,
            _ => IngestStatus::Other(value),
        }
    }
}

impl From<IngestStatus> for String {
    fn from(status: IngestStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for IngestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRef {
    pub id: IngestStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceRef {
    pub id: SpaceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BagInfo {
    pub external_identifier: String,
    /// Assigned once the bag versioner has run; the API sends either a
    /// string (`"v3"`) or a bare number.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagDescriptor {
    pub info: BagInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackStatusRef {
    pub id: String,
}

/// Notification sent to a third party once the ingest resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callback {
    pub status: CallbackStatusRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One lifecycle event, already annotated upstream with retry and
/// matching information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub created_date: String,
    pub description: String,
    #[serde(rename = "_repeated", default)]
    pub repeated: bool,
    #[serde(rename = "_count", default = "first_attempt")]
    pub attempt_count: u32,
    #[serde(rename = "_is_unmatched_start", default)]
    pub unmatched_start: bool,
    #[serde(rename = "kibanaUrl", default, skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,
}

fn first_attempt() -> u32 {
    1
}

/// Canonical (flat) ingest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestRecord {
    pub id: IngestId,
    pub space: SpaceRef,
    pub bag: BagDescriptor,
    pub status: StatusRef,
    pub created_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<SourceLocation>,
    #[serde(rename = "s3Url", default, skip_serializing_if = "Option::is_none")]
    pub s3_url: Option<String>,
    #[serde(rename = "displayS3Url", default, skip_serializing_if = "Option::is_none")]
    pub display_s3_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
    pub environment: Environment,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

impl IngestRecord {
    pub fn status(&self) -> &IngestStatus {
        &self.status.id
    }

    pub fn space_id(&self) -> &SpaceId {
        &self.space.id
    }

    pub fn external_identifier(&self) -> &str {
        &self.bag.info.external_identifier
    }

    /// Bag version, `None` when unassigned or blank.
    pub fn version(&self) -> Option<&str> {
        self.bag
            .info
            .version
            .as_deref()
            .filter(|version| !version.is_empty())
    }

    /// Last update time, falling back to the newest event when the record
    /// does not carry one.
    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated_date
            .as_deref()
            .filter(|date| !date.is_empty())
            .or_else(|| {
                self.events
                    .iter()
                    .map(|event| event.created_date.as_str())
                    .max()
            })
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => Some(text),
        Some(Raw::Number(number)) => Some(number.to_string()),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "id": "123e4567-e89b-12d3-a456-426655440000",
            "space": {"id": "digitised", "type": "Space"},
            "bag": {"info": {"externalIdentifier": "b12345678", "version": "v2", "type": "BagInfo"}, "type": "Bag"},
            "status": {"id": "succeeded", "type": "Status"},
            "ingestType": {"id": "create", "type": "IngestType"},
            "createdDate": "2026-10-14T09:00:00.123Z",
            "lastUpdatedDate": "2026-10-14T09:30:00Z",
            "sourceLocation": {"bucket": "uploads", "path": "digitised/b12345678.tar.gz"},
            "environment": "production",
            "events": [
                {"createdDate": "2026-10-14T09:10:00Z", "description": "Unpacking started", "_repeated": false, "_count": 1, "_is_unmatched_start": false, "kibanaUrl": ""}
            ]
        })
    }

    #[test]
    fn parses_api_record_and_ignores_unknown_fields() {
        let record: IngestRecord = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(record.id.as_str(), "123e4567-e89b-12d3-a456-426655440000");
        assert_eq!(record.space_id().as_str(), "digitised");
        assert_eq!(record.external_identifier(), "b12345678");
        assert_eq!(record.version(), Some("v2"));
        assert_eq!(record.status(), &IngestStatus::Succeeded);
        assert_eq!(record.environment, Environment::Production);
        assert_eq!(record.events.len(), 1);
        assert_eq!(record.events[0].log_url.as_deref(), Some(""));
        assert!(record.callback.is_none());
    }

    #[test]
    fn numeric_and_missing_versions_are_accepted() {
        let mut value = sample_json();
        value["bag"]["info"]["version"] = json!(3);
        let record: IngestRecord = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(record.version(), Some("3"));

        value["bag"]["info"].as_object_mut().unwrap().remove("version");
        let record: IngestRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.version(), None);
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let mut value = sample_json();
        value["status"]["id"] = json!("paused");
        let record: IngestRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.status(), &IngestStatus::Other("paused".to_string()));
        assert_eq!(record.status().as_str(), "paused");
    }

    #[test]
    fn event_annotations_default_when_absent() {
        let event: RawEvent = serde_json::from_value(json!({
            "createdDate": "2026-10-14T09:10:00Z",
            "description": "Register succeeded"
        }))
        .unwrap();

        assert!(!event.repeated);
        assert_eq!(event.attempt_count, 1);
        assert!(!event.unmatched_start);
        assert_eq!(event.log_url, None);
    }

    #[test]
    fn last_updated_falls_back_to_newest_event() {
        let mut value = sample_json();
        value["lastUpdatedDate"] = json!("");
        value["events"] = json!([
            {"createdDate": "2026-10-14T09:10:00Z", "description": "Unpacking started"},
            {"createdDate": "2026-10-14T09:40:00Z", "description": "Unpacking succeeded"},
            {"createdDate": "2026-10-14T09:20:00Z", "description": "Register started"}
        ]);
        let record: IngestRecord = serde_json::from_value(value).unwrap();

        assert_eq!(record.last_updated(), Some("2026-10-14T09:40:00Z"));
    }

    #[test]
    fn last_updated_is_none_without_date_or_events() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("lastUpdatedDate");
        value["events"] = json!([]);
        let record: IngestRecord = serde_json::from_value(value).unwrap();

        assert_eq!(record.last_updated(), None);
    }
}

use serde::Serialize;

use crate::errors::{LookupError, LookupErrorKind};
use crate::ids::IngestId;

/// Operational logs of the ingests API.
pub const API_LOGS_URL: &str = "https://logging.wellcomecollection.org/app/kibana#/discover?_g=()&_a=(columns:!(log),index:'6db79190-8556-11ea-8b79-41cfdb8d9024',interval:auto,query:(language:kuery,query:'service_name%20:%20%22*-ingests-service%22'),sort:!(!('@timestamp',desc)))";

/// What the operator sees instead of an ingest when the lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupFailureView {
    pub ingest_id: IngestId,
    pub kind: LookupErrorKind,
    pub message: String,
    pub logs_url: String,
}

pub fn describe_failure(error: &LookupError) -> LookupFailureView {
    LookupFailureView {
        ingest_id: error.ingest_id().clone(),
        kind: error.kind(),
        message: error.to_string(),
        logs_url: API_LOGS_URL.to_string(),
    }
}

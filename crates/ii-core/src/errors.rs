//! Domain error kinds.

use serde::Serialize;
use thiserror::Error;

use crate::ids::IngestId;

/// Message the ingest API returns for a malformed identifier.
pub const INVALID_INGEST_ID_MESSAGE: &str = "Invalid ingest ID.";
/// Message the ingest API returns when no record exists.
pub const INGEST_NOT_FOUND_MESSAGE: &str = "Ingest not found.";

/// Classified failure of one ingest lookup.
///
/// The display strings are the user-facing messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("The ingest ID {ingest_id} is not valid.")]
    InvalidIngestId { ingest_id: IngestId },

    #[error("Could not find ingest {ingest_id}.")]
    IngestNotFound { ingest_id: IngestId },

    #[error("Something went wrong while looking up ingest {ingest_id}.")]
    UnknownLookupFailure { ingest_id: IngestId, detail: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupErrorKind {
    InvalidIngestId,
    IngestNotFound,
    UnknownLookupFailure,
}

impl LookupError {
    /// Classifies a non-200 API response by its `message` field, then by
    /// status code when the body carried no message.
    pub fn from_api_response(ingest_id: IngestId, status: u16, message: Option<&str>) -> Self {
        match (message, status) {
            (Some(INVALID_INGEST_ID_MESSAGE), _) | (None, 400) => {
                LookupError::InvalidIngestId { ingest_id }
            }
            (Some(INGEST_NOT_FOUND_MESSAGE), _) | (None, 404) => {
                LookupError::IngestNotFound { ingest_id }
            }
            (Some(other), _) => LookupError::UnknownLookupFailure {
                ingest_id,
                detail: format!("HTTP {status}: {other}"),
            },
            (None, _) => LookupError::UnknownLookupFailure {
                ingest_id,
                detail: format!("HTTP {status}"),
            },
        }
    }

    pub fn unknown(ingest_id: IngestId, detail: impl Into<String>) -> Self {
        LookupError::UnknownLookupFailure {
            ingest_id,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::InvalidIngestId { .. } => LookupErrorKind::InvalidIngestId,
            LookupError::IngestNotFound { .. } => LookupErrorKind::IngestNotFound,
            LookupError::UnknownLookupFailure { .. } => LookupErrorKind::UnknownLookupFailure,
        }
    }

    pub fn ingest_id(&self) -> &IngestId {
        match self {
            LookupError::InvalidIngestId { ingest_id }
            | LookupError::IngestNotFound { ingest_id }
            | LookupError::UnknownLookupFailure { ingest_id, .. } => ingest_id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == LookupErrorKind::IngestNotFound
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeFormatError {
    #[error("malformed timestamp '{input}': {reason}")]
    MalformedTimestamp { input: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> IngestId {
        IngestId::from_str("abc")
    }

    #[test]
    fn classifies_by_api_message() {
        let err = LookupError::from_api_response(id(), 404, Some("Ingest not found."));
        assert_eq!(err.kind(), LookupErrorKind::IngestNotFound);

        let err = LookupError::from_api_response(id(), 400, Some("Invalid ingest ID."));
        assert_eq!(err.kind(), LookupErrorKind::InvalidIngestId);
    }

    #[test]
    fn message_wins_over_status_code() {
        let err = LookupError::from_api_response(id(), 500, Some("Ingest not found."));
        assert_eq!(err.kind(), LookupErrorKind::IngestNotFound);

        let err = LookupError::from_api_response(id(), 404, Some("Gateway exploded"));
        assert_eq!(err.kind(), LookupErrorKind::UnknownLookupFailure);
    }

    #[test]
    fn falls_back_to_status_code_without_message() {
        assert_eq!(
            LookupError::from_api_response(id(), 404, None).kind(),
            LookupErrorKind::IngestNotFound
        );
        assert_eq!(
            LookupError::from_api_response(id(), 400, None).kind(),
            LookupErrorKind::InvalidIngestId
        );
        assert_eq!(
            LookupError::from_api_response(id(), 502, None).kind(),
            LookupErrorKind::UnknownLookupFailure
        );
    }

    #[test]
    fn user_messages_name_the_ingest() {
        let err = LookupError::IngestNotFound { ingest_id: id() };
        assert_eq!(err.to_string(), "Could not find ingest abc.");

        let err = LookupError::InvalidIngestId { ingest_id: id() };
        assert_eq!(err.to_string(), "The ingest ID abc is not valid.");

        let err = LookupError::unknown(id(), "connection reset");
        assert_eq!(
            err.to_string(),
            "Something went wrong while looking up ingest abc."
        );
    }
}

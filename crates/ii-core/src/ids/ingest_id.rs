use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of one ingest, e.g. `123e4567-e89b-12d3-a456-426655440000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngestId(String);

impl_id!(IngestId);

impl IngestId {
    /// Trims surrounding whitespace, as pasted identifiers often carry it.
    ///
    /// Returns `None` when nothing is left; an empty lookup is never issued.
    pub fn parse_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::from_str(trimmed))
        }
    }
}

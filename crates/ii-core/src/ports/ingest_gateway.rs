use async_trait::async_trait;

use crate::errors::LookupError;
use crate::ids::IngestId;
use crate::ingest::{EnvironmentSelector, IngestRecord};

/// Remote ingest API.
///
/// Implementations issue exactly one request per queried environment and
/// never retry. Every failure is returned already classified.
#[async_trait]
pub trait IngestGatewayPort: Send + Sync {
    async fn fetch(
        &self,
        ingest_id: &IngestId,
        selector: EnvironmentSelector,
    ) -> Result<IngestRecord, LookupError>;
}

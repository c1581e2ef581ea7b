//! Lookup, history and composition in one step.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info_span, warn, Instrument};

use ii_core::ports::IngestLookupObserver;
use ii_core::view::describe_failure;
use ii_core::{
    EnvironmentSelector, IngestId, IngestViewComposer, IngestViewModel, LookupFailureView,
};

use super::lookup_ingest::LookupIngest;

/// Outcome of inspecting one ingest. Never carries partial data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IngestInspection {
    Found(IngestViewModel),
    Failed(LookupFailureView),
}

/// Use case behind the `lookup` command.
///
/// ## Behavior
/// - Fetches the ingest through [`LookupIngest`]
/// - Notifies every observer (e.g. the recent history); observer errors
///   are logged and never fail the inspection
/// - Composes the view model, or a failure view when the lookup failed
pub struct InspectIngest {
    lookup: Arc<LookupIngest>,
    observers: Vec<Arc<dyn IngestLookupObserver>>,
    composer: IngestViewComposer,
}

impl InspectIngest {
    pub fn new(
        lookup: Arc<LookupIngest>,
        observers: Vec<Arc<dyn IngestLookupObserver>>,
        composer: IngestViewComposer,
    ) -> Self {
        Self {
            lookup,
            observers,
            composer,
        }
    }

    pub async fn execute(
        &self,
        ingest_id: &IngestId,
        selector: EnvironmentSelector,
    ) -> IngestInspection {
        let span = info_span!("usecase.inspect_ingest.execute", ingest_id = %ingest_id);

        async {
            let record = match self.lookup.execute(ingest_id, selector).await {
                Ok(record) => record,
                Err(err) => return IngestInspection::Failed(describe_failure(&err)),
            };

            for observer in &self.observers {
                if let Err(err) = observer.on_ingest_found(&record).await {
                    warn!(error = ?err, "Lookup observer failed");
                }
            }

            IngestInspection::Found(self.composer.compose(&record))
        }
        .instrument(span)
        .await
    }
}

//! Looks one ingest up, sharing the request between concurrent callers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared, WeakShared};
use tracing::{debug, info, info_span, warn, Instrument};

use ii_core::ports::{IngestGatewayPort, NoopProgress, ProgressPort};
use ii_core::{EnvironmentSelector, IngestId, IngestRecord, LookupError};

type LookupResult = Result<IngestRecord, LookupError>;
type SharedLookup = Shared<BoxFuture<'static, LookupResult>>;
type LookupKey = (IngestId, EnvironmentSelector);

/// Use case for fetching an ingest record.
///
/// ## Behavior
/// - One request per call, never retried
/// - A call made while an identical `(id, selector)` lookup is pending
///   awaits that lookup instead of issuing a second request
/// - Every request is bracketed by `ProgressPort::start` / `done`; `done`
///   fires even when every caller drops the future early
pub struct LookupIngest {
    gateway: Arc<dyn IngestGatewayPort>,
    progress: Arc<dyn ProgressPort>,
    in_flight: Arc<Mutex<HashMap<LookupKey, WeakShared<BoxFuture<'static, LookupResult>>>>>,
}

impl LookupIngest {
    pub fn new(gateway: Arc<dyn IngestGatewayPort>) -> Self {
        Self::with_progress(gateway, Arc::new(NoopProgress))
    }

    pub fn with_progress(
        gateway: Arc<dyn IngestGatewayPort>,
        progress: Arc<dyn ProgressPort>,
    ) -> Self {
        Self {
            gateway,
            progress,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn execute(
        &self,
        ingest_id: &IngestId,
        selector: EnvironmentSelector,
    ) -> Result<IngestRecord, LookupError> {
        let span = info_span!(
            "usecase.lookup_ingest.execute",
            ingest_id = %ingest_id,
            selector = %selector,
        );

        let lookup = self.join_or_start(ingest_id.clone(), selector);

        async move {
            let result = lookup.await;
            match &result {
                Ok(record) => info!(environment = %record.environment, "Ingest found"),
                Err(err) => warn!(kind = ?err.kind(), error = %err, "Ingest lookup failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    fn join_or_start(&self, ingest_id: IngestId, selector: EnvironmentSelector) -> SharedLookup {
        let key = (ingest_id.clone(), selector);
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(pending) = in_flight.get(&key).and_then(WeakShared::upgrade) {
            debug!("Joining in-flight lookup");
            return pending;
        }

        let gateway = Arc::clone(&self.gateway);
        let progress = Arc::clone(&self.progress);
        let registry = Arc::clone(&self.in_flight);
        let registry_key = key.clone();

        let lookup = async move {
            let _progress = ProgressGuard::start(progress, &ingest_id);
            let result = gateway.fetch(&ingest_id, selector).await;
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&registry_key);
            result
        }
        .boxed()
        .shared();

        // Lookups abandoned by every caller never reach their own removal.
        in_flight.retain(|_, pending| pending.upgrade().is_some());
        if let Some(weak) = lookup.downgrade() {
            in_flight.insert(key, weak);
        }
        lookup
    }
}

/// Calls `done` when dropped, so a cancelled request still clears the
/// indicator.
struct ProgressGuard {
    progress: Arc<dyn ProgressPort>,
    ingest_id: IngestId,
}

impl ProgressGuard {
    fn start(progress: Arc<dyn ProgressPort>, ingest_id: &IngestId) -> Self {
        progress.start(ingest_id);
        Self {
            progress,
            ingest_id: ingest_id.clone(),
        }
    }
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        self.progress.done(&self.ingest_id);
    }
}

//! Shared fakes for the use case tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use ii_core::ports::{ClockPort, FixedLocale, IngestGatewayPort, KeyValueStorePort, ProgressPort};
use ii_core::{
    EnvironmentSelector, IngestId, IngestRecord, IngestViewComposer, LookupError, TimeFormatter,
};
use serde_json::json;
use tokio::sync::Mutex;

pub fn ingest(id: &str) -> IngestRecord {
    serde_json::from_value(json!({
        "id": id,
        "space": {"id": "digitised"},
        "bag": {"info": {"externalIdentifier": format!("b-{id}"), "version": "v1"}},
        "status": {"id": "succeeded"},
        "createdDate": "2026-10-14T09:00:00Z",
        "lastUpdatedDate": "2026-10-14T11:59:30Z",
        "environment": "production",
        "events": [
            {"createdDate": "2026-10-14T09:05:00Z", "description": "Unpacking started"},
            {"createdDate": "2026-10-14T09:06:00Z", "description": "Unpacking succeeded"}
        ]
    }))
    .unwrap()
}

pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()
}

pub fn composer() -> IngestViewComposer {
    IngestViewComposer::new(TimeFormatter::new(
        Arc::new(FixedClock(noon())),
        Arc::new(FixedLocale::utc("en-US")),
    ))
}

/// Answers every fetch after `delay`, from the records it was given.
pub struct SlowGateway {
    records: HashMap<String, IngestRecord>,
    delay: Duration,
    pub calls: AtomicUsize,
}

impl SlowGateway {
    pub fn new(records: Vec<IngestRecord>, delay: Duration) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.id.as_str().to_string(), record))
                .collect(),
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IngestGatewayPort for SlowGateway {
    async fn fetch(
        &self,
        ingest_id: &IngestId,
        _selector: EnvironmentSelector,
    ) -> Result<IngestRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.records
            .get(ingest_id.as_str())
            .cloned()
            .ok_or_else(|| LookupError::IngestNotFound {
                ingest_id: ingest_id.clone(),
            })
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub async fn put_raw(&self, key: &str, value: &str) {
        self.slots
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.slots.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStorePort for InMemoryStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.slots
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Records start/done in call order.
#[derive(Default)]
pub struct RecordingProgress {
    pub events: std::sync::Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressPort for RecordingProgress {
    fn start(&self, ingest_id: &IngestId) {
        self.events.lock().unwrap().push(format!("start:{ingest_id}"));
    }

    fn done(&self, ingest_id: &IngestId) {
        self.events.lock().unwrap().push(format!("done:{ingest_id}"));
    }
}

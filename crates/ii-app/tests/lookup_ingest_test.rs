//! Tests for [`LookupIngest`]: sharing of concurrent lookups and progress.

mod support;

use std::sync::Arc;
use std::time::Duration;

use ii_app::LookupIngest;
use ii_core::{Environment, EnvironmentSelector, IngestId};
use support::{ingest, RecordingProgress, SlowGateway};

#[tokio::test]
async fn concurrent_identical_lookups_share_one_request() {
    let gateway = Arc::new(SlowGateway::new(vec![ingest("a")], Duration::from_millis(50)));
    let usecase = LookupIngest::new(gateway.clone());
    let id = IngestId::from_str("a");

    let (first, second) = tokio::join!(
        usecase.execute(&id, EnvironmentSelector::Auto),
        usecase.execute(&id, EnvironmentSelector::Auto),
    );

    assert_eq!(gateway.calls(), 1);
    assert_eq!(first.unwrap(), second.unwrap());
}

#[tokio::test]
async fn different_selectors_are_separate_requests() {
    let gateway = Arc::new(SlowGateway::new(vec![ingest("a")], Duration::from_millis(20)));
    let usecase = LookupIngest::new(gateway.clone());
    let id = IngestId::from_str("a");

    let (auto, staging) = tokio::join!(
        usecase.execute(&id, EnvironmentSelector::Auto),
        usecase.execute(&id, EnvironmentSelector::Only(Environment::Staging)),
    );

    assert!(auto.is_ok() && staging.is_ok());
    assert_eq!(gateway.calls(), 2);
}

#[tokio::test]
async fn sequential_lookups_are_not_cached() {
    let gateway = Arc::new(SlowGateway::new(vec![ingest("a")], Duration::from_millis(1)));
    let usecase = LookupIngest::new(gateway.clone());
    let id = IngestId::from_str("a");

    usecase.execute(&id, EnvironmentSelector::Auto).await.unwrap();
    usecase.execute(&id, EnvironmentSelector::Auto).await.unwrap();

    assert_eq!(gateway.calls(), 2);
}

#[tokio::test]
async fn shared_failures_reach_every_caller() {
    let gateway = Arc::new(SlowGateway::new(vec![], Duration::from_millis(20)));
    let usecase = LookupIngest::new(gateway.clone());
    let id = IngestId::from_str("missing");

    let (first, second) = tokio::join!(
        usecase.execute(&id, EnvironmentSelector::Auto),
        usecase.execute(&id, EnvironmentSelector::Auto),
    );

    assert!(first.unwrap_err().is_not_found());
    assert!(second.unwrap_err().is_not_found());
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test]
async fn progress_brackets_each_outstanding_request() {
    let gateway = Arc::new(SlowGateway::new(
        vec![ingest("a"), ingest("b")],
        Duration::from_millis(10),
    ));
    let progress = Arc::new(RecordingProgress::default());
    let usecase = LookupIngest::with_progress(gateway, progress.clone());

    let a = IngestId::from_str("a");
    let b = IngestId::from_str("b");
    usecase.execute(&a, EnvironmentSelector::Auto).await.unwrap();
    let (_, _) = tokio::join!(
        usecase.execute(&b, EnvironmentSelector::Auto),
        usecase.execute(&b, EnvironmentSelector::Auto),
    );

    assert_eq!(
        progress.events(),
        vec!["start:a", "done:a", "start:b", "done:b"]
    );
}

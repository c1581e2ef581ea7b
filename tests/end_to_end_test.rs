//! Full wiring against a mock ingest API and a temporary data dir.

use ii_app::{AppPaths, IngestInspection};
use ii_core::errors::LookupErrorKind;
use ii_core::ports::AppDirs;
use ii_core::{AppConfig, EnvironmentSelector, IngestId};
use ingest_inspector::bootstrap::wire_dependencies;
use ingest_inspector::render::{render_inspection, render_recent};
use mockito::{Server, ServerGuard};
use serde_json::json;
use tempfile::TempDir;

const INGEST_ID: &str = "5f0c2a1e-1111-4000-8000-00000000cafe";

fn config_for(server: &ServerGuard, data_dir: &TempDir) -> AppConfig {
    AppConfig {
        staging_url: format!("{}/staging/ingests", server.url()),
        production_url: format!("{}/production/ingests", server.url()),
        request_timeout_secs: 5,
        locale: "en-US".to_string(),
        data_dir: data_dir.path().to_path_buf(),
    }
}

fn paths_for(config: &AppConfig) -> AppPaths {
    AppPaths::from_app_dirs(&AppDirs {
        app_data_root: config.data_dir.clone(),
    })
}

fn ingest_body() -> serde_json::Value {
    json!({
        "id": INGEST_ID,
        "space": {"id": "digitised"},
        "bag": {"info": {"externalIdentifier": "b99887766", "version": "v3"}},
        "status": {"id": "succeeded"},
        "createdDate": "2026-10-14T09:00:00Z",
        "lastUpdatedDate": "2026-10-14T09:30:00Z",
        "events": [
            {"description": "Unpacking started", "createdDate": "2026-10-14T09:01:00Z"},
            {"description": "Verification failed", "createdDate": "2026-10-14T09:05:00Z"}
        ]
    })
}

#[tokio::test]
async fn lookup_renders_and_is_remembered() {
    let mut server = Server::new_async().await;
    let _production = server
        .mock("GET", format!("/production/ingests/{INGEST_ID}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ingest_body().to_string())
        .create_async()
        .await;
    let data_dir = TempDir::new().unwrap();
    let config = config_for(&server, &data_dir);
    let deps = wire_dependencies(&config, &paths_for(&config), None).unwrap();

    let inspection = deps
        .inspect
        .execute(&IngestId::from_str(INGEST_ID), EnvironmentSelector::Auto)
        .await;

    let IngestInspection::Found(view) = &inspection else {
        panic!("expected a found ingest, got {inspection:?}");
    };
    assert_eq!(view.bag_path, "digitised/b99887766/v3");
    let rendered = render_inspection(&inspection);
    assert!(rendered.starts_with("Found ingest in the production API:\n"));
    assert!(rendered.contains(&format!("{INGEST_ID}: succeeded")));
    assert!(rendered.contains("    ! Verification failed"));

    let recent = deps.recent.list().await.unwrap();
    assert_eq!(recent.len(), 1);
    assert!(render_recent(&recent).contains("digitised/b99887766"));
}

#[tokio::test]
async fn missing_ingest_is_a_failure_and_not_remembered() {
    let mut server = Server::new_async().await;
    for env in ["production", "staging"] {
        server
            .mock("GET", format!("/{env}/ingests/{INGEST_ID}").as_str())
            .with_status(404)
            .with_body(json!({"message": "Ingest not found."}).to_string())
            .create_async()
            .await;
    }
    let data_dir = TempDir::new().unwrap();
    let config = config_for(&server, &data_dir);
    let deps = wire_dependencies(&config, &paths_for(&config), None).unwrap();

    let inspection = deps
        .inspect
        .execute(&IngestId::from_str(INGEST_ID), EnvironmentSelector::Auto)
        .await;

    let IngestInspection::Failed(failure) = &inspection else {
        panic!("expected a failure, got {inspection:?}");
    };
    assert_eq!(failure.kind, LookupErrorKind::IngestNotFound);
    assert!(render_inspection(&inspection).contains("Check the ingests API logs"));
    assert!(deps.recent.list().await.unwrap().is_empty());
}

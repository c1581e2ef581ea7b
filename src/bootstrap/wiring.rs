//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - ✅ Create infra implementations (HTTP gateway, file store, clock, locale)
//! - ✅ Inject them into the use cases through their ports
//!
//! ## Prohibited
//!
//! ❌ **No business logic**
//! ❌ **No configuration validation** (config.rs already loaded it)
//!
//! > This is the only place allowed to depend on ii-infra and ii-app at
//! > the same time, and only for assembly.

use std::sync::Arc;
use std::time::Duration;

use ii_app::{AppPaths, InspectIngest, LookupIngest, RecentIngestStore};
use ii_core::config::AppConfig;
use ii_core::ports::{
    ClockPort, IngestGatewayPort, IngestLookupObserver, KeyValueStorePort, LocalePort,
    ProgressPort,
};
use ii_core::{IngestViewComposer, TimeFormatter};
use ii_infra::{
    FileKeyValueStore, HttpIngestGateway, IngestApiEndpoints, SystemClock, SystemLocale,
    TracingProgress,
};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Ingest API configuration invalid: {0}")]
    ApiConfig(String),

    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Everything the commands need.
pub struct InspectorDeps {
    pub inspect: InspectIngest,
    pub recent: Arc<RecentIngestStore>,
}

/// Builds the use cases from the loaded config.
///
/// `locale_override` (from the command line) wins over `config.locale`.
///
/// # Errors
///
/// Returns [`WiringError`] when the API endpoints do not parse or the HTTP
/// client cannot be built.
pub fn wire_dependencies(
    config: &AppConfig,
    paths: &AppPaths,
    locale_override: Option<&str>,
) -> WiringResult<InspectorDeps> {
    // Step 1: Infra adapters
    let endpoints = IngestApiEndpoints::from_config(&config.staging_url, &config.production_url)
        .map_err(|e| WiringError::ApiConfig(format!("{e:#}")))?;
    let request_timeout = match config.request_timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let gateway: Arc<dyn IngestGatewayPort> = Arc::new(
        HttpIngestGateway::new(endpoints, request_timeout)
            .map_err(|e| WiringError::HttpClientInit(format!("{e:#}")))?,
    );
    let store: Arc<dyn KeyValueStorePort> = Arc::new(FileKeyValueStore::new(&paths.store_dir));
    let progress: Arc<dyn ProgressPort> = Arc::new(TracingProgress);
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let locale_tag = locale_override.or(Some(config.locale.as_str()));
    let locale: Arc<dyn LocalePort> = Arc::new(SystemLocale::detect(locale_tag));

    // Step 2: Use cases
    let recent = Arc::new(RecentIngestStore::new(store));
    let observers: Vec<Arc<dyn IngestLookupObserver>> = vec![recent.clone()];
    let lookup = Arc::new(LookupIngest::with_progress(gateway, progress));
    let composer = IngestViewComposer::new(TimeFormatter::new(clock, locale));

    Ok(InspectorDeps {
        inspect: InspectIngest::new(lookup, observers, composer),
        recent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ii_core::ports::AppDirs;
    use std::path::PathBuf;

    fn paths() -> AppPaths {
        AppPaths::from_app_dirs(&AppDirs {
            app_data_root: PathBuf::from("/tmp/ingest-inspector-wiring"),
        })
    }

    #[test]
    fn empty_config_wires_with_public_endpoints() {
        assert!(wire_dependencies(&AppConfig::empty(), &paths(), None).is_ok());
    }

    #[test]
    fn invalid_endpoint_is_a_wiring_error() {
        let config = AppConfig {
            production_url: "::not a url::".to_string(),
            ..AppConfig::empty()
        };

        let result = wire_dependencies(&config, &paths(), None);

        assert!(matches!(result, Err(WiringError::ApiConfig(_))));
    }
}

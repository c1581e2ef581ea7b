use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Ingests endpoint of the staging API (may be empty)
    pub staging_url: String,

    /// Ingests endpoint of the production API (may be empty)
    pub production_url: String,

    /// Request timeout in seconds, 0 for none
    pub request_timeout_secs: u64,

    /// Locale tag overriding the system locale (may be empty)
    pub locale: String,

    /// Application data directory (empty means platform default)
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Missing sections and keys map to empty values. Empty strings are
    /// valid facts here, not errors.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let get_str = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            staging_url: get_str("api", "staging_url"),
            production_url: get_str("api", "production_url"),
            request_timeout_secs: toml_value
                .get("api")
                .and_then(|a| a.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|secs| secs.max(0) as u64)
                .unwrap_or(0),
            locale: get_str("display", "locale"),
            data_dir: PathBuf::from(get_str("storage", "data_dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            staging_url: String::new(),
            production_url: String::new(),
            request_timeout_secs: 0,
            locale: String::new(),
            data_dir: PathBuf::new(),
        }
    }

    /// Config rooted at the platform data directory computed by the caller.
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Self::empty()
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deployment environment an ingest lives in.
///
/// Anything other than `production` on the wire is treated as staging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        Environment::from(value.as_str())
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        if value == "production" {
            Environment::Production
        } else {
            Environment::Staging
        }
    }
}

impl From<Environment> for String {
    fn from(env: Environment) -> Self {
        env.as_str().to_string()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which environment a lookup should target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnvironmentSelector {
    /// Try production first, then staging.
    #[default]
    Auto,
    Only(Environment),
}

impl EnvironmentSelector {
    /// Environments to query, in order.
    pub fn candidates(&self) -> Vec<Environment> {
        match self {
            EnvironmentSelector::Auto => vec![Environment::Production, Environment::Staging],
            EnvironmentSelector::Only(env) => vec![*env],
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown environment '{0}', expected one of: auto, staging, production")]
pub struct UnknownEnvironment(pub String);

impl FromStr for EnvironmentSelector {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(EnvironmentSelector::Auto),
            "staging" | "stage" => Ok(EnvironmentSelector::Only(Environment::Staging)),
            "production" | "prod" => Ok(EnvironmentSelector::Only(Environment::Production)),
            _ => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for EnvironmentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentSelector::Auto => f.write_str("auto"),
            EnvironmentSelector::Only(env) => env.fmt(f),
        }
    }
}

/// Bucket pair a stored bag is replicated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageBuckets {
    pub environment: Environment,
    pub primary: &'static str,
    pub glacier: &'static str,
}

static ENVIRONMENT_BUCKETS: [StorageBuckets; 2] = [
    StorageBuckets {
        environment: Environment::Staging,
        primary: "wellcomecollection-storage-staging",
        glacier: "wellcomecollection-storage-staging-replica-ireland",
    },
    StorageBuckets {
        environment: Environment::Production,
        primary: "wellcomecollection-storage",
        glacier: "wellcomecollection-storage-replica-ireland",
    },
];

impl StorageBuckets {
    pub fn for_environment(environment: Environment) -> &'static StorageBuckets {
        ENVIRONMENT_BUCKETS
            .iter()
            .find(|row| row.environment == environment)
            .unwrap_or(&ENVIRONMENT_BUCKETS[0])
    }
}

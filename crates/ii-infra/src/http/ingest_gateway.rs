use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info_span, Instrument};
use url::Url;

use ii_core::ports::IngestGatewayPort;
use ii_core::{Environment, EnvironmentSelector, IngestId, IngestRecord, LookupError};

pub const DEFAULT_STAGING_URL: &str = "https://api-stage.wellcomecollection.org/storage/v1/ingests";
pub const DEFAULT_PRODUCTION_URL: &str = "https://api.wellcomecollection.org/storage/v1/ingests";

/// Ingests endpoint of each environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestApiEndpoints {
    pub staging: Url,
    pub production: Url,
}

impl IngestApiEndpoints {
    /// Empty values fall back to the public Wellcome endpoints.
    pub fn from_config(staging: &str, production: &str) -> anyhow::Result<Self> {
        Ok(Self {
            staging: parse_base(staging, DEFAULT_STAGING_URL)?,
            production: parse_base(production, DEFAULT_PRODUCTION_URL)?,
        })
    }

    pub fn base_for(&self, environment: Environment) -> &Url {
        match environment {
            Environment::Staging => &self.staging,
            Environment::Production => &self.production,
        }
    }
}

fn parse_base(value: &str, default: &str) -> anyhow::Result<Url> {
    let raw = match value.trim() {
        "" => default,
        configured => configured,
    };
    Url::parse(raw).with_context(|| format!("invalid ingest API url: {raw}"))
}

/// Error body of a non-200 response.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// [`IngestGatewayPort`] over HTTP.
///
/// One `GET <base>/<id>` per queried environment, no retries. In auto mode
/// production is asked first and staging only when production has no such
/// ingest.
pub struct HttpIngestGateway {
    client: Client,
    endpoints: IngestApiEndpoints,
}

impl HttpIngestGateway {
    /// `request_timeout` of `None` leaves requests unbounded.
    pub fn new(
        endpoints: IngestApiEndpoints,
        request_timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { client, endpoints })
    }

    fn ingest_url(
        &self,
        environment: Environment,
        ingest_id: &IngestId,
    ) -> Result<Url, LookupError> {
        let base = self.endpoints.base_for(environment);
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                LookupError::unknown(ingest_id.clone(), format!("{base} cannot be a base URL"))
            })?
            .pop_if_empty()
            .push(ingest_id.as_str());
        Ok(url)
    }

    async fn fetch_from(
        &self,
        ingest_id: &IngestId,
        environment: Environment,
    ) -> Result<IngestRecord, LookupError> {
        let url = self.ingest_url(environment, ingest_id)?;
        debug!(%url, "Requesting ingest");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| LookupError::unknown(ingest_id.clone(), transport_detail(&err)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| LookupError::unknown(ingest_id.clone(), transport_detail(&err)))?;

        if status == StatusCode::OK {
            return parse_record(ingest_id, environment, &body);
        }

        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|error| error.message);
        debug!(status = status.as_u16(), message = ?message, "Ingest API returned an error");
        Err(LookupError::from_api_response(
            ingest_id.clone(),
            status.as_u16(),
            message.as_deref(),
        ))
    }
}

#[async_trait]
impl IngestGatewayPort for HttpIngestGateway {
    async fn fetch(
        &self,
        ingest_id: &IngestId,
        selector: EnvironmentSelector,
    ) -> Result<IngestRecord, LookupError> {
        let mut not_found = None;

        for environment in selector.candidates() {
            let span = info_span!("infra.http.fetch_ingest", environment = %environment);
            match self.fetch_from(ingest_id, environment).instrument(span).await {
                Ok(record) => return Ok(record),
                Err(err) if err.is_not_found() => {
                    debug!(environment = %environment, "Ingest not found in environment");
                    not_found = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(not_found.unwrap_or_else(|| LookupError::IngestNotFound {
            ingest_id: ingest_id.clone(),
        }))
    }
}

fn transport_detail(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        format!("request failed: {err}")
    }
}

fn parse_record(
    ingest_id: &IngestId,
    queried: Environment,
    body: &str,
) -> Result<IngestRecord, LookupError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| LookupError::unknown(ingest_id.clone(), format!("invalid JSON body: {err}")))?;
    serde_json::from_value(normalize(value, queried)).map_err(|err| {
        LookupError::unknown(ingest_id.clone(), format!("unexpected ingest shape: {err}"))
    })
}

/// Flattens `{"ingest": {..}, "environment": ".."}` into the record and tags
/// records without an environment with the one that was queried.
fn normalize(value: Value, queried: Environment) -> Value {
    let Value::Object(mut outer) = value else {
        return value;
    };

    let mut record: Map<String, Value> = match outer.remove("ingest") {
        Some(Value::Object(mut inner)) => {
            if let Some(environment) = outer.remove("environment") {
                inner.entry("environment").or_insert(environment);
            }
            inner
        }
        Some(other) => {
            outer.insert("ingest".to_string(), other);
            outer
        }
        None => outer,
    };

    if !matches!(record.get("environment"), Some(Value::String(_))) {
        record.insert(
            "environment".to_string(),
            Value::String(queried.as_str().to_string()),
        );
    }
    Value::Object(record)
}

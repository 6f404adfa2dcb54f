// Google Fit REST client: one `dataset:aggregate` call per data type, bearer-authenticated.

mod data_type;

pub use data_type::DataType;

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::config::GoogleFitConfig;
use crate::models::AggregateResponse;
use crate::version;

/// Longest upstream body kept in an error message.
const ERROR_BODY_SNIPPET: usize = 256;

#[derive(Debug, Error)]
pub enum FitError {
    /// Non-2xx from Google Fit; `message` is Google's `error.message` when present.
    #[error("Google Fit returned {status}: {message}")]
    Upstream { status: u16, message: String },
    /// Transport failure or an undecodable response body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl FitError {
    /// Upstream HTTP status, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            FitError::Upstream { status, .. } => Some(*status),
            FitError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Human-readable detail for API error bodies.
    pub fn details(&self) -> String {
        match self {
            FitError::Upstream { message, .. } => message.clone(),
            FitError::Http(e) => e.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoogleFitClient {
    base_url: String,
    user_id: String,
    client: reqwest::Client,
}

impl GoogleFitClient {
    pub fn new(config: &GoogleFitConfig) -> Result<Self, FitError> {
        let client = reqwest::Client::builder()
            .user_agent(version::user_agent())
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_id: config.user_id.clone(),
            client,
        })
    }

    fn aggregate_url(&self) -> String {
        format!(
            "{}/fitness/v1/users/{}/dataset:aggregate",
            self.base_url, self.user_id
        )
    }

    /// Aggregates one data type over `[start_millis, end_millis]`.
    pub async fn aggregate(
        &self,
        token: &SecretString,
        data_type: DataType,
        start_millis: i64,
        end_millis: i64,
    ) -> Result<AggregateResponse, FitError> {
        let body = json!({
            "aggregateBy": [{ "dataTypeName": data_type.name() }],
            "startTimeMillis": start_millis.to_string(),
            "endTimeMillis": end_millis.to_string(),
        });
        let resp = self
            .client
            .post(self.aggregate_url())
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        debug!(data_type = %data_type, status = status.as_u16(), "Google Fit aggregate response");
        if !status.is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(resp.json::<AggregateResponse>().await?)
    }
}

async fn error_from_response(resp: reqwest::Response) -> FitError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    FitError::Upstream {
        status,
        message: upstream_message(&body),
    }
}

/// Google wraps failures as `{"error": {"code": .., "message": ".."}}`; fall back to the raw body.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.chars().take(ERROR_BODY_SNIPPET).collect())
}

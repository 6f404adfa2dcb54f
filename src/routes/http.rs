// GET handlers: liveness, version, Google Fit summary

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use secrecy::SecretString;
use tracing::{error, info};

use super::{ApiError, AppState};
use crate::fetcher;
use crate::models::MetricSummary;
use crate::version::{NAME, VERSION};

/// GET / — liveness.
pub(super) async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "API is running" }))
}

/// GET /health — liveness.
pub(super) async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

pub(super) async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}

/// GET /googlefit/data — summary of the caller's last day (weight: last week) of Google Fit data.
pub(super) async fn googlefit_data_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MetricSummary>, ApiError> {
    let Some(token) = bearer_token(&headers) else {
        error!("No access token provided");
        return Err(ApiError::MissingToken);
    };

    info!("Fetching Google Fit data");
    let summary = fetcher::fetch_summary(
        &state.fit_client,
        &token,
        &state.config.aggregation,
        fetcher::now_millis(),
    )
    .await?;
    info!(steps = summary.steps, "Fetched Google Fit data");
    Ok(Json(summary))
}

/// Second space-separated word of the Authorization header, e.g. `Bearer <token>`.
/// Only the token word has to be UTF-8; the rest of the header is not inspected.
fn bearer_token(headers: &HeaderMap) -> Option<SecretString> {
    let word = headers
        .get(header::AUTHORIZATION)?
        .as_bytes()
        .split(|b| *b == b' ')
        .nth(1)?;
    let token = std::str::from_utf8(word).ok()?;
    (!token.is_empty()).then(|| SecretString::new(token.into()))
}

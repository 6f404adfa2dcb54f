// API error -> status code + `{error, details}` JSON body

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::google_fit::FitError;

#[derive(Debug)]
pub enum ApiError {
    /// No bearer token on the request; rejected before any upstream call.
    MissingToken,
    /// Any failure from the Google Fit fan-out.
    Upstream(FitError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl From<FitError> for ApiError {
    fn from(e: FitError) -> Self {
        ApiError::Upstream(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    error: "No access token provided",
                    details: None,
                },
            ),
            ApiError::Upstream(e) => {
                error!(error = %e, "Error in Google Fit handler");
                let details = Some(e.details());
                match e.status() {
                    Some(401) => (
                        StatusCode::UNAUTHORIZED,
                        ErrorBody {
                            error: "Unauthorized access to Google Fit API",
                            details,
                        },
                    ),
                    Some(403) => (
                        StatusCode::FORBIDDEN,
                        ErrorBody {
                            error: "Access forbidden to Google Fit API",
                            details,
                        },
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorBody {
                            error: "Failed to fetch Google Fit data",
                            details,
                        },
                    ),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

// HTTP routes: Google Fit summary endpoint, liveness probes, CORS

mod error;
mod http;

pub use error::ApiError;

use axum::http::{HeaderValue, Method, header};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::{AppConfig, CorsConfig};
use crate::google_fit::GoogleFitClient;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) fit_client: Arc<GoogleFitClient>,
    pub(crate) config: AppConfig,
}

pub fn app(fit_client: Arc<GoogleFitClient>, config: AppConfig) -> Router {
    let cors = cors_layer(&config.cors);
    let state = AppState { fit_client, config };
    Router::new()
        .route("/", get(http::root_handler)) // GET /
        .route("/health", get(http::health_handler)) // GET /health
        .route("/version", get(http::version_handler)) // GET /version
        .route("/googlefit/data", get(http::googlefit_data_handler)) // GET /googlefit/data
        .route("/api/googlefit/data", get(http::googlefit_data_handler)) // GET /api/googlefit/data
        .fallback(http::not_found_handler)
        .layer(cors)
        .with_state(state)
}

/// Credentials are allowed, so origins, methods and headers must be listed explicitly.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

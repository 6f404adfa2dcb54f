use axum::http::HeaderValue;
use serde::Deserialize;

use crate::aggregator::SleepQualityWeighting;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub google_fit: GoogleFitConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Browser origins allowed to call the API with credentials.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".into()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleFitConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

impl Default for GoogleFitConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: default_user_id(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.googleapis.com".into()
}

fn default_user_id() -> String {
    "me".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AggregationConfig {
    /// Window for steps, heart rate, calories, distance, active minutes and sleep.
    #[serde(default = "default_daily_window_hours")]
    pub daily_window_hours: u32,
    /// Window for weight (most recent sample within it wins).
    #[serde(default = "default_weight_window_days")]
    pub weight_window_days: u32,
    #[serde(default)]
    pub sleep_quality_weighting: SleepQualityWeighting,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            daily_window_hours: default_daily_window_hours(),
            weight_window_days: default_weight_window_days(),
            sleep_quality_weighting: SleepQualityWeighting::default(),
        }
    }
}

fn default_daily_window_hours() -> u32 {
    24
}

fn default_weight_window_days() -> u32 {
    7
}

impl AppConfig {
    /// Reads `CONFIG_FILE` (default `config.toml`); `PORT` overrides `server.port` when set.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        let mut config = Self::load_from_str(&s)?;
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?;
            config.validate()?;
        }
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        for origin in &self.cors.allowed_origins {
            anyhow::ensure!(
                !origin.is_empty() && HeaderValue::from_str(origin).is_ok(),
                "cors.allowed_origins contains an invalid origin: {:?}",
                origin
            );
            anyhow::ensure!(
                origin != "*",
                "cors.allowed_origins cannot contain \"*\" when credentials are enabled"
            );
        }
        anyhow::ensure!(
            self.google_fit.base_url.starts_with("http://")
                || self.google_fit.base_url.starts_with("https://"),
            "google_fit.base_url must start with http:// or https://, got {}",
            self.google_fit.base_url
        );
        anyhow::ensure!(
            !self.google_fit.user_id.is_empty(),
            "google_fit.user_id must be non-empty"
        );
        anyhow::ensure!(
            self.aggregation.daily_window_hours > 0,
            "aggregation.daily_window_hours must be > 0, got {}",
            self.aggregation.daily_window_hours
        );
        anyhow::ensure!(
            self.aggregation.weight_window_days > 0,
            "aggregation.weight_window_days must be > 0, got {}",
            self.aggregation.weight_window_days
        );
        Ok(())
    }
}

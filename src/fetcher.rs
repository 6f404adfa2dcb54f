// Fan-out/fan-in: seven concurrent aggregate calls, first failure wins, then reduce.

use secrecy::SecretString;
use tracing::{debug, warn};

use crate::aggregator::{self, RawDatasets};
use crate::config::AggregationConfig;
use crate::google_fit::{DataType, FitError, GoogleFitClient};
use crate::models::MetricSummary;

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Fetches every data type for the window ending at `now_millis` and summarizes them.
/// Any failed call fails the whole summary; no partial results are returned.
pub async fn fetch_summary(
    client: &GoogleFitClient,
    token: &SecretString,
    config: &AggregationConfig,
    now_millis: i64,
) -> Result<MetricSummary, FitError> {
    let fetch = move |data_type: DataType| {
        let window_ms = i64::try_from(data_type.window(config).as_millis()).unwrap_or(i64::MAX);
        let start_millis = now_millis.saturating_sub(window_ms);
        async move {
            client
                .aggregate(token, data_type, start_millis, now_millis)
                .await
                .inspect_err(|e| {
                    warn!(data_type = %data_type, error = %e, "aggregate request failed");
                })
        }
    };

    let (steps, heart_rate, weight, calories, distance, active_minutes, sleep) = tokio::try_join!(
        fetch(DataType::Steps),
        fetch(DataType::HeartRate),
        fetch(DataType::Weight),
        fetch(DataType::Calories),
        fetch(DataType::Distance),
        fetch(DataType::ActiveMinutes),
        fetch(DataType::Sleep),
    )?;

    let raw = RawDatasets {
        steps,
        heart_rate,
        weight,
        calories,
        distance,
        active_minutes,
        sleep,
    };
    let summary = aggregator::summarize(&raw, config.sleep_quality_weighting);
    debug!(?summary, "summarized Google Fit data");
    Ok(summary)
}

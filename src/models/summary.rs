// Per-request metric summary returned by GET /googlefit/data

use serde::{Deserialize, Serialize};

/// One entry per health dimension. `weight` and `sleep` serialize as null when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummary {
    pub steps: i64,
    pub heart_rate: HeartRateSummary,
    /// Most recent weight in kg, one decimal.
    pub weight: Option<f64>,
    pub calories: f64,
    /// Kilometres, one decimal.
    pub distance: f64,
    pub active_minutes: i64,
    pub sleep: Option<SleepSummary>,
}

/// Heart rate in bpm; zeroed when no samples are available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartRateSummary {
    pub average: i64,
    pub resting: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSummary {
    pub duration_seconds: i64,
    pub quality_percent: i64,
}

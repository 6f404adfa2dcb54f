// The seven Google Fit data types the summary is built from.

use std::time::Duration;

use crate::config::AggregationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Steps,
    HeartRate,
    Weight,
    Calories,
    Distance,
    ActiveMinutes,
    Sleep,
}

impl DataType {
    pub const ALL: [DataType; 7] = [
        DataType::Steps,
        DataType::HeartRate,
        DataType::Weight,
        DataType::Calories,
        DataType::Distance,
        DataType::ActiveMinutes,
        DataType::Sleep,
    ];

    /// `dataTypeName` sent in the aggregate request.
    pub fn name(self) -> &'static str {
        match self {
            DataType::Steps => "com.google.step_count.delta",
            DataType::HeartRate => "com.google.heart_rate.bpm",
            DataType::Weight => "com.google.weight",
            DataType::Calories => "com.google.calories.expended",
            DataType::Distance => "com.google.distance.delta",
            DataType::ActiveMinutes => "com.google.active_minutes",
            DataType::Sleep => "com.google.sleep.segment",
        }
    }

    /// Look-back window ending now. Weight uses the weekly window, everything else the daily one.
    pub fn window(self, config: &AggregationConfig) -> Duration {
        match self {
            DataType::Weight => Duration::from_secs(u64::from(config.weight_window_days) * 86_400),
            _ => Duration::from_secs(u64::from(config.daily_window_hours) * 3_600),
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// Health metric reducers: one pure fold per Google Fit data type.
// Missing or malformed input degrades to that metric's "no data" value; nothing here errors.

use serde::Deserialize;

use crate::models::{
    AggregateResponse, DataPoint, HeartRateSummary, MetricSummary, SleepSummary,
};

/// Raw aggregate responses for the seven data types of one request.
#[derive(Debug, Clone, Default)]
pub struct RawDatasets {
    pub steps: AggregateResponse,
    pub heart_rate: AggregateResponse,
    pub weight: AggregateResponse,
    pub calories: AggregateResponse,
    pub distance: AggregateResponse,
    pub active_minutes: AggregateResponse,
    pub sleep: AggregateResponse,
}

/// How each sleep segment's stage score is weighted into the quality percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepQualityWeighting {
    /// Segment duration over the total accumulated so far (including the segment).
    /// Later segments weigh less, so multi-segment nights can exceed 100.
    #[default]
    RunningTotal,
    /// Segment duration over the whole night's duration.
    FinalTotal,
}

/// Runs every reducer on its own response.
pub fn summarize(raw: &RawDatasets, weighting: SleepQualityWeighting) -> MetricSummary {
    MetricSummary {
        steps: steps(&raw.steps),
        heart_rate: heart_rate(&raw.heart_rate),
        weight: weight(&raw.weight),
        calories: calories(&raw.calories),
        distance: distance(&raw.distance),
        active_minutes: active_minutes(&raw.active_minutes),
        sleep: sleep_weighted(&raw.sleep, weighting),
    }
}

/// Point list of the first dataset in the first bucket, or empty if any level is missing.
pub fn points(data: &AggregateResponse) -> &[DataPoint] {
    data.bucket
        .as_deref()
        .and_then(|buckets| buckets.first())
        .and_then(|bucket| bucket.dataset.as_deref())
        .and_then(|datasets| datasets.first())
        .and_then(|dataset| dataset.point.as_deref())
        .unwrap_or_default()
}

pub fn steps(data: &AggregateResponse) -> i64 {
    sum_int(points(data))
}

/// Average and minimum ("resting") of the numeric samples; zeroed when there are none.
pub fn heart_rate(data: &AggregateResponse) -> HeartRateSummary {
    let values: Vec<f64> = points(data).iter().filter_map(DataPoint::first_fp).collect();
    if values.is_empty() {
        return HeartRateSummary::default();
    }
    let average = values.iter().sum::<f64>() / values.len() as f64;
    let resting = values.iter().copied().fold(f64::INFINITY, f64::min);
    HeartRateSummary {
        average: round_half_up(average) as i64,
        resting: round_half_up(resting) as i64,
    }
}

/// Last numeric sample in point order (not the extremum), one decimal.
pub fn weight(data: &AggregateResponse) -> Option<f64> {
    points(data)
        .iter()
        .filter_map(DataPoint::first_fp)
        .last()
        .map(|kg| round_half_up(kg * 10.0) / 10.0)
}

pub fn calories(data: &AggregateResponse) -> f64 {
    sum_fp(points(data))
}

/// Summed metres as kilometres, rounded to the nearest 0.1.
pub fn distance(data: &AggregateResponse) -> f64 {
    let meters = sum_fp(points(data));
    round_half_up(meters / 100.0) / 10.0
}

pub fn active_minutes(data: &AggregateResponse) -> i64 {
    sum_int(points(data))
}

/// Sleep duration and quality with the default running-total weighting.
pub fn sleep(data: &AggregateResponse) -> Option<SleepSummary> {
    sleep_weighted(data, SleepQualityWeighting::RunningTotal)
}

/// Sleep duration and stage-weighted quality; `None` when the total duration is zero.
pub fn sleep_weighted(
    data: &AggregateResponse,
    weighting: SleepQualityWeighting,
) -> Option<SleepSummary> {
    let segments: Vec<(f64, Option<i64>)> = points(data)
        .iter()
        .map(|p| (segment_ms(p), p.first_int()))
        .collect();
    let final_ms: f64 = segments.iter().map(|(ms, _)| ms).sum();

    let mut total_ms = 0.0;
    let mut quality = 0.0;
    for (duration_ms, stage) in segments {
        total_ms += duration_ms;
        let Some(stage) = stage.filter(|s| *s != 0) else {
            continue;
        };
        let denominator = match weighting {
            SleepQualityWeighting::RunningTotal => total_ms,
            SleepQualityWeighting::FinalTotal => final_ms,
        };
        if denominator != 0.0 {
            quality += stage_quality(stage) * (duration_ms / denominator);
        }
    }

    if total_ms == 0.0 {
        return None;
    }
    Some(SleepSummary {
        duration_seconds: round_half_up(total_ms / 1000.0) as i64,
        quality_percent: round_half_up(quality) as i64,
    })
}

/// Sleep stage code -> quality score (1 awake, 2 light, 3 deep, 4 REM).
fn stage_quality(stage: i64) -> f64 {
    match stage {
        1 => 0.0,
        2 => 50.0,
        3 => 100.0,
        4 => 75.0,
        _ => 0.0,
    }
}

/// Segment length in milliseconds; zero when either timestamp is missing.
fn segment_ms(point: &DataPoint) -> f64 {
    match (point.start_time_nanos, point.end_time_nanos) {
        (Some(start), Some(end)) => end.saturating_sub(start) as f64 / 1_000_000.0,
        _ => 0.0,
    }
}

fn sum_int(points: &[DataPoint]) -> i64 {
    points
        .iter()
        .map(|p| p.first_int().unwrap_or(0))
        .fold(0i64, i64::saturating_add)
}

fn sum_fp(points: &[DataPoint]) -> f64 {
    points.iter().map(|p| p.first_fp().unwrap_or(0.0)).sum()
}

/// Rounds half-way cases toward positive infinity (2.5 -> 3, -2.5 -> -2).
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

// Shared test helpers: Google Fit aggregate payloads

#![allow(dead_code)]

use athleteshield::models::AggregateResponse;
use serde_json::{Value, json};

/// `dataset:aggregate` body with a single bucket and dataset holding `points`.
pub fn aggregate_body(points: Vec<Value>) -> Value {
    json!({
        "bucket": [{
            "startTimeMillis": "1700000000000",
            "endTimeMillis": "1700086400000",
            "dataset": [{
                "dataSourceId": "derived:com.google.step_count.delta:com.google.android.gms:aggregated",
                "point": points
            }]
        }]
    })
}

pub fn response(points: Vec<Value>) -> AggregateResponse {
    serde_json::from_value(aggregate_body(points)).unwrap()
}

pub fn int_point(v: i64) -> Value {
    json!({
        "startTimeNanos": "1700000000000000000",
        "endTimeNanos": "1700000060000000000",
        "value": [{ "intVal": v, "mapVal": [] }]
    })
}

pub fn fp_point(v: f64) -> Value {
    json!({
        "startTimeNanos": "1700000000000000000",
        "endTimeNanos": "1700000060000000000",
        "value": [{ "fpVal": v, "mapVal": [] }]
    })
}

/// Sleep segment starting `start_min` minutes into the night, lasting `minutes`.
pub fn sleep_point(start_min: i64, minutes: i64, stage: i64) -> Value {
    let base: i64 = 1_700_000_000_000_000_000;
    let start = base + start_min * 60 * 1_000_000_000;
    let end = start + minutes * 60 * 1_000_000_000;
    json!({
        "startTimeNanos": start.to_string(),
        "endTimeNanos": end.to_string(),
        "value": [{ "intVal": stage, "mapVal": [] }]
    })
}

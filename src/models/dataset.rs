// Google Fit `dataset:aggregate` response shape.
// Every level is optional; a field of the wrong JSON type reads as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw aggregate response for one data type: buckets -> datasets -> points.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregateResponse {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub bucket: Option<Vec<Bucket>>,
}

/// One time bucket. The request window is built so a single bucket comes back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bucket {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub dataset: Option<Vec<Dataset>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub point: Option<Vec<DataPoint>>,
}

/// A single observation. Google sends nanosecond timestamps as decimal strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    #[serde(default, deserialize_with = "lenient_nanos")]
    pub start_time_nanos: Option<i64>,
    #[serde(default, deserialize_with = "lenient_nanos")]
    pub end_time_nanos: Option<i64>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub value: Option<Vec<TypedValue>>,
}

/// One typed value of a point; at most one of the two is normally set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedValue {
    #[serde(default, deserialize_with = "lenient")]
    pub int_val: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub fp_val: Option<f64>,
}

impl DataPoint {
    /// First value's integer field, if present.
    pub fn first_int(&self) -> Option<i64> {
        self.first_value().and_then(|v| v.int_val)
    }

    /// First value's floating-point field, if present.
    pub fn first_fp(&self) -> Option<f64> {
        self.first_value().and_then(|v| v.fp_val)
    }

    fn first_value(&self) -> Option<&TypedValue> {
        self.value.as_deref().and_then(|values| values.first())
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Non-array reads as absent; malformed elements keep their slot as `T::default()`.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .map(|item| T::deserialize(item).unwrap_or_default())
            .collect(),
    ))
}

fn lenient_nanos<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let nanos = match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    };
    Ok(nanos)
}

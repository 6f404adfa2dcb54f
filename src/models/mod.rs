// Domain models: Google Fit aggregate response (input) and metric summary (output)

mod dataset;
mod summary;

pub use dataset::{AggregateResponse, Bucket, DataPoint, Dataset, TypedValue};
pub use summary::{HeartRateSummary, MetricSummary, SleepSummary};

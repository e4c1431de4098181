//! Accuracy aggregation

pub mod metrics;

pub use metrics::{calculate_metrics, Metrics, MetricsError, Results};

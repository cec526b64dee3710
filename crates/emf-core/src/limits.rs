//! Structural limits of the embedded metric format.

use std::fmt;

pub use crate::config::schema::OnExceed;

/// Max keys in one dimension set.
pub const MAX_DIMENSIONS_PER_SET: usize = 9;
/// Max distinct metrics in one event.
pub const MAX_METRICS: usize = 150;
/// Max values recorded for one metric.
pub const MAX_VALUES_PER_METRIC: usize = 100;

/// Limits applied when an event is prepared for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_dimensions_per_set: usize,
    pub max_metrics: usize,
    pub max_values_per_metric: usize,
    pub on_exceed: OnExceed,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_dimensions_per_set: MAX_DIMENSIONS_PER_SET,
            max_metrics: MAX_METRICS,
            max_values_per_metric: MAX_VALUES_PER_METRIC,
            on_exceed: OnExceed::Truncate,
        }
    }
}

/// A single exceeded limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitViolation {
    /// Dimension set at `index` (in insertion order) has too many keys.
    DimensionSet { index: usize, keys: usize, max: usize },
    /// Too many distinct metrics.
    Metrics { count: usize, max: usize },
    /// One metric carries too many values.
    Values { metric: String, count: usize, max: usize },
}

impl fmt::Display for LimitViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitViolation::DimensionSet { index, keys, max } => {
                write!(f, "dimension set {index} has {keys} keys (max {max})")
            }
            LimitViolation::Metrics { count, max } => {
                write!(f, "event has {count} metrics (max {max})")
            }
            LimitViolation::Values { metric, count, max } => {
                write!(f, "metric {metric} has {count} values (max {max})")
            }
        }
    }
}

use serde::Deserialize;

use crate::error::{EmfError, Result};
use crate::limits::{Limits, MAX_DIMENSIONS_PER_SET, MAX_METRICS, MAX_VALUES_PER_METRIC};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmfConfig {
    pub version: u32,

    #[serde(default)]
    pub limits: LimitsSection,
}

impl EmfConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(EmfError::UnsupportedVersion);
        }
        self.limits.validate()
    }
}

/// What to do when a finalized event exceeds a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnExceed {
    /// Keep the leading keys/metrics/values and log a warning.
    #[default]
    Truncate,
    /// Return `LimitExceeded`.
    Reject,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsSection {
    #[serde(default = "default_max_dimensions_per_set")]
    pub max_dimensions_per_set: usize,

    #[serde(default = "default_max_metrics")]
    pub max_metrics: usize,

    #[serde(default = "default_max_values_per_metric")]
    pub max_values_per_metric: usize,

    #[serde(default)]
    pub on_exceed: OnExceed,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_dimensions_per_set: default_max_dimensions_per_set(),
            max_metrics: default_max_metrics(),
            max_values_per_metric: default_max_values_per_metric(),
            on_exceed: OnExceed::default(),
        }
    }
}

impl LimitsSection {
    /// Limits may only tighten the format's own maximums.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_DIMENSIONS_PER_SET).contains(&self.max_dimensions_per_set) {
            return Err(EmfError::InvalidConfig(format!(
                "limits.max_dimensions_per_set must be between 1 and {MAX_DIMENSIONS_PER_SET}"
            )));
        }
        if !(1..=MAX_METRICS).contains(&self.max_metrics) {
            return Err(EmfError::InvalidConfig(format!(
                "limits.max_metrics must be between 1 and {MAX_METRICS}"
            )));
        }
        if !(1..=MAX_VALUES_PER_METRIC).contains(&self.max_values_per_metric) {
            return Err(EmfError::InvalidConfig(format!(
                "limits.max_values_per_metric must be between 1 and {MAX_VALUES_PER_METRIC}"
            )));
        }
        Ok(())
    }

    pub fn to_limits(&self) -> Limits {
        Limits {
            max_dimensions_per_set: self.max_dimensions_per_set,
            max_metrics: self.max_metrics,
            max_values_per_metric: self.max_values_per_metric,
            on_exceed: self.on_exceed,
        }
    }
}

fn default_max_dimensions_per_set() -> usize {
    MAX_DIMENSIONS_PER_SET
}
fn default_max_metrics() -> usize {
    MAX_METRICS
}
fn default_max_values_per_metric() -> usize {
    MAX_VALUES_PER_METRIC
}

//! Finalized event state handed to the serializer.

use std::collections::HashMap;

use crate::dimension::DimensionSet;
use crate::error::{EmfError, Result};
use crate::limits::{LimitViolation, Limits, OnExceed};
use crate::metric::MetricMap;

/// Read-only snapshot of one accumulated event.
#[derive(Debug, Clone)]
pub struct EmfEvent {
    pub(crate) namespace: String,
    pub(crate) dimension_sets: Vec<DimensionSet>,
    pub(crate) metrics: MetricMap,
    pub(crate) properties: HashMap<String, String>,
}

impl EmfEvent {
    pub(crate) fn new(namespace: String) -> Self {
        Self {
            namespace,
            dimension_sets: Vec::new(),
            metrics: MetricMap::default(),
            properties: HashMap::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Dimension sets in the order they were added.
    pub fn dimension_sets(&self) -> &[DimensionSet] {
        &self.dimension_sets
    }

    pub fn metrics(&self) -> &MetricMap {
        &self.metrics
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// List every limit the event currently exceeds. Does not modify the event.
    pub fn check_limits(&self, limits: &Limits) -> Vec<LimitViolation> {
        let mut out = Vec::new();

        for (index, set) in self.dimension_sets.iter().enumerate() {
            if set.len() > limits.max_dimensions_per_set {
                out.push(LimitViolation::DimensionSet {
                    index,
                    keys: set.len(),
                    max: limits.max_dimensions_per_set,
                });
            }
        }

        if self.metrics.len() > limits.max_metrics {
            out.push(LimitViolation::Metrics {
                count: self.metrics.len(),
                max: limits.max_metrics,
            });
        }

        for record in &self.metrics {
            if record.values().len() > limits.max_values_per_metric {
                out.push(LimitViolation::Values {
                    metric: record.key().to_string(),
                    count: record.values().len(),
                    max: limits.max_values_per_metric,
                });
            }
        }

        out
    }

    /// Bring the event within `limits` according to `limits.on_exceed`.
    ///
    /// - `Truncate`: keep the first keys/metrics/values in insertion order and
    ///   return what was cut (each one is logged at `warn`).
    /// - `Reject`: fail with the first violation; the event is left untouched.
    pub fn enforce_limits(&mut self, limits: &Limits) -> Result<Vec<LimitViolation>> {
        let violations = self.check_limits(limits);
        let Some(first) = violations.first() else {
            return Ok(violations);
        };

        match limits.on_exceed {
            OnExceed::Reject => {
                tracing::warn!(
                    namespace = %self.namespace,
                    violations = violations.len(),
                    "event rejected: {first}"
                );
                Err(EmfError::LimitExceeded(first.to_string()))
            }
            OnExceed::Truncate => {
                for v in &violations {
                    tracing::warn!(namespace = %self.namespace, "truncating event: {v}");
                }
                for set in &mut self.dimension_sets {
                    set.truncate(limits.max_dimensions_per_set);
                }
                self.metrics.truncate(limits.max_metrics);
                for record in self.metrics.iter_mut() {
                    record.truncate(limits.max_values_per_metric);
                }
                Ok(violations)
            }
        }
    }
}

//! Per-event metric accumulator.
//!
//! One accumulator collects the dimensions, metrics and properties of a single
//! structured log event. Every mutator is total: odd key/value lists, repeated
//! keys and unit mismatches resolve to a fixed policy instead of an error, so
//! recording metrics never fails the caller's workload.
//!
//! Structural limits (keys per dimension set, metric count, values per metric)
//! are not checked here; see [`EmfEvent::enforce_limits`].
//!
//! Not synchronized. Each unit of work owns its own accumulator.

use std::collections::HashMap;

use crate::dimension::DimensionSet;
use crate::event::EmfEvent;
use crate::metric::{MetricMap, MetricRecord};
use crate::pairs::flat_pairs;
use crate::unit::Unit;

#[derive(Debug, Clone)]
pub struct MetricAccumulator {
    event: EmfEvent,
}

impl MetricAccumulator {
    /// Start an empty event. The namespace is taken as-is.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            event: EmfEvent::new(namespace.into()),
        }
    }

    /// Append one dimension set built from `pairs`.
    ///
    /// Repeated keys within the call overwrite earlier values. Earlier sets are
    /// never touched; each call adds one more dimensional view. An empty call
    /// appends nothing.
    pub fn add_dimension<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let set: DimensionSet = pairs.into_iter().collect();
        if set.is_empty() {
            return;
        }
        self.event.dimension_sets.push(set);
    }

    /// [`add_dimension`](Self::add_dimension) over a flat `key, value, ...`
    /// list. A trailing key without a value gets `""`.
    pub fn add_dimension_flat<S: AsRef<str>>(&mut self, kv: &[S]) {
        self.add_dimension(flat_pairs(kv));
    }

    /// Record `values` under `name`.
    ///
    /// The first call for a name fixes its unit; later calls append their
    /// values and ignore `unit`. An empty `values` still registers the name.
    pub fn add_metric<V>(&mut self, name: &str, unit: Unit, values: V)
    where
        V: IntoIterator<Item = f64>,
    {
        match self.event.metrics.get_mut(name) {
            Some(record) => {
                if *record.unit() != unit {
                    tracing::debug!(
                        metric = %name,
                        kept = %record.unit(),
                        ignored = %unit,
                        "metric unit already set, keeping first"
                    );
                }
                record.extend(values);
            }
            None => {
                let record = MetricRecord::new(name.to_string(), unit, values.into_iter().collect());
                self.event.metrics.push(record);
            }
        }
    }

    /// Set properties from `pairs`; the last write for a key wins.
    pub fn add_properties<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in pairs {
            self.event.properties.insert(k.into(), v.into());
        }
    }

    /// [`add_properties`](Self::add_properties) over a flat `key, value, ...`
    /// list. A trailing key without a value gets `""`.
    pub fn add_properties_flat<S: AsRef<str>>(&mut self, kv: &[S]) {
        self.add_properties(flat_pairs(kv));
    }

    pub fn namespace(&self) -> &str {
        self.event.namespace()
    }

    pub fn dimension_sets(&self) -> &[DimensionSet] {
        self.event.dimension_sets()
    }

    pub fn metrics(&self) -> &MetricMap {
        self.event.metrics()
    }

    pub fn metric(&self, name: &str) -> Option<&MetricRecord> {
        self.event.metrics().get(name)
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        self.event.properties()
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.event.properties().get(key).map(String::as_str)
    }

    /// Hand the collected state over for serialization.
    pub fn finalize(self) -> EmfEvent {
        self.event
    }
}

use std::collections::HashMap;

use crate::unit::Unit;

/// A named, unit-tagged series of observations within one event.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    key: String,
    unit: Unit,
    values: Vec<f64>,
}

impl MetricRecord {
    pub(crate) fn new(key: String, unit: Unit, values: Vec<f64>) -> Self {
        Self { key, unit, values }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Unit recorded by the first `add_metric` call for this key.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn extend(&mut self, values: impl IntoIterator<Item = f64>) {
        self.values.extend(values);
    }

    pub(crate) fn truncate(&mut self, max: usize) {
        self.values.truncate(max);
    }
}

/// Metric records keyed by name, iterated in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct MetricMap {
    records: Vec<MetricRecord>,
    index: HashMap<String, usize>,
}

impl MetricMap {
    pub fn get(&self, key: &str) -> Option<&MetricRecord> {
        self.index.get(key).and_then(|&i| self.records.get(i))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetricRecord> {
        self.records.iter()
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut MetricRecord> {
        match self.index.get(key) {
            Some(&i) => self.records.get_mut(i),
            None => None,
        }
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, MetricRecord> {
        self.records.iter_mut()
    }

    /// Caller checks the key is absent.
    pub(crate) fn push(&mut self, record: MetricRecord) {
        self.index.insert(record.key.clone(), self.records.len());
        self.records.push(record);
    }

    /// Keep the first `max` metrics by insertion order.
    pub(crate) fn truncate(&mut self, max: usize) {
        if self.records.len() <= max {
            return;
        }
        for dropped in self.records.drain(max..) {
            self.index.remove(&dropped.key);
        }
    }
}

impl<'a> IntoIterator for &'a MetricMap {
    type Item = &'a MetricRecord;
    type IntoIter = std::slice::Iter<'a, MetricRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

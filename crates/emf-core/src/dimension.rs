//! Dimension sets.
//!
//! A set is an insertion-ordered vector of `(key, value)` pairs. Truncation
//! keeps the first keys encountered.

/// One dimensional view of the event's metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionSet {
    entries: Vec<(String, String)>,
}

impl DimensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key. Overwriting keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keep only the first `max` keys.
    pub(crate) fn truncate(&mut self, max: usize) {
        self.entries.truncate(max);
    }
}

impl<K, V> FromIterator<(K, V)> for DimensionSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = DimensionSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

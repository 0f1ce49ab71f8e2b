use hashbrown::HashMap;
use tracing::debug;

/// Variables defined by assignments, keyed by name.
///
/// Keys are unique: defining an existing name replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    values: HashMap<String, f64>,
}

impl VariableStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `key`, or update its value in place if it already exists
    pub fn define(&mut self, key: &str, value: f64) {
        if let Some(slot) = self.values.get_mut(key) {
            debug!(key, value, "redefining variable");
            *slot = value;
        } else {
            debug!(key, value, "defining variable");
            self.values.insert(key.to_owned(), value);
        }
    }

    /// Get the value of `key`, if defined
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Get the value of `key`, or `0.0` if it was never defined
    #[must_use]
    pub fn value_or_zero(&self, key: &str) -> f64 {
        self.lookup(key).unwrap_or(0.0)
    }

    /// Check if `key` is defined
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of defined variables
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no variable is defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(key, &value)| (key.as_str(), value))
    }

    /// Forget every variable
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

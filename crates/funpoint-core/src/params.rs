//! Parameter sets exchanged with the gateway

use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;

/// Reserved key under which the checksum token travels.
///
/// The match is exact and case-sensitive when scanning a [`ParameterSet`]
/// for removal or extraction.
pub const CHECK_MAC_VALUE: &str = "CheckMacValue";

/// A flat mapping of parameter name to pre-stringified value.
///
/// Keys are case-sensitive; insertion order is irrelevant - the canonical
/// order is derived at signing time, not preserved here. The transparent
/// serde representation means a form-encoded POST body or a JSON object of
/// strings deserializes straight into a `ParameterSet`.
///
/// # Example
///
/// ```rust
/// use funpoint_core::ParameterSet;
///
/// let mut params = ParameterSet::new();
/// params.insert("MerchantID", "1000031");
/// params.insert("TotalAmount", "100");
///
/// assert_eq!(params.get("MerchantID"), Some("1000031"));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(HashMap<String, String>);

impl ParameterSet {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a parameter, replacing any previous value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a parameter value by exact key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Remove a parameter, returning its value if present
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Whether a key is present (exact, case-sensitive match)
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<HashMap<String, String>> for ParameterSet {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for ParameterSet {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

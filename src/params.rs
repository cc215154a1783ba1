use std::collections::HashMap;

use crate::encode::percent_encode;
use crate::{ParameterError, ParameterResult};

/// A set of OAuth parameters read back in canonical order.
///
/// Values are percent-encoded when they are added, keys are kept verbatim.
/// Keys are unique; the key sequence is sorted by byte value on every read,
/// so insertion order never leaks into a signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedParams {
    params: HashMap<String, String>,
}

impl OrderedParams {
    pub fn new() -> Self {
        Default::default()
    }

    /// Stores the percent-encoded `value` under `key`.
    ///
    /// # Errors
    ///
    /// Fails with [`ParameterError::DuplicateKey`] if `key` is already present.
    /// The set is left untouched in that case.
    pub fn add<K, V>(&mut self, key: K, value: V) -> ParameterResult<()>
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        let key = key.into();
        if self.params.contains_key(&key) {
            return Err(ParameterError::DuplicateKey(key));
        }
        self.params.insert(key, percent_encode(value.as_ref()));
        Ok(())
    }

    /// Returns the stored (already encoded) value of `key`.
    pub fn get(&self, key: &str) -> ParameterResult<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ParameterError::KeyNotFound(key.to_string()))
    }

    /// Returns all keys in ascending byte order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.params.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Returns `(key, encoded value)` pairs in ascending key order.
    pub fn sorted_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

//! Normalization of user-supplied tool-native overrides.
//!
//! Keys arrive in either underscore or hyphen style and are rewritten to
//! the tool's hyphen style. Boolean options use the host config convention
//! of `"True"`/`"False"` sentinel strings; the tool itself expresses a
//! disabled flag as `no-<flag>=1`, so the sentinel folds into the key name
//! and the stored value is always `"1"`.

use serde_json::{Map, Value};

use crate::params::source::scalar_string;

/// Tool-native parameters rendered as standalone command flags instead of
/// being folded into the combined `-x265-params` string.
pub const SEPARATE_PARAMETERS: &[&str] = &["preset", "forced-idr", "tune"];

/// Prefix the tool uses to express a disabled boolean flag.
const NEGATION_PREFIX: &str = "no-";

/// A raw override value, classified once at the ingestion boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverrideValue {
    /// The `"True"`/`"False"` sentinel convention of the host config format.
    Bool(bool),
    /// Any other string, passed to the tool verbatim.
    Raw(String),
}

impl OverrideValue {
    /// Classify a raw string from the user document.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "True" => Self::Bool(true),
            "False" => Self::Bool(false),
            other => Self::Raw(other.to_string()),
        }
    }
}

/// Flip a flag key between its positive and `no-` negated form.
fn invert(key: &str) -> String {
    match key.strip_prefix(NEGATION_PREFIX) {
        Some(positive) => positive.to_string(),
        None => format!("{NEGATION_PREFIX}{key}"),
    }
}

/// Normalized user overrides, kept in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserOverrides {
    entries: Vec<(String, String)>,
}

impl UserOverrides {
    /// The empty set, used when no user document is supplied.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize a raw override map, entry by entry in document order.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut overrides = Self::default();
        for (key, value) in map {
            overrides.push(key, &scalar_string(value));
        }
        overrides
    }

    /// Normalize and store one raw entry.
    pub fn push(&mut self, key: &str, raw: &str) {
        let key = key.replace('_', "-");
        let (key, value) = match OverrideValue::classify(raw) {
            OverrideValue::Bool(true) => (key, "1".to_string()),
            OverrideValue::Bool(false) => (invert(&key), "1".to_string()),
            OverrideValue::Raw(v) => (key, v),
        };
        self.insert(key, value);
    }

    // Re-pushing an existing key overwrites in place, keeping the first
    // position.
    fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up the stored value for a normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present, regardless of its value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Whether any override was supplied at all.
    pub fn has_any(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Join entries as `key=value` with `:` separators, in stored order,
    /// skipping keys in `exclude`. Empty when nothing remains.
    pub fn combined(&self, exclude: &[&str]) -> String {
        let parts: Vec<String> = self
            .entries
            .iter()
            .filter(|(k, _)| !exclude.contains(&k.as_str()))
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        parts.join(":")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/user.rs"]
mod tests;

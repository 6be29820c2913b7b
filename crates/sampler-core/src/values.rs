//! Generated value representations.
//!
//! A [`GeneratedRecord`] is what the generator hands back to its caller. It
//! serializes as a plain JSON object; the caller decides the wire format.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// A single generated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    /// Boolean value
    Bool(bool),

    /// Signed integer
    Int(i64),

    /// Floating point
    Float(f64),

    /// String value
    String(String),

    /// Ordered sequence of values
    Array(Vec<GeneratedValue>),

    /// Nested record
    Object(GeneratedRecord),
}

impl GeneratedValue {
    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&[GeneratedValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as a nested record.
    pub fn as_record(&self) -> Option<&GeneratedRecord> {
        match self {
            Self::Object(record) => Some(record),
            _ => None,
        }
    }
}

impl From<bool> for GeneratedValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for GeneratedValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for GeneratedValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for GeneratedValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for GeneratedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<GeneratedRecord> for GeneratedValue {
    fn from(value: GeneratedRecord) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<GeneratedValue>> for GeneratedValue {
    fn from(value: Vec<GeneratedValue>) -> Self {
        Self::Array(value)
    }
}

/// A generated record: attribute name to value.
///
/// Keys are kept sorted so serialized output is stable for a given seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedRecord {
    fields: BTreeMap<String, GeneratedValue>,
}

impl GeneratedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<GeneratedValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field by name.
    pub fn get(&self, name: &str) -> Option<&GeneratedValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, GeneratedValue> {
        self.fields.iter()
    }

    /// Render as a `serde_json::Value`.
    pub fn to_json(&self) -> serde_json::Value {
        // Serializing a map of plain values cannot fail; NaN floats become null.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl<'a> IntoIterator for &'a GeneratedRecord {
    type Item = (&'a String, &'a GeneratedValue);
    type IntoIter = btree_map::Iter<'a, String, GeneratedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K: Into<String>, V: Into<GeneratedValue>> FromIterator<(K, V)> for GeneratedRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

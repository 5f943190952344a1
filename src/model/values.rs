//! Extracted field values supplied per item

use super::timestamp::Timestamp;
use crate::error::{IndexingError, IndexingResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Largest integer magnitude an `f64` represents exactly (2^53)
const MAX_EXACT_INT: u64 = 1 << 53;

/// A single raw value extracted from the repository for an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Timestamp(Timestamp),
}

impl FieldValue {
    /// Render the value as text. Every variant has a text form.
    pub fn to_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Timestamp(ts) => ts.to_canonical(),
        }
    }

    /// Interpret the value as an instant. Integers are epoch milliseconds.
    pub fn to_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            Self::String(s) => Timestamp::parse(s),
            Self::Int(millis) => Timestamp::from_epoch_millis(*millis),
            Self::Float(_) | Self::Bool(_) => None,
        }
    }

    /// Interpret the value as an integer. Floats convert only when whole and
    /// within `i64` range.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::String(s) => s.trim().parse().ok(),
            Self::Float(f)
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    /// Interpret the value as a finite double. Integers convert only while
    /// `f64` holds them exactly.
    pub fn to_f64(&self) -> Option<f64> {
        let f = match self {
            Self::Float(f) => *f,
            Self::Int(n) if n.unsigned_abs() <= MAX_EXACT_INT => *n as f64,
            Self::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        f.is_finite().then_some(f)
    }

    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Interpret the value as a calendar date
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            Self::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .ok()
                .or_else(|| Timestamp::parse(s).map(|ts| ts.as_datetime().date_naive())),
            Self::Timestamp(ts) => Some(ts.as_datetime().date_naive()),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Timestamp> for FieldValue {
    fn from(ts: Timestamp) -> Self {
        Self::Timestamp(ts)
    }
}

/// Multimap from field name to the values extracted for it.
///
/// Values under a key keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap {
    entries: HashMap<String, Vec<FieldValue>>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key`
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.entries.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Append several values under `key`, in order
    pub fn put_all<I, V>(&mut self, key: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        let slot = self.entries.entry(key.into()).or_default();
        slot.extend(values.into_iter().map(Into::into));
        self
    }

    /// All values under `key`; empty when the key is absent
    pub fn get(&self, key: &str) -> &[FieldValue] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first value inserted under `key`
    pub fn first(&self, key: &str) -> Option<&FieldValue> {
        self.get(key).first()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(key, _)| key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// Load from a JSON object whose members are scalars or arrays of scalars.
    ///
    /// `null` members and elements are skipped. Nested objects are rejected.
    pub fn from_json(value: &Value) -> IndexingResult<Self> {
        let Value::Object(members) = value else {
            return Err(IndexingError::InvalidArgument(
                "value map must be a JSON object".to_string(),
            ));
        };

        let mut map = Self::new();
        for (key, member) in members {
            match member {
                Value::Array(items) => {
                    for item in items {
                        if let Some(v) = json_scalar(key, item)? {
                            map.put(key.clone(), v);
                        }
                    }
                }
                other => {
                    if let Some(v) = json_scalar(key, other)? {
                        map.put(key.clone(), v);
                    }
                }
            }
        }
        Ok(map)
    }
}

fn json_scalar(key: &str, value: &Value) -> IndexingResult<Option<FieldValue>> {
    Ok(match value {
        Value::Null => None,
        Value::Bool(b) => Some(FieldValue::Bool(*b)),
        Value::String(s) => Some(FieldValue::String(s.clone())),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(FieldValue::Int(i)),
            None => n.as_f64().map(FieldValue::Float),
        },
        Value::Array(_) | Value::Object(_) => {
            return Err(IndexingError::InvalidArgument(format!(
                "value for {} must be a scalar",
                key
            )))
        }
    })
}

impl<K, V> FromIterator<(K, V)> for ValueMap
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.put(key, value);
        }
        map
    }
}

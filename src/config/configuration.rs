//! Flat key/value configuration source

use crate::error::{IndexingError, IndexingResult};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// A flat `key -> string` configuration.
///
/// Blank values are treated the same as missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    entries: BTreeMap<String, String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit key/value pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a YAML document.
    ///
    /// Nested mappings flatten into dotted keys, so
    /// `itemMetadata: { title: { field: name } }` yields
    /// `itemMetadata.title.field = name`. Sequences join with `,`.
    pub fn from_yaml_str(yaml: &str) -> IndexingResult<Self> {
        let doc: Value = serde_yaml::from_str(yaml)?;
        let mut entries = BTreeMap::new();
        match doc {
            Value::Null => {}
            Value::Mapping(_) => flatten("", &doc, &mut entries)?,
            _ => {
                return Err(IndexingError::InvalidArgument(
                    "configuration document must be a mapping".to_string(),
                ))
            }
        }
        Ok(Self { entries })
    }

    /// Load a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> IndexingResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&raw)
    }

    /// Set a single key, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Get a non-blank value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) -> IndexingResult<()> {
    match value {
        Value::Mapping(members) => {
            for (key, member) in members {
                let key = scalar_text(key).ok_or_else(|| {
                    IndexingError::InvalidArgument(format!(
                        "configuration key under '{}' must be a scalar",
                        prefix
                    ))
                })?;
                let full = if prefix.is_empty() {
                    key
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&full, member, out)?;
            }
        }
        Value::Sequence(items) => {
            let joined = items
                .iter()
                .map(|item| {
                    scalar_text(item).ok_or_else(|| {
                        IndexingError::InvalidArgument(format!(
                            "list entries for '{}' must be scalars",
                            prefix
                        ))
                    })
                })
                .collect::<IndexingResult<Vec<_>>>()?
                .join(",");
            out.insert(prefix.to_string(), joined);
        }
        Value::Tagged(tagged) => flatten(prefix, &tagged.value, out)?,
        Value::Null => {}
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                out.insert(prefix.to_string(), text);
            }
        }
    }
    Ok(())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

//! Item metadata defaults seeded from configuration

use super::configuration::Configuration;
use super::keys;
use crate::error::{IndexingError, IndexingResult};
use crate::model::Timestamp;

/// Configured sources for one attribute: a value-map field and a literal fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredField<T> {
    pub field: Option<String>,
    pub value: Option<T>,
}

impl<T> ConfiguredField<T> {
    pub fn is_empty(&self) -> bool {
        self.field.is_none() && self.value.is_none()
    }
}

impl<T> Default for ConfiguredField<T> {
    fn default() -> Self {
        Self {
            field: None,
            value: None,
        }
    }
}

/// Typed item defaults, parsed once from a [`Configuration`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDefaults {
    pub object_type: Option<String>,
    pub title: ConfiguredField<String>,
    pub source_repository_url: ConfiguredField<String>,
    pub content_language: ConfiguredField<String>,
    pub mime_type: ConfiguredField<String>,
    pub hash: ConfiguredField<String>,
    pub container_name: ConfiguredField<String>,
    pub update_time: ConfiguredField<Timestamp>,
    pub create_time: ConfiguredField<Timestamp>,
}

impl ItemDefaults {
    /// Read the item metadata keys out of `config`.
    ///
    /// Date-time defaults are parsed here; a malformed one is a
    /// [`IndexingError::ConfigFormat`] naming the key.
    pub fn from_configuration(config: &Configuration) -> IndexingResult<Self> {
        for key in config.keys() {
            if key.starts_with(keys::PREFIX) && !keys::is_known(key) {
                tracing::warn!(key, "ignoring unrecognized item metadata configuration key");
            }
        }

        Ok(Self {
            object_type: config.get(keys::OBJECT_TYPE).map(str::to_string),
            title: text_field(config, keys::TITLE_FIELD, keys::TITLE_VALUE),
            source_repository_url: text_field(
                config,
                keys::SOURCE_REPOSITORY_URL_FIELD,
                keys::SOURCE_REPOSITORY_URL_VALUE,
            ),
            content_language: text_field(
                config,
                keys::CONTENT_LANGUAGE_FIELD,
                keys::CONTENT_LANGUAGE_VALUE,
            ),
            mime_type: text_field(config, keys::MIME_TYPE_FIELD, keys::MIME_TYPE_VALUE),
            hash: text_field(config, keys::HASH_FIELD, keys::HASH_VALUE),
            container_name: text_field(
                config,
                keys::CONTAINER_NAME_FIELD,
                keys::CONTAINER_NAME_VALUE,
            ),
            update_time: time_field(config, keys::UPDATE_TIME_FIELD, keys::UPDATE_TIME_VALUE)?,
            create_time: time_field(config, keys::CREATE_TIME_FIELD, keys::CREATE_TIME_VALUE)?,
        })
    }
}

fn text_field(config: &Configuration, field_key: &str, value_key: &str) -> ConfiguredField<String> {
    ConfiguredField {
        field: config.get(field_key).map(str::to_string),
        value: config.get(value_key).map(str::to_string),
    }
}

fn time_field(
    config: &Configuration,
    field_key: &str,
    value_key: &str,
) -> IndexingResult<ConfiguredField<Timestamp>> {
    let value = match config.get(value_key) {
        Some(raw) => Some(Timestamp::parse(raw).ok_or_else(|| IndexingError::ConfigFormat {
            key: value_key.to_string(),
            value: raw.to_string(),
        })?),
        None => None,
    };
    Ok(ConfiguredField {
        field: config.get(field_key).map(str::to_string),
        value,
    })
}

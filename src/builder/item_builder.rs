//! ItemBuilder: resolves item metadata from setters, configuration, and field values
//!
//! Each attribute resolves in this order, falling through whenever a source
//! yields nothing:
//!
//! 1. the builder setter (`with_*`), unless cleared with `clear_*`
//! 2. the configured `.field` key, looked up in the value map
//! 3. the configured `.defaultValue` literal

use super::field_or_value::FieldOrValue;
use crate::config::{ConfiguredField, ItemDefaults};
use crate::context::IndexingContext;
use crate::error::{IndexingError, IndexingResult};
use crate::model::{
    FieldValue, Item, ItemMetadata, ItemType, SearchQualityMetadata, Timestamp, ValueMap,
};
use crate::schema::StructuredData;
use std::sync::Arc;

/// Explicit builder state for one attribute
#[derive(Debug, Clone, PartialEq)]
enum Setting<T> {
    Unset,
    Cleared,
    Set(FieldOrValue<T>),
}

impl<T> Default for Setting<T> {
    fn default() -> Self {
        Self::Unset
    }
}

/// Builds one [`Item`].
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    name: String,
    item_type: Option<ItemType>,
    queue: Option<String>,
    version: Option<Vec<u8>>,
    values: ValueMap,
    object_type: Setting<String>,
    title: Setting<String>,
    source_repository_url: Setting<String>,
    content_language: Setting<String>,
    mime_type: Setting<String>,
    hash: Setting<String>,
    container_name: Setting<String>,
    update_time: Setting<Timestamp>,
    create_time: Setting<Timestamp>,
    search_quality_metadata: Setting<SearchQualityMetadata>,
    defaults: Option<Arc<ItemDefaults>>,
    structured_data: Option<Arc<StructuredData>>,
}

impl ItemBuilder {
    /// Create a builder for the item named `name`.
    ///
    /// Fails with [`IndexingError::InvalidArgument`] if the name is blank.
    pub fn new(name: impl Into<String>) -> IndexingResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(IndexingError::InvalidArgument(
                "item name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            item_type: None,
            queue: None,
            version: None,
            values: ValueMap::new(),
            object_type: Setting::default(),
            title: Setting::default(),
            source_repository_url: Setting::default(),
            content_language: Setting::default(),
            mime_type: Setting::default(),
            hash: Setting::default(),
            container_name: Setting::default(),
            update_time: Setting::default(),
            create_time: Setting::default(),
            search_quality_metadata: Setting::default(),
            defaults: None,
            structured_data: None,
        })
    }

    /// Create a builder seeded with the context's item defaults.
    ///
    /// The context's schema, if loaded, is used for structured data.
    pub fn from_configuration(
        name: impl Into<String>,
        context: &IndexingContext,
    ) -> IndexingResult<Self> {
        let defaults = context
            .defaults()
            .ok_or(IndexingError::NotInitialized("configuration"))?;
        let mut builder = Self::new(name)?;
        builder.defaults = Some(defaults);
        builder.structured_data = context.structured_data();
        Ok(builder)
    }

    /// Schema used to build structured data when an object type is set
    pub fn with_structured_data(mut self, structured_data: Arc<StructuredData>) -> Self {
        self.structured_data = Some(structured_data);
        self
    }

    pub fn with_item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    /// Opaque version bytes
    pub fn with_version(mut self, version: impl Into<Vec<u8>>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Field values that `Field` references resolve against
    pub fn with_values(mut self, values: ValueMap) -> Self {
        self.values = values;
        self
    }

    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Setting::Set(FieldOrValue::Value(object_type.into()));
        self
    }

    pub fn clear_object_type(mut self) -> Self {
        self.object_type = Setting::Cleared;
        self
    }

    pub fn with_title(mut self, title: impl Into<FieldOrValue<String>>) -> Self {
        self.title = Setting::Set(title.into());
        self
    }

    pub fn clear_title(mut self) -> Self {
        self.title = Setting::Cleared;
        self
    }

    pub fn with_source_repository_url(mut self, url: impl Into<FieldOrValue<String>>) -> Self {
        self.source_repository_url = Setting::Set(url.into());
        self
    }

    pub fn clear_source_repository_url(mut self) -> Self {
        self.source_repository_url = Setting::Cleared;
        self
    }

    pub fn with_content_language(mut self, language: impl Into<FieldOrValue<String>>) -> Self {
        self.content_language = Setting::Set(language.into());
        self
    }

    pub fn clear_content_language(mut self) -> Self {
        self.content_language = Setting::Cleared;
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<FieldOrValue<String>>) -> Self {
        self.mime_type = Setting::Set(mime_type.into());
        self
    }

    pub fn clear_mime_type(mut self) -> Self {
        self.mime_type = Setting::Cleared;
        self
    }

    pub fn with_hash(mut self, hash: impl Into<FieldOrValue<String>>) -> Self {
        self.hash = Setting::Set(hash.into());
        self
    }

    pub fn clear_hash(mut self) -> Self {
        self.hash = Setting::Cleared;
        self
    }

    pub fn with_container_name(mut self, container: impl Into<FieldOrValue<String>>) -> Self {
        self.container_name = Setting::Set(container.into());
        self
    }

    pub fn clear_container_name(mut self) -> Self {
        self.container_name = Setting::Cleared;
        self
    }

    pub fn with_update_time(mut self, time: impl Into<FieldOrValue<Timestamp>>) -> Self {
        self.update_time = Setting::Set(time.into());
        self
    }

    pub fn clear_update_time(mut self) -> Self {
        self.update_time = Setting::Cleared;
        self
    }

    pub fn with_create_time(mut self, time: impl Into<FieldOrValue<Timestamp>>) -> Self {
        self.create_time = Setting::Set(time.into());
        self
    }

    pub fn clear_create_time(mut self) -> Self {
        self.create_time = Setting::Cleared;
        self
    }

    /// A `Field` reference is read as the numeric quality
    pub fn with_search_quality_metadata(
        mut self,
        quality: impl Into<FieldOrValue<SearchQualityMetadata>>,
    ) -> Self {
        self.search_quality_metadata = Setting::Set(quality.into());
        self
    }

    pub fn clear_search_quality_metadata(mut self) -> Self {
        self.search_quality_metadata = Setting::Cleared;
        self
    }

    /// Resolve every attribute and produce the item.
    ///
    /// Field values that are missing or cannot be converted are skipped.
    /// Structured data errors are returned.
    pub fn build(self) -> IndexingResult<Item> {
        let defaults = self.defaults.as_deref();
        let values = &self.values;
        let text = |v: &FieldValue| Some(v.to_text());

        let configured_object_type = ConfiguredField {
            field: None,
            value: defaults.and_then(|d| d.object_type.clone()),
        };
        let object_type = resolve(
            "objectType",
            &self.object_type,
            Some(&configured_object_type),
            values,
            text,
        );

        let metadata = ItemMetadata {
            title: resolve("title", &self.title, defaults.map(|d| &d.title), values, text),
            source_repository_url: resolve(
                "sourceRepositoryUrl",
                &self.source_repository_url,
                defaults.map(|d| &d.source_repository_url),
                values,
                text,
            ),
            container_name: resolve(
                "containerName",
                &self.container_name,
                defaults.map(|d| &d.container_name),
                values,
                text,
            ),
            object_type: object_type.clone(),
            mime_type: resolve(
                "mimeType",
                &self.mime_type,
                defaults.map(|d| &d.mime_type),
                values,
                text,
            ),
            content_language: resolve(
                "contentLanguage",
                &self.content_language,
                defaults.map(|d| &d.content_language),
                values,
                text,
            ),
            hash: resolve("hash", &self.hash, defaults.map(|d| &d.hash), values, text),
            update_time: resolve(
                "updateTime",
                &self.update_time,
                defaults.map(|d| &d.update_time),
                values,
                FieldValue::to_timestamp,
            ),
            create_time: resolve(
                "createTime",
                &self.create_time,
                defaults.map(|d| &d.create_time),
                values,
                FieldValue::to_timestamp,
            ),
            search_quality_metadata: resolve(
                "searchQualityMetadata",
                &self.search_quality_metadata,
                None,
                values,
                |v| v.to_f64().map(SearchQualityMetadata::new),
            ),
        };

        let mut item = Item::new(self.name).with_metadata(metadata);
        item.item_type = self.item_type;
        item.queue = self.queue;
        if let Some(version) = &self.version {
            item = item.encode_version(version);
        }

        if let Some(object_type) = &object_type {
            let structured_data = self
                .structured_data
                .as_ref()
                .ok_or(IndexingError::NotInitialized("structured data schema"))?;
            let object = structured_data.build_structured_data(object_type, values)?;
            item = item.with_structured_data(object);
        }

        tracing::debug!(
            name = %item.name,
            object_type = ?item.metadata.object_type,
            empty_metadata = item.metadata.is_empty(),
            "built item"
        );
        Ok(item)
    }
}

fn resolve<T: Clone>(
    attribute: &'static str,
    setting: &Setting<T>,
    configured: Option<&ConfiguredField<T>>,
    values: &ValueMap,
    convert: impl Fn(&FieldValue) -> Option<T>,
) -> Option<T> {
    match setting {
        Setting::Cleared => return None,
        Setting::Set(FieldOrValue::Value(value)) => return Some(value.clone()),
        Setting::Set(FieldOrValue::Field(field)) => {
            if let Some(value) = lookup(attribute, field, values, &convert) {
                return Some(value);
            }
        }
        Setting::Unset => {}
    }

    let configured = configured?;
    configured
        .field
        .as_deref()
        .and_then(|field| lookup(attribute, field, values, &convert))
        .or_else(|| configured.value.clone())
}

fn lookup<T>(
    attribute: &'static str,
    field: &str,
    values: &ValueMap,
    convert: &impl Fn(&FieldValue) -> Option<T>,
) -> Option<T> {
    let Some(raw) = values.first(field) else {
        tracing::debug!(attribute, field, "no value for field");
        return None;
    };
    let converted = convert(raw);
    if converted.is_none() {
        tracing::debug!(attribute, field, value = ?raw, "field value not convertible, skipping");
    }
    converted
}

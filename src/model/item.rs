//! Item record as sent to the search index

use super::structured::StructuredDataObject;
use super::timestamp::Timestamp;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of item in the index hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Unspecified,
    ContentItem,
    ContainerItem,
    VirtualContainerItem,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::ContentItem => "CONTENT_ITEM",
            Self::ContainerItem => "CONTAINER_ITEM",
            Self::VirtualContainerItem => "VIRTUAL_CONTAINER_ITEM",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UNSPECIFIED" => Ok(Self::Unspecified),
            "CONTENT_ITEM" => Ok(Self::ContentItem),
            "CONTAINER_ITEM" => Ok(Self::ContainerItem),
            "VIRTUAL_CONTAINER_ITEM" => Ok(Self::VirtualContainerItem),
            other => Err(format!("unknown item type: {}", other)),
        }
    }
}

/// Ranking hints for the item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchQualityMetadata {
    /// Quality in the range 0.0 to 1.0
    pub quality: f64,
}

impl SearchQualityMetadata {
    pub fn new(quality: f64) -> Self {
        Self { quality }
    }
}

/// Resolved item metadata. Absent attributes are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_repository_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_quality_metadata: Option<SearchQualityMetadata>,
}

impl ItemMetadata {
    /// True when no attribute is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Structured data attached to an item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStructuredData {
    pub object: StructuredDataObject,
}

/// An item ready to be indexed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item identifier
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    /// Version bytes in transport encoding; see [`Item::encode_version`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub metadata: ItemMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<ItemStructuredData>,
}

impl Item {
    /// Create an item with the given name and empty metadata
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item_type: None,
            queue: None,
            version: None,
            metadata: ItemMetadata::default(),
            structured_data: None,
        }
    }

    pub fn with_item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    pub fn with_metadata(mut self, metadata: ItemMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_structured_data(mut self, object: StructuredDataObject) -> Self {
        self.structured_data = Some(ItemStructuredData { object });
        self
    }

    /// Store opaque version bytes in their transport encoding
    pub fn encode_version(mut self, version: &[u8]) -> Self {
        self.version = Some(URL_SAFE_NO_PAD.encode(version));
        self
    }

    /// Decode the version back into bytes
    pub fn decode_version(&self) -> Option<Vec<u8>> {
        self.version
            .as_deref()
            .and_then(|encoded| URL_SAFE_NO_PAD.decode(encoded).ok())
    }
}

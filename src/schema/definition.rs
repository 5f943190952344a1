//! Schema definitions for structured data

use serde::{Deserialize, Serialize};

/// Declared type of a structured data property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Text,
    Integer,
    Double,
    Boolean,
    Timestamp,
    Date,
}

/// One property of an object definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub is_repeatable: bool,
    #[serde(default)]
    pub is_required: bool,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            is_repeatable: false,
            is_required: false,
        }
    }

    pub fn repeatable(mut self) -> Self {
        self.is_repeatable = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }
}

/// A named object type and the properties it declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDefinition {
    pub name: String,
    #[serde(default)]
    pub property_definitions: Vec<PropertyDefinition>,
}

impl ObjectDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_definitions: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.property_definitions.push(property);
        self
    }
}

/// The full set of object definitions for a data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default)]
    pub object_definitions: Vec<ObjectDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, object: ObjectDefinition) -> Self {
        self.object_definitions.push(object);
        self
    }

    /// Parse a schema from its JSON representation
    pub fn from_json_str(json: &str) -> crate::IndexingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

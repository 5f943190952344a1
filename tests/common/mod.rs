//! Shared fixtures for connector item tests
//!
//! Models a small document repository connector: YAML configuration, a JSON
//! schema with two object types, and per-document JSON field values.

#![allow(dead_code)]

use indexkit::{Configuration, IndexingContext, Schema, ValueMap};
use serde_json::{json, Value};

pub const CONNECTOR_CONFIG: &str = r#"
itemMetadata:
  objectType: document
  title:
    field: subject
    defaultValue: Untitled
  sourceRepositoryUrl:
    field: link
  contentLanguage:
    defaultValue: en-US
  updateTime:
    field: modified
    defaultValue: "2001-01-01T00:00:00Z"
  createTime:
    field: created
  mimeType:
    defaultValue: text/html
"#;

pub const CONNECTOR_SCHEMA: &str = r#"{
  "objectDefinitions": [
    {
      "name": "document",
      "propertyDefinitions": [
        { "name": "author", "type": "text", "isRepeatable": true },
        { "name": "pages", "type": "integer" },
        { "name": "published", "type": "date" }
      ]
    },
    { "name": "folder" }
  ]
}"#;

/// Context loaded with the connector configuration and schema
pub fn connector_context() -> IndexingContext {
    let mut ctx = IndexingContext::new();
    ctx.init_config(&Configuration::from_yaml_str(CONNECTOR_CONFIG).expect("config parses"))
        .expect("config initializes");
    ctx.init_schema(Schema::from_json_str(CONNECTOR_SCHEMA).expect("schema parses"))
        .expect("schema initializes");
    ctx
}

/// Field values as the repository would extract them for one document.
///
/// Members of `overrides` replace the defaults; `null` removes a member.
pub fn document_values(overrides: Value) -> ValueMap {
    let mut doc = json!({
        "subject": "Quarterly report",
        "link": "http://example.com/docs/42",
        "modified": "Wed, 08 Aug 2018 15:48:17 +0000",
        "created": "2017-07-07 01:02:03",
        "author": ["Ann", "Bob"],
        "pages": 12,
        "published": "2018-08-01",
        "internalId": "ignored-by-schema"
    });
    if let (Some(base), Value::Object(more)) = (doc.as_object_mut(), overrides) {
        for (k, v) in more {
            base.insert(k, v);
        }
    }
    ValueMap::from_json(&doc).expect("values load")
}

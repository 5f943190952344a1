//! indexkit: configuration-driven search index item records
//!
//! Builds index [`Item`]s for a connector from three sources of metadata:
//! explicit builder calls, connector configuration, and the field values
//! extracted from each repository document.
//!
//! # Core Concepts
//!
//! - **ValueMap**: per-document multimap of extracted field values
//! - **FieldOrValue**: an attribute source, either a literal or a field reference
//! - **IndexingContext**: item defaults and structured data schema, loaded once
//!
//! # Example
//!
//! ```
//! use indexkit::{Configuration, FieldOrValue, IndexingContext, ItemBuilder, ValueMap};
//!
//! let mut ctx = IndexingContext::new();
//! ctx.init_config(&Configuration::from_pairs([("itemMetadata.title.field", "name")]))
//!     .unwrap();
//!
//! let mut values = ValueMap::new();
//! values.put("name", "My Name is Sam");
//!
//! let item = ItemBuilder::from_configuration("doc-1", &ctx)
//!     .unwrap()
//!     .with_values(values)
//!     .with_mime_type("text/plain")
//!     .with_update_time(FieldOrValue::field("modified"))
//!     .build()
//!     .unwrap();
//! assert_eq!(item.metadata.title.as_deref(), Some("My Name is Sam"));
//! ```

mod builder;
pub mod config;
mod context;
mod error;
mod model;
pub mod schema;

pub use builder::{FieldOrValue, ItemBuilder};
pub use config::{Configuration, ItemDefaults};
pub use context::IndexingContext;
pub use error::{IndexingError, IndexingResult};
pub use model::{
    Date, FieldValue, Item, ItemMetadata, ItemStructuredData, ItemType, NamedProperty,
    PropertyValues, SearchQualityMetadata, StructuredDataObject, Timestamp, ValueMap,
};
pub use schema::{ObjectDefinition, PropertyDefinition, PropertyType, Schema, StructuredData};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Item record data structures

mod item;
mod structured;
mod timestamp;
mod values;


pub use item::{Item, ItemMetadata, ItemStructuredData, ItemType, SearchQualityMetadata};
pub use structured::{Date, NamedProperty, PropertyValues, StructuredDataObject};
pub use timestamp::Timestamp;
pub use values::{FieldValue, ValueMap};

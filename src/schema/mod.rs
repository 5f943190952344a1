//! Structured data schemas

mod definition;
mod structured_data;

pub use definition::{ObjectDefinition, PropertyDefinition, PropertyType, Schema};
pub use structured_data::StructuredData;

//! Item construction

mod field_or_value;
mod item_builder;

pub use field_or_value::FieldOrValue;
pub use item_builder::ItemBuilder;

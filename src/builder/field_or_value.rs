//! Literal value or value-map field reference

/// Source of a single metadata attribute.
///
/// `Value` is used as is. `Field` names a [`ValueMap`](crate::ValueMap) key whose
/// first value is converted to `T` when the item is built.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOrValue<T> {
    Field(String),
    Value(T),
}

impl<T> FieldOrValue<T> {
    /// Reference a value-map key
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Use a literal value
    pub fn value(value: impl Into<T>) -> Self {
        Self::Value(value.into())
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }
}

impl<T> From<T> for FieldOrValue<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for FieldOrValue<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

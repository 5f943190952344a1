//! Builds structured data payloads from a value map and a loaded schema

use super::definition::{ObjectDefinition, PropertyDefinition, PropertyType, Schema};
use crate::error::{IndexingError, IndexingResult};
use crate::model::{Date, FieldValue, NamedProperty, PropertyValues, StructuredDataObject, ValueMap};
use std::collections::{HashMap, HashSet};

/// A validated schema, indexed by object type name
#[derive(Debug, Clone, Default)]
pub struct StructuredData {
    objects: HashMap<String, ObjectDefinition>,
}

impl StructuredData {
    /// Load a schema.
    ///
    /// Object names must be unique and non-empty, as must property names
    /// within one object.
    pub fn new(schema: Schema) -> IndexingResult<Self> {
        let mut objects = HashMap::new();
        for object in schema.object_definitions {
            validate_object(&object)?;
            if objects.contains_key(&object.name) {
                return Err(IndexingError::SchemaValidation(format!(
                    "duplicate object definition: {}",
                    object.name
                )));
            }
            objects.insert(object.name.clone(), object);
        }
        Ok(Self { objects })
    }

    pub fn has_object_type(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn object_types(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Build the payload for `object_type` from `values`.
    ///
    /// Only declared properties are read; other keys are ignored. Properties
    /// appear in declaration order and non-repeatable ones keep their first
    /// value.
    pub fn build_structured_data(
        &self,
        object_type: &str,
        values: &ValueMap,
    ) -> IndexingResult<StructuredDataObject> {
        let object = self.objects.get(object_type).ok_or_else(|| {
            IndexingError::SchemaValidation(format!("undefined object type: {}", object_type))
        })?;

        let mut properties = Vec::new();
        for definition in &object.property_definitions {
            let raw = values.get(&definition.name);
            if raw.is_empty() {
                if definition.is_required {
                    return Err(IndexingError::SchemaValidation(format!(
                        "missing required property {}.{}",
                        object_type, definition.name
                    )));
                }
                continue;
            }

            let raw = if definition.is_repeatable { raw } else { &raw[..1] };
            properties.push(NamedProperty {
                name: definition.name.clone(),
                values: convert(object_type, definition, raw)?,
            });
        }

        tracing::debug!(
            object_type,
            properties = properties.len(),
            "built structured data"
        );
        Ok(StructuredDataObject { properties })
    }
}

fn validate_object(object: &ObjectDefinition) -> IndexingResult<()> {
    if object.name.trim().is_empty() {
        return Err(IndexingError::SchemaValidation(
            "object definition without a name".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for property in &object.property_definitions {
        if property.name.trim().is_empty() {
            return Err(IndexingError::SchemaValidation(format!(
                "unnamed property in object {}",
                object.name
            )));
        }
        if !seen.insert(property.name.as_str()) {
            return Err(IndexingError::SchemaValidation(format!(
                "duplicate property {}.{}",
                object.name, property.name
            )));
        }
    }
    Ok(())
}

fn convert(
    object_type: &str,
    definition: &PropertyDefinition,
    raw: &[FieldValue],
) -> IndexingResult<PropertyValues> {
    let invalid = |value: &FieldValue| {
        IndexingError::SchemaValidation(format!(
            "cannot convert {:?} to {:?} for property {}.{}",
            value, definition.property_type, object_type, definition.name
        ))
    };

    Ok(match definition.property_type {
        PropertyType::Text => PropertyValues::TextValues {
            values: raw.iter().map(FieldValue::to_text).collect(),
        },
        PropertyType::Integer => PropertyValues::IntegerValues {
            values: collect(raw, FieldValue::to_i64, invalid)?,
        },
        PropertyType::Double => PropertyValues::DoubleValues {
            values: collect(raw, FieldValue::to_f64, invalid)?,
        },
        PropertyType::Boolean => {
            let first = &raw[0];
            PropertyValues::BooleanValue(first.to_bool().ok_or_else(|| invalid(first))?)
        }
        PropertyType::Timestamp => PropertyValues::TimestampValues {
            values: collect(raw, FieldValue::to_timestamp, invalid)?,
        },
        PropertyType::Date => PropertyValues::DateValues {
            values: collect(raw, |v| v.to_date().map(Date::from), invalid)?,
        },
    })
}

fn collect<T>(
    raw: &[FieldValue],
    convert: impl Fn(&FieldValue) -> Option<T>,
    invalid: impl Fn(&FieldValue) -> IndexingError,
) -> IndexingResult<Vec<T>> {
    raw.iter()
        .map(|value| convert(value).ok_or_else(|| invalid(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_schema() -> Schema {
        Schema::new().with_object(
            ObjectDefinition::new("book")
                .with_property(PropertyDefinition::new("author", PropertyType::Text).repeatable())
                .with_property(PropertyDefinition::new("pages", PropertyType::Integer).required())
                .with_property(PropertyDefinition::new("rating", PropertyType::Double))
                .with_property(PropertyDefinition::new("inPrint", PropertyType::Boolean))
                .with_property(PropertyDefinition::new("published", PropertyType::Date))
                .with_property(PropertyDefinition::new("indexed", PropertyType::Timestamp)),
        )
    }

    #[test]
    fn empty_object_definition_yields_empty_payload() {
        let sd = StructuredData::new(Schema::new().with_object(ObjectDefinition::new("myObject")))
            .unwrap();
        let object = sd.build_structured_data("myObject", &ValueMap::new()).unwrap();
        assert!(object.is_empty());
    }

    #[test]
    fn unknown_object_type_fails() {
        let sd = StructuredData::new(Schema::new()).unwrap();
        let err = sd.build_structured_data("missing", &ValueMap::new()).unwrap_err();
        assert!(matches!(err, IndexingError::SchemaValidation(_)));
    }

    #[test]
    fn converts_declared_properties_in_order() {
        let sd = StructuredData::new(book_schema()).unwrap();
        let mut values = ValueMap::new();
        values
            .put("indexed", "Wed, 08 Aug 2018 15:48:17 +0000")
            .put("author", "Ann")
            .put("author", "Bob")
            .put("pages", "320")
            .put("rating", 4.5)
            .put("inPrint", "true")
            .put("published", "2017-07-07")
            .put("undeclared", "ignored");

        let object = sd.build_structured_data("book", &values).unwrap();
        let names: Vec<&str> = object.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["author", "pages", "rating", "inPrint", "published", "indexed"]
        );

        assert_eq!(
            object.property("author"),
            Some(&PropertyValues::TextValues {
                values: vec!["Ann".into(), "Bob".into()]
            })
        );
        assert_eq!(
            object.property("pages"),
            Some(&PropertyValues::IntegerValues { values: vec![320] })
        );
        assert_eq!(object.property("inPrint"), Some(&PropertyValues::BooleanValue(true)));
        assert!(object.property("undeclared").is_none());
    }

    #[test]
    fn non_repeatable_keeps_first_value() {
        let sd = StructuredData::new(book_schema()).unwrap();
        let mut values = ValueMap::new();
        values.put("pages", 10_i64).put("pages", 20_i64);

        let object = sd.build_structured_data("book", &values).unwrap();
        assert_eq!(
            object.property("pages"),
            Some(&PropertyValues::IntegerValues { values: vec![10] })
        );
    }

    #[test]
    fn missing_required_property_fails() {
        let sd = StructuredData::new(book_schema()).unwrap();
        let mut values = ValueMap::new();
        values.put("author", "Ann");

        let err = sd.build_structured_data("book", &values).unwrap_err();
        assert!(err.to_string().contains("book.pages"));
    }

    #[test]
    fn uncoercible_value_fails() {
        let sd = StructuredData::new(book_schema()).unwrap();
        let mut values = ValueMap::new();
        values.put("pages", "many");

        let err = sd.build_structured_data("book", &values).unwrap_err();
        assert!(matches!(err, IndexingError::SchemaValidation(_)));
        assert!(err.to_string().contains("book.pages"));
    }

    #[test]
    fn integer_outside_range_fails() {
        let sd = StructuredData::new(book_schema()).unwrap();
        let mut values = ValueMap::new();
        values.put("pages", 1e300_f64);

        let err = sd.build_structured_data("book", &values).unwrap_err();
        assert!(matches!(err, IndexingError::SchemaValidation(_)));
        assert!(err.to_string().contains("book.pages"));
    }

    #[test]
    fn non_finite_double_fails() {
        let sd = StructuredData::new(book_schema()).unwrap();
        for raw in [FieldValue::from("NaN"), FieldValue::from("inf"), FieldValue::Float(f64::NAN)] {
            let mut values = ValueMap::new();
            values.put("pages", 1_i64).put("rating", raw);

            let err = sd.build_structured_data("book", &values).unwrap_err();
            assert!(matches!(err, IndexingError::SchemaValidation(_)));
            assert!(err.to_string().contains("book.rating"));
        }
    }

    #[test]
    fn lists_loaded_object_types() {
        let sd = StructuredData::new(
            book_schema().with_object(ObjectDefinition::new("shelf")),
        )
        .unwrap();

        assert!(sd.has_object_type("book"));
        assert!(sd.has_object_type("shelf"));
        assert!(!sd.has_object_type("magazine"));

        let mut types: Vec<&str> = sd.object_types().collect();
        types.sort();
        assert_eq!(types, vec!["book", "shelf"]);
    }

    #[test]
    fn duplicate_definitions_are_rejected() {
        let schema = Schema::new()
            .with_object(ObjectDefinition::new("a"))
            .with_object(ObjectDefinition::new("a"));
        assert!(StructuredData::new(schema).is_err());

        let schema = Schema::new().with_object(
            ObjectDefinition::new("a")
                .with_property(PropertyDefinition::new("p", PropertyType::Text))
                .with_property(PropertyDefinition::new("p", PropertyType::Integer)),
        );
        assert!(StructuredData::new(schema).is_err());
    }
}

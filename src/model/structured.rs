//! Structured data payload types

use super::timestamp::Timestamp;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Calendar date without a time component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Values of one property, tagged by their schema type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyValues {
    TextValues { values: Vec<String> },
    IntegerValues { values: Vec<i64> },
    DoubleValues { values: Vec<f64> },
    BooleanValue(bool),
    TimestampValues { values: Vec<Timestamp> },
    DateValues { values: Vec<Date> },
}

/// A property name paired with its typed values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedProperty {
    pub name: String,
    #[serde(flatten)]
    pub values: PropertyValues,
}

/// Schema-validated property set for one object type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuredDataObject {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<NamedProperty>,
}

impl StructuredDataObject {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&PropertyValues> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.values)
    }
}

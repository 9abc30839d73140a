//! Decoded ISD observation records.

pub mod convert;
pub mod decode;
pub mod field_map;

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub use decode::{decode, decode_isd};
pub use field_map::{Conversion, FieldMap, FieldSpec};

/// A single decoded field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Timestamp(DateTime<Utc>),
    Decimal(Decimal),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%MZ")),
            Value::Decimal(d) => write!(f, "{}", d.normalize()),
        }
    }
}

/// Field name to value, in field map order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedRecord {
    fields: Vec<(&'static str, Value)>,
}

impl DecodedRecord {
    pub fn with_capacity(capacity: usize) -> Self {
        DecodedRecord {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: Value) {
        self.fields.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(n, v)| (*n, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn should_display_values_for_csv() {
        let t = Utc.with_ymd_and_hms(2015, 1, 1, 0, 53, 0).unwrap();

        assert_eq!(Value::Text("KSEA".into()).to_string(), "KSEA");
        assert_eq!(Value::Integer(-9).to_string(), "-9");
        assert_eq!(Value::Timestamp(t).to_string(), "2015-01-01T00:53Z");
        assert_eq!(Value::Decimal(Decimal::new(15000, 3)).to_string(), "15");
        assert_eq!(Value::Decimal(Decimal::new(328084, 3)).to_string(), "328.084");
    }

    #[test]
    fn should_look_up_fields_by_name() {
        let mut record = DecodedRecord::with_capacity(2);
        record.push("usaf_id", Value::Text("727930".into()));
        record.push("wind_direction_true", Value::Integer(160));

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("wind_direction_true"), Some(&Value::Integer(160)));
        assert_eq!(record.get("missing"), None);
    }
}

// src/extract/mod.rs

pub mod classify;
pub mod filter;
pub mod numeric;
pub mod table;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single table cell after extraction: either a cleaned number or the raw
/// text. Serializes untagged, so JSON output carries plain numbers and
/// strings.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Truthiness in the sense the row filter needs: empty text and exact
    /// zero both count as "nothing here".
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Text(s) => s.is_empty(),
            CellValue::Int(n) => *n == 0,
            CellValue::Float(f) => *f == 0.0,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// One extracted table row: the originating endpoint name plus the row's
/// `(header, value)` pairs in table column order. Headers are table-specific;
/// there is no fixed schema across tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub endpoint: String,
    pub fields: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Record {
            endpoint: endpoint.into(),
            fields: Vec::new(),
        }
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name.as_str() == header)
            .map(|(_, value)| value)
    }
}

// Serialized as a single JSON object, `endpoint` first and then the data keys
// in column order, matching the shape of the snapshot and dataset files.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("endpoint", &self.endpoint)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_endpoint_first_in_column_order() {
        let record = Record {
            endpoint: "trade".to_string(),
            fields: vec![
                ("Province".to_string(), CellValue::from("Ontario")),
                ("Exports ($M)".to_string(), CellValue::Int(1234)),
                ("Growth".to_string(), CellValue::Float(2.5)),
            ],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"endpoint":"trade","Province":"Ontario","Exports ($M)":1234,"Growth":2.5}"#
        );
    }

    #[test]
    fn emptiness_covers_text_and_zero() {
        assert!(CellValue::from("").is_empty());
        assert!(CellValue::Int(0).is_empty());
        assert!(CellValue::Float(0.0).is_empty());
        assert!(!CellValue::from("Acme").is_empty());
        assert!(!CellValue::Int(7).is_empty());
    }
}

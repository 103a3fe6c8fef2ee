// src/extract/filter.rs

use super::{CellValue, Record};

/// Placeholder identifiers used by the portal's subtotal/aggregate rows.
static PLACEHOLDER_ROWS: &[&str] = &["Total", "Canada", "All"];

/// Decide whether an extracted row carries per-entity signal. Rows with no
/// data fields, or whose first-column identifier is empty or one of the
/// aggregate placeholders ("Total", "Canada", "All"), are dropped.
pub fn has_meaningful_data(record: &Record, headers: &[String]) -> bool {
    if record.fields.is_empty() {
        return false;
    }

    let Some(first_header) = headers.first() else {
        return false;
    };
    let Some(identifier) = record.get(first_header) else {
        return false;
    };

    match identifier {
        CellValue::Text(s) => !s.is_empty() && !PLACEHOLDER_ROWS.contains(&s.as_str()),
        // numeric identifiers pass unless they cleaned down to zero
        other => !other.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(fields: Vec<(&str, CellValue)>) -> Record {
        Record {
            endpoint: "x".to_string(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn placeholder_identifier_is_rejected() {
        let record = record_with(vec![("Name", CellValue::from("Total"))]);
        assert!(!has_meaningful_data(&record, &headers(&["Name"])));

        let record = record_with(vec![("Name", CellValue::from("Canada"))]);
        assert!(!has_meaningful_data(&record, &headers(&["Name"])));
    }

    #[test]
    fn real_identifier_is_accepted() {
        let record = record_with(vec![("Name", CellValue::from("Acme"))]);
        assert!(has_meaningful_data(&record, &headers(&["Name"])));
    }

    #[test]
    fn record_without_data_fields_is_rejected() {
        let record = record_with(vec![]);
        assert!(!has_meaningful_data(&record, &headers(&["Name"])));
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let record = record_with(vec![("Name", CellValue::from(""))]);
        assert!(!has_meaningful_data(&record, &headers(&["Name"])));
    }

    #[test]
    fn numeric_identifier_follows_truthiness() {
        let record = record_with(vec![("Code", CellValue::Int(111))]);
        assert!(has_meaningful_data(&record, &headers(&["Code"])));

        let record = record_with(vec![("Code", CellValue::Int(0))]);
        assert!(!has_meaningful_data(&record, &headers(&["Code"])));
    }
}

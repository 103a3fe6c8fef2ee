// src/extract/table.rs

use scraper::{ElementRef, Selector};
use tracing::trace;

use super::classify::ClassifierRules;
use super::filter::has_meaningful_data;
use super::numeric::normalize;
use super::{CellValue, Record};

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().map(str::trim).collect()
}

/// Extract typed records from one HTML table element, tagging each with
/// `endpoint`.
///
/// Header detection examines at most the first two rows and keeps the one
/// with the most non-empty cells (first row wins ties); data rows start
/// immediately after the chosen header row. Each data cell is classified
/// against its header and either numeric-normalized or kept as raw text.
/// Rows shorter than the header are skipped, surplus cells are dropped, and
/// subtotal/placeholder rows are filtered out.
pub fn extract_table(table: ElementRef<'_>, endpoint: &str, rules: &ClassifierRules) -> Vec<Record> {
    let row_sel = Selector::parse("tr").expect("invalid row selector");
    let cell_sel = Selector::parse("th, td").expect("invalid cell selector");

    let rows: Vec<ElementRef> = table.select(&row_sel).collect();

    let mut headers: Vec<String> = Vec::new();
    let mut header_row = 0;
    for (idx, row) in rows.iter().take(2).enumerate() {
        let candidate: Vec<String> = row
            .select(&cell_sel)
            .map(cell_text)
            .filter(|text| !text.is_empty())
            .collect();
        if candidate.len() > headers.len() {
            headers = candidate;
            header_row = idx;
        }
    }
    if headers.is_empty() {
        return Vec::new();
    }
    trace!(endpoint, columns = headers.len(), "table headers detected");

    let mut records = Vec::new();
    for row in rows.iter().skip(header_row + 1) {
        let cells: Vec<String> = row.select(&cell_sel).map(cell_text).collect();
        if cells.len() < headers.len() {
            continue;
        }

        let mut record = Record::new(endpoint);
        for (header, text) in headers.iter().zip(&cells) {
            let value = if rules.is_numeric_column(header, text) {
                normalize(text)
            } else {
                CellValue::Text(text.clone())
            };
            record.fields.push((header.clone(), value));
        }

        if has_meaningful_data(&record, &headers) {
            records.push(record);
        }
    }
    records
}

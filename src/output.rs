// src/output.rs

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog;
use crate::extract::{CellValue, Record};
use crate::scrape::Aggregate;

/// Fixed lead columns prepended to every flattened row.
static LEAD_COLUMNS: &[&str] = &["naics_code", "industry_name", "data_source", "scrape_date"];

fn cell_to_string(value: &CellValue) -> String {
    match value {
        CellValue::Int(n) => n.to_string(),
        CellValue::Float(f) => f.to_string(),
        CellValue::Text(s) => s.clone(),
    }
}

/// Write the aggregate as `{base}.json` (full nested form) and `{base}.csv`
/// (one row per (code, endpoint, record) triple). The CSV column set is the
/// union of every header any source table happened to have, in order of first
/// appearance; absent keys are left empty. Rows follow catalogue order, then
/// endpoint order, then record order. Returns the flattened row count.
pub fn save_dataset(
    aggregate: &Aggregate,
    catalogue: &[(&str, &str)],
    out_dir: impl AsRef<Path>,
    base_name: &str,
) -> Result<usize> {
    let out_dir = out_dir.as_ref();
    info!("saving comprehensive dataset");

    let json_path = out_dir.join(format!("{base_name}.json"));
    let contents = serde_json::to_string_pretty(aggregate)?;
    fs::write(&json_path, contents)
        .with_context(|| format!("writing {}", json_path.display()))?;

    // flatten in catalogue order, then endpoint order, then record order
    let mut rows: Vec<(&str, &str, &str, &str, &Record)> = Vec::new();
    for &(code, _) in catalogue {
        let Some(industry) = aggregate.get(code) else {
            continue;
        };
        let meta = &industry.metadata;
        for &(endpoint, _) in catalog::ENDPOINTS {
            let Some(ep) = industry.endpoints.get(endpoint) else {
                continue;
            };
            for record in &ep.data {
                rows.push((
                    &meta.naics_code,
                    &meta.industry_name,
                    endpoint,
                    &meta.scrape_date,
                    record,
                ));
            }
        }
    }

    // union of observed record keys, first appearance wins the position
    let mut columns: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for (_, _, _, _, record) in &rows {
        if seen.insert("endpoint") {
            columns.push("endpoint".to_string());
        }
        for (name, _) in &record.fields {
            if seen.insert(name.as_str()) {
                columns.push(name.clone());
            }
        }
    }

    if !rows.is_empty() {
        let csv_path = out_dir.join(format!("{base_name}.csv"));
        let mut writer = csv::Writer::from_path(&csv_path)
            .with_context(|| format!("creating {}", csv_path.display()))?;

        let header: Vec<&str> = LEAD_COLUMNS
            .iter()
            .copied()
            .chain(columns.iter().map(String::as_str))
            .collect();
        writer.write_record(&header)?;

        for (code, name, endpoint, date, record) in &rows {
            let mut row: Vec<String> = vec![
                code.to_string(),
                name.to_string(),
                endpoint.to_string(),
                date.to_string(),
            ];
            for column in &columns {
                let value = if column.as_str() == "endpoint" {
                    record.endpoint.clone()
                } else {
                    record.get(column).map(cell_to_string).unwrap_or_default()
                };
                row.push(value);
            }
            writer.write_record(&row)?;
        }
        writer.flush()?;

        info!("saved {} total records", rows.len());
        info!("files: {}, {}", json_path.display(), csv_path.display());
    } else {
        info!("no records to flatten; wrote {} only", json_path.display());
    }

    Ok(rows.len())
}

/// Derived summary of a finished run.
#[derive(Debug)]
pub struct ScrapeReport {
    pub industry_count: usize,
    pub total_records: usize,
    /// How many industries yielded data from each endpoint, by endpoint name.
    pub endpoint_coverage: Vec<(String, usize)>,
    /// Top 10 industries by record count, descending; ties keep catalogue
    /// order.
    pub top_industries: Vec<(String, String, usize)>,
}

pub fn build_report(aggregate: &Aggregate, catalogue: &[(&str, &str)]) -> ScrapeReport {
    let total_records = aggregate.values().map(|ind| ind.total_records()).sum();

    let mut coverage: BTreeMap<String, usize> = BTreeMap::new();
    for industry in aggregate.values() {
        for endpoint in industry.endpoints.keys() {
            *coverage.entry(endpoint.clone()).or_insert(0) += 1;
        }
    }
    // BTreeMap iteration gives the by-name ordering the report wants
    let endpoint_coverage: Vec<(String, usize)> = coverage.into_iter().collect();

    let mut ranked: Vec<(String, String, usize)> = catalogue
        .iter()
        .filter_map(|&(code, _)| {
            aggregate.get(code).map(|industry| {
                (
                    code.to_string(),
                    industry.metadata.industry_name.clone(),
                    industry.total_records(),
                )
            })
        })
        .collect();
    // stable sort: equal counts stay in catalogue order
    ranked.sort_by(|a, b| b.2.cmp(&a.2));
    ranked.truncate(10);

    ScrapeReport {
        industry_count: aggregate.len(),
        total_records,
        endpoint_coverage,
        top_industries: ranked,
    }
}

impl fmt::Display for ScrapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(100);
        writeln!(f, "{rule}")?;
        writeln!(f, "COMPLETE CANADIAN INDUSTRY STATISTICS EXTRACTION REPORT")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "SUMMARY:")?;
        writeln!(f, "   Total Industries Scraped: {}", self.industry_count)?;
        writeln!(f, "   Total Records Extracted: {}", self.total_records)?;
        writeln!(
            f,
            "   Coverage: All available NAICS codes (2-digit to 5-digit)"
        )?;
        writeln!(f, "\nDATA SOURCES:")?;
        for (endpoint, count) in &self.endpoint_coverage {
            writeln!(f, "   {endpoint}: {count} industries")?;
        }
        writeln!(f, "\nTOP INDUSTRIES BY DATA VOLUME:")?;
        for (code, name, count) in &self.top_industries {
            let name: String = name.chars().take(60).collect();
            writeln!(f, "   {code:>8} - {name:<60} ({count} records)")?;
        }
        writeln!(f, "{rule}")?;
        write!(f, "EXTRACTION COMPLETE")
    }
}

// src/fetch.rs

use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use scraper::{Html, Selector};
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::catalog;
use crate::extract::classify::ClassifierRules;
use crate::extract::table::extract_table;
use crate::extract::Record;

/// Browser-like identification sent with every request; the portal serves
/// different markup to unknown agents.
pub static USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Identity of one scraped industry plus when it was scraped.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryMetadata {
    pub naics_code: String,
    pub industry_name: String,
    pub scrape_date: String,
}

/// Everything one endpoint yielded for one code. Never constructed empty:
/// an endpoint with zero records is simply absent from the industry's map.
#[derive(Debug, Serialize)]
pub struct EndpointResult {
    pub url: String,
    pub tables_count: usize,
    pub data: Vec<Record>,
    pub records_count: usize,
}

/// Per-industry scrape result: metadata plus a map from endpoint name to its
/// result. Exists only when at least one endpoint produced records.
#[derive(Debug, Serialize)]
pub struct IndustryResult {
    pub metadata: IndustryMetadata,
    pub endpoints: BTreeMap<String, EndpointResult>,
}

impl IndustryResult {
    pub fn total_records(&self) -> usize {
        self.endpoints.values().map(|ep| ep.records_count).sum()
    }
}

/// Boundary to the portal: fetch one URL and hand back the parsed document.
/// Implementations must swallow transient failures (network errors,
/// non-success statuses) and report them as `None`.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Option<Html>;
}

/// `PageSource` backed by a blocking `reqwest` client with the browser-like
/// User-Agent installed.
pub struct HttpPageSource {
    client: reqwest::blocking::Client,
}

impl HttpPageSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()
            .context("building HTTP client")?;
        Ok(HttpPageSource { client })
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &str) -> Option<Html> {
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text());
        match body {
            Ok(html) => Some(Html::parse_document(&html)),
            Err(err) => {
                debug!(url, %err, "could not access page");
                None
            }
        }
    }
}

/// Fetches all endpoint reports for single industries, extracting every table
/// found on each page.
pub struct IndustryFetcher<'a, S> {
    source: &'a S,
    base_url: Url,
    rules: ClassifierRules,
    endpoint_delay: Duration,
}

impl<'a, S: PageSource> IndustryFetcher<'a, S> {
    pub fn new(source: &'a S, base_url: &str, endpoint_delay: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid base URL {base_url}"))?;
        Ok(IndustryFetcher {
            source,
            base_url,
            rules: ClassifierRules::default(),
            endpoint_delay,
        })
    }

    pub fn with_rules(mut self, rules: ClassifierRules) -> Self {
        self.rules = rules;
        self
    }

    /// Scrape all five endpoints for one NAICS code. Endpoints that fail to
    /// fetch or yield no records are left out of the result; `Ok(None)` means
    /// the whole industry produced nothing (not an error). The endpoint
    /// pacing delay applies after every request regardless of outcome.
    pub fn fetch_industry(&self, code: &str, name: &str) -> Result<Option<IndustryResult>> {
        info!("scraping {name} ({code})");

        let table_sel = Selector::parse("table").expect("invalid table selector");
        let scrape_date = Utc::now().to_rfc3339();
        let mut endpoints = BTreeMap::new();

        for &(endpoint, path) in catalog::ENDPOINTS {
            let url = Url::parse(&format!("{}/{}/{}", self.base_url, path, code))
                .with_context(|| format!("building {endpoint} URL for code {code}"))?;

            if let Some(page) = self.source.fetch(url.as_str()) {
                let tables: Vec<_> = page.select(&table_sel).collect();
                let tables_count = tables.len();

                let mut data: Vec<Record> = Vec::new();
                for table in tables {
                    data.extend(extract_table(table, endpoint, &self.rules));
                }

                if !data.is_empty() {
                    info!("  {endpoint}: {} records", data.len());
                    endpoints.insert(
                        endpoint.to_string(),
                        EndpointResult {
                            url: url.to_string(),
                            tables_count,
                            records_count: data.len(),
                            data,
                        },
                    );
                }
            }

            thread::sleep(self.endpoint_delay);
        }

        if endpoints.is_empty() {
            info!("  no data found for {code}");
            return Ok(None);
        }

        let result = IndustryResult {
            metadata: IndustryMetadata {
                naics_code: code.to_string(),
                industry_name: name.to_string(),
                scrape_date,
            },
            endpoints,
        };
        info!(
            "  total: {} endpoints, {} records",
            result.endpoints.len(),
            result.total_records()
        );
        Ok(Some(result))
    }
}

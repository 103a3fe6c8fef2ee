// src/scrape.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::catalog;
use crate::fetch::{IndustryFetcher, IndustryResult, PageSource};
use crate::progress::ProgressState;

/// The full scrape result: NAICS code to per-industry data. A code appears at
/// most once; codes that yielded nothing are absent.
pub type Aggregate = BTreeMap<String, IndustryResult>;

/// Courtesy delays toward the remote service. These are rate limits, not
/// synchronization; tests zero them out.
#[derive(Debug, Clone)]
pub struct Pacing {
    pub endpoint: Duration,
    pub code: Duration,
    pub batch: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            endpoint: Duration::from_millis(500),
            code: Duration::from_secs(1),
            batch: Duration::from_secs(10),
        }
    }
}

impl Pacing {
    pub fn none() -> Self {
        Pacing {
            endpoint: Duration::ZERO,
            code: Duration::ZERO,
            batch: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub batch_size: usize,
    /// Catalogue offset to start from; a resuming caller passes the
    /// `processed` count of the prior run's progress file.
    pub start_from: usize,
    pub out_dir: PathBuf,
    pub pacing: Pacing,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            batch_size: 10,
            start_from: 0,
            out_dir: PathBuf::from("."),
            pacing: Pacing::default(),
        }
    }
}

/// Walks the code catalogue in batches, fetching each industry in turn and
/// persisting a snapshot plus progress accounting after every batch. One
/// code's failure never aborts the run.
pub struct BatchScraper<'a, S> {
    source: &'a S,
    catalogue: &'a [(&'a str, &'a str)],
    config: ScrapeConfig,
}

impl<'a, S: PageSource> BatchScraper<'a, S> {
    pub fn new(source: &'a S, config: ScrapeConfig) -> Self {
        BatchScraper {
            source,
            catalogue: catalog::NAICS_CODES,
            config,
        }
    }

    /// Same scraper over a caller-supplied catalogue slice (tests, partial
    /// runs).
    pub fn with_catalogue(
        source: &'a S,
        catalogue: &'a [(&'a str, &'a str)],
        config: ScrapeConfig,
    ) -> Self {
        BatchScraper {
            source,
            catalogue,
            config,
        }
    }

    pub fn run(&self) -> Result<Aggregate> {
        let fetcher =
            IndustryFetcher::new(self.source, catalog::BASE_URL, self.config.pacing.endpoint)?;

        let total = self.catalogue.len();
        let start_from = self.config.start_from.min(total);
        let remaining = &self.catalogue[start_from..];

        info!("starting comprehensive scrape of {} industries", remaining.len());
        info!("processing in batches of {}", self.config.batch_size);
        fs::create_dir_all(&self.config.out_dir).with_context(|| {
            format!("creating output directory {}", self.config.out_dir.display())
        })?;

        let mut aggregate = Aggregate::new();
        let mut processed = 0usize;
        let mut successful = 0usize;

        let batches: Vec<&[(&str, &str)]> = remaining.chunks(self.config.batch_size).collect();
        let batch_count = batches.len();

        for (idx, batch) in batches.iter().enumerate() {
            let batch_no = idx + 1;
            info!(
                "batch {batch_no}: processing codes {}-{}",
                start_from + processed + 1,
                (start_from + processed + batch.len()).min(total)
            );

            for &(code, name) in batch.iter() {
                match fetcher.fetch_industry(code, name) {
                    Ok(Some(industry)) => {
                        aggregate.insert(code.to_string(), industry);
                        successful += 1;
                    }
                    Ok(None) => {}
                    Err(err) => {
                        error!("error processing {code}: {err:#}");
                    }
                }
                processed += 1;

                if processed % 5 == 0 {
                    info!(
                        "progress: {processed}/{} ({:.1}% success rate)",
                        remaining.len(),
                        success_rate(successful, processed)
                    );
                }

                thread::sleep(self.config.pacing.code);
            }

            self.write_snapshot(&aggregate, batch_no)?;
            ProgressState {
                processed: start_from + processed,
                successful,
                total,
                last_batch: batch_no,
                success_rate: success_rate(successful, processed),
            }
            .save(&self.config.out_dir)?;
            info!("batch {batch_no} complete, progress saved");

            if batch_no < batch_count {
                info!("resting {:?} before next batch", self.config.pacing.batch);
                thread::sleep(self.config.pacing.batch);
            }
        }

        info!("complete: {successful}/{processed} industries successfully scraped");
        Ok(aggregate)
    }

    /// Full overwrite of the accumulated aggregate so far, one file per batch.
    fn write_snapshot(&self, aggregate: &Aggregate, batch_no: usize) -> Result<()> {
        let path = self
            .config
            .out_dir
            .join(format!("batch_{batch_no}_data.json"));
        let contents = serde_json::to_string_pretty(aggregate)?;
        fs::write(&path, contents)
            .with_context(|| format!("writing snapshot {}", path.display()))
    }
}

fn success_rate(successful: usize, processed: usize) -> f64 {
    if processed == 0 {
        0.0
    } else {
        successful as f64 / processed as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::tests::StubSource;
    use crate::progress::ProgressState;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn table_page(name: &str) -> String {
        format!(
            r#"<table>
                <tr><th>Province</th><th>Businesses</th></tr>
                <tr><td>{name}</td><td>1,000</td></tr>
            </table>"#
        )
    }

    fn source_for(codes: &[&str]) -> StubSource {
        let mut pages = HashMap::new();
        for code in codes {
            pages.insert(
                format!("{}/businesses-entreprises/{code}", catalog::BASE_URL),
                table_page("Ontario"),
            );
        }
        StubSource { pages }
    }

    fn config(dir: &std::path::Path, batch_size: usize, start_from: usize) -> ScrapeConfig {
        ScrapeConfig {
            batch_size,
            start_from,
            out_dir: dir.to_path_buf(),
            pacing: Pacing::none(),
        }
    }

    static CATALOGUE: &[(&str, &str)] = &[
        ("11", "Agriculture"),
        ("21", "Mining"),
        ("22", "Utilities"),
    ];

    #[test]
    fn resume_offset_skips_already_attempted_codes() {
        let dir = tempdir().unwrap();
        let source = source_for(&["11", "21", "22"]);

        let scraper =
            BatchScraper::with_catalogue(&source, CATALOGUE, config(dir.path(), 10, 1));
        let aggregate = scraper.run().unwrap();

        // "11" has a page, but sits before the resume offset
        assert!(!aggregate.contains_key("11"));
        assert!(aggregate.contains_key("21"));
        assert!(aggregate.contains_key("22"));

        let progress = ProgressState::load(dir.path()).unwrap().unwrap();
        assert_eq!(progress.processed, 3); // offset + 2 attempted
        assert_eq!(progress.successful, 2);
        assert_eq!(progress.total, 3);
    }

    #[test]
    fn offset_zero_attempts_everything() {
        let dir = tempdir().unwrap();
        let source = source_for(&["11", "21", "22"]);

        let scraper =
            BatchScraper::with_catalogue(&source, CATALOGUE, config(dir.path(), 10, 0));
        let aggregate = scraper.run().unwrap();
        assert_eq!(aggregate.len(), 3);

        let progress = ProgressState::load(dir.path()).unwrap().unwrap();
        assert_eq!(progress.processed, 3);
        assert_eq!(progress.successful, 3);
        assert_eq!(progress.last_batch, 1);
        assert!((progress.success_rate - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn codes_without_data_count_as_unsuccessful() {
        let dir = tempdir().unwrap();
        // only the middle code has any pages
        let source = source_for(&["21"]);

        let scraper =
            BatchScraper::with_catalogue(&source, CATALOGUE, config(dir.path(), 10, 0));
        let aggregate = scraper.run().unwrap();

        assert_eq!(aggregate.len(), 1);
        let progress = ProgressState::load(dir.path()).unwrap().unwrap();
        assert_eq!(progress.processed, 3);
        assert_eq!(progress.successful, 1);
    }

    #[test]
    fn one_snapshot_per_batch_with_growing_aggregate() {
        let dir = tempdir().unwrap();
        let source = source_for(&["11", "21", "22"]);

        let scraper =
            BatchScraper::with_catalogue(&source, CATALOGUE, config(dir.path(), 2, 0));
        scraper.run().unwrap();

        let first: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("batch_1_data.json")).unwrap(),
        )
        .unwrap();
        let second: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("batch_2_data.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(first.as_object().unwrap().len(), 2);
        assert_eq!(second.as_object().unwrap().len(), 3);

        let progress = ProgressState::load(dir.path()).unwrap().unwrap();
        assert_eq!(progress.last_batch, 2);
    }
}

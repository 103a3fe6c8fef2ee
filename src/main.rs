use anyhow::Result;
use cisscraper::{
    catalog,
    fetch::HttpPageSource,
    output,
    progress::ProgressState,
    scrape::{BatchScraper, Pacing, ScrapeConfig},
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) resume prompt ────────────────────────────────────────────
    let out_dir = PathBuf::from(".");
    let start_from = match ProgressState::load(&out_dir)? {
        Some(progress) if prompt_resume(progress.processed)? => progress.processed,
        _ => 0,
    };

    println!("Starting comprehensive scrape of ALL Canadian industries");
    println!(
        "Total industries to process: {}",
        catalog::NAICS_CODES.len()
    );

    // ─── 3) run the batched scrape ───────────────────────────────────
    let source = HttpPageSource::new()?;
    let config = ScrapeConfig {
        batch_size: 5,
        start_from,
        out_dir: out_dir.clone(),
        pacing: Pacing::default(),
    };
    let aggregate = BatchScraper::new(&source, config).run()?;

    if aggregate.is_empty() {
        println!("No data was scraped.");
        return Ok(());
    }

    // ─── 4) persist dataset + final report ───────────────────────────
    let record_count = output::save_dataset(
        &aggregate,
        catalog::NAICS_CODES,
        &out_dir,
        "all_canadian_industries",
    )?;
    println!("{}", output::build_report(&aggregate, catalog::NAICS_CODES));
    println!(
        "\nSUCCESS: scraped {} industries with {} total records",
        aggregate.len(),
        record_count
    );
    Ok(())
}

/// Ask whether to pick up where the previous run's progress file left off.
/// Declining restarts from the top of the catalogue without clearing any
/// previously written snapshots.
fn prompt_resume(processed: usize) -> Result<bool> {
    print!("Resume from industry {processed}? (y/n): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

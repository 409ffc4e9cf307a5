//! Match scanner: reads one scan request per stdin line and writes one JSON
//! response per line to stdout. Logs go to stderr.

mod config;
mod scan;

use anyhow::{Context, Result};
use dotenv::dotenv;
use std::io::{self, BufRead, BufWriter, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use matchup_rust_core::MatchEngine;

use crate::config::Config;

fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("Starting match scanner...");

    let config = Config::from_env().context("Failed to read configuration")?;

    if let Some(threads) = config.parallelism {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure rayon thread pool")?;
        info!("Using {} worker threads", threads);
    }

    let match_config = config.match_config()?;
    let engine = MatchEngine::new(&match_config).context("Invalid match configuration")?;

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut processed = 0usize;
    let mut skipped = 0usize;

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match scan::scan_line(&engine, &line) {
            Ok(response) => {
                serde_json::to_writer(&mut out, &response).context("Failed to write response")?;
                out.write_all(b"\n")?;
                out.flush()?;
                processed += 1;
            }
            Err(e) => {
                warn!("Skipping line {}: {}", line_no + 1, e);
                skipped += 1;
            }
        }
    }

    info!("Done: {} requests processed, {} skipped", processed, skipped);
    Ok(())
}

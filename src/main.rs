//! Merge translation fragments into per-locale messages files.
//!
//! Usage:
//!   cargo run                 # Bootstrap, merge and write output files
//!   cargo run -- --check      # Validate and merge without writing anything
//!
//! Optional environment variables:
//! - I18N_SOURCE_ROOT (defaults to src)
//! - I18N_OUTPUT_DIR (defaults to src/messages)
//! - I18N_CHECK (1 or true, same as --check)

use anyhow::{Context, Result};
use i18n_merge::{config::Config, merge};
use std::time::Instant;
use tracing::{debug, info};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("i18n_merge=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let check = args.iter().any(|arg| arg == "--check");

    let config = Config::from_env();
    let config = if check {
        config.with_check_only(true)
    } else {
        config
    };

    info!(
        source = %config.source_root.display(),
        output = %config.output_dir.display(),
        check_only = config.check_only,
        "Merging translation fragments"
    );

    let started = Instant::now();
    let summary = merge::run(&config).context("Translation merge failed")?;

    info!(
        "✓ Merged {} fragments from {} directories in {:.2?}",
        summary.fragments,
        summary.fragment_dirs,
        started.elapsed()
    );
    debug!(summary = %serde_json::to_string(&summary)?, "Run summary");

    Ok(())
}

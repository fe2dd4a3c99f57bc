//! The merge pipeline: bootstrap, walk and absorb, finalize.

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::{MergeError, MergeResult};
use crate::fragment;
use crate::i18n::Locale;
use crate::output;
use crate::walker;

/// Per-locale result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSummary {
    pub locale: String,
    pub namespaces: usize,
    pub output_path: PathBuf,
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    /// One entry per registered locale, in registry order
    pub locales: Vec<LocaleSummary>,
    pub fragment_dirs: usize,
    pub fragments: usize,
    /// Whether output files were written (false in check-only mode)
    pub written: bool,
}

/// Walk `config.source_root` and merge every fragment into an aggregator.
///
/// Fails on the first filesystem, shape or duplicate error.
pub fn collect(config: &Config) -> MergeResult<(Aggregator, usize)> {
    let mut aggregator = Aggregator::new();
    let dirs = walker::find_fragment_dirs(&config.source_root)?;
    let locales = Locale::all();

    for dir in &dirs {
        for &locale in &locales {
            if let Some(fragment) = fragment::load(dir, locale)? {
                aggregator.absorb(fragment)?;
            }
        }
    }

    Ok((aggregator, dirs.len()))
}

/// Run one full merge.
///
/// Output files are bootstrapped before the walk and overwritten only after
/// the whole tree merged without error. In check-only mode nothing is
/// written at all.
///
/// # Errors
///
/// Returns the first `MergeError` hit. No output file is finalized when
/// this returns an error.
pub fn run(config: &Config) -> MergeResult<MergeSummary> {
    if !config.source_root.is_dir() {
        return Err(MergeError::SourceRootMissing {
            path: config.source_root.clone(),
        });
    }

    if !config.check_only {
        let created = output::bootstrap(&config.output_dir)?;
        debug!(created = created.len(), "Bootstrap complete");
    }

    let (aggregator, fragment_dirs) = collect(config)?;
    let fragments = aggregator.absorbed();
    let merged = aggregator.into_messages();

    if !config.check_only {
        output::finalize(&config.output_dir, &merged)?;
    }

    let locales = merged
        .iter()
        .map(|(locale, messages)| {
            let output_path = output::output_path(&config.output_dir, *locale);
            info!(
                locale = %locale,
                namespaces = messages.len(),
                path = %output_path.display(),
                "{} {} messages",
                if config.check_only { "Checked" } else { "Wrote" },
                locale.name(),
            );
            LocaleSummary {
                locale: locale.code().to_string(),
                namespaces: messages.len(),
                output_path,
            }
        })
        .collect();

    Ok(MergeSummary {
        locales,
        fragment_dirs,
        fragments,
        written: !config.check_only,
    })
}

//! Output files: bootstrap before the walk, finalize after it.
//!
//! Bootstrap only ever creates missing files. Finalize is the only step that
//! replaces existing content, and the pipeline calls it only once the whole
//! tree has merged cleanly.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::aggregator::Messages;
use crate::error::{MergeError, MergeResult};
use crate::i18n::Locale;

/// Content written to a freshly bootstrapped output file.
const EMPTY_MESSAGES: &str = "{}\n";

/// Path of the merged output file for `locale`.
pub fn output_path(output_dir: &Path, locale: Locale) -> PathBuf {
    output_dir.join(locale.file_name())
}

/// Make sure the output directory and one file per registered locale exist.
///
/// Existing files are left untouched, neither read nor truncated.
///
/// # Returns
/// The paths that were created by this call.
///
/// # Errors
///
/// Fails if the directory cannot be created, or if a missing file cannot
/// be created exclusively (including losing a creation race).
pub fn bootstrap(output_dir: &Path) -> MergeResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|e| MergeError::io(output_dir, e))?;

    let mut created = Vec::new();
    for locale in Locale::all() {
        let path = output_path(output_dir, locale);
        if path.exists() {
            continue;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| MergeError::io(&path, e))?;
        file.write_all(EMPTY_MESSAGES.as_bytes())
            .map_err(|e| MergeError::io(&path, e))?;

        debug!(path = %path.display(), %locale, "Bootstrapped output file");
        created.push(path);
    }

    Ok(created)
}

/// Serialize a merged mapping the way it is written to disk.
pub fn render(locale: Locale, messages: &Messages) -> MergeResult<String> {
    let mut json = serde_json::to_string_pretty(messages)
        .map_err(|source| MergeError::Serialize { locale, source })?;
    json.push('\n');
    Ok(json)
}

/// Overwrite every locale's output file with its merged mapping.
///
/// All documents are rendered before the first write, so a serialization
/// failure leaves every file as it was.
pub fn finalize(output_dir: &Path, merged: &[(Locale, Messages)]) -> MergeResult<Vec<PathBuf>> {
    let rendered = merged
        .iter()
        .map(|(locale, messages)| -> MergeResult<(PathBuf, String)> {
            Ok((output_path(output_dir, *locale), render(*locale, messages)?))
        })
        .collect::<MergeResult<Vec<_>>>()?;

    let mut written = Vec::with_capacity(rendered.len());
    for (path, json) in rendered {
        fs::write(&path, json).map_err(|e| MergeError::io(&path, e))?;
        written.push(path);
    }

    Ok(written)
}

//! Depth-first discovery of fragment directories.
//!
//! A fragment directory is any directory literally named `i18n`. Once found
//! it is handed to the visitor and not descended into. Symbolic links are
//! followed; a link that does not resolve aborts the walk. Each physical
//! directory is entered at most once, keyed by its canonical path, so link
//! cycles end the recursion instead of looping.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{MergeError, MergeResult};

/// Reserved directory name marking a fragment directory.
pub const FRAGMENT_DIR_NAME: &str = "i18n";

/// Walk `root` depth-first, calling `visit` for every fragment directory.
///
/// The root itself is never treated as a fragment directory, only entries
/// below it. Visiting stops at the first error, whether it comes from the
/// filesystem or from `visit`.
///
/// # Errors
///
/// Returns `MergeError::Io` if any directory or entry cannot be read, or if
/// a symbolic link is dangling.
pub fn walk<F>(root: &Path, visit: &mut F) -> MergeResult<()>
where
    F: FnMut(&Path) -> MergeResult<()>,
{
    let mut seen = HashSet::new();
    seen.insert(fs::canonicalize(root).map_err(|e| MergeError::io(root, e))?);
    walk_dir(root, &mut seen, visit)
}

fn walk_dir<F>(dir: &Path, seen: &mut HashSet<PathBuf>, visit: &mut F) -> MergeResult<()>
where
    F: FnMut(&Path) -> MergeResult<()>,
{
    let entries = fs::read_dir(dir).map_err(|e| MergeError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| MergeError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| MergeError::io(&path, e))?;

        let is_dir = if file_type.is_symlink() {
            fs::metadata(&path)
                .map_err(|e| MergeError::io(&path, e))?
                .is_dir()
        } else {
            file_type.is_dir()
        };

        if !is_dir {
            continue;
        }

        let canonical = fs::canonicalize(&path).map_err(|e| MergeError::io(&path, e))?;
        if !seen.insert(canonical) {
            debug!(path = %path.display(), "Directory already walked, skipping");
            continue;
        }

        if entry.file_name() == FRAGMENT_DIR_NAME {
            debug!(path = %path.display(), "Found fragment directory");
            visit(&path)?;
        } else {
            walk_dir(&path, seen, visit)?;
        }
    }

    Ok(())
}

/// Collect every fragment directory under `root`.
pub fn find_fragment_dirs(root: &Path) -> MergeResult<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(root, &mut |dir: &Path| {
        found.push(dir.to_path_buf());
        Ok(())
    })?;
    Ok(found)
}

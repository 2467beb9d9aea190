//! File system traversal for `rucat`.
//!
//! This module handles:
//! - Recursive directory traversal using `WalkDir`
//! - Filtering the walk down to regular files (directories are never emitted)
//! - Skipping one path by identity, used to keep the output file out of its own input
//!
//! The walk is depth-first and sorted by file name inside each directory, so a
//! static tree always yields the same sequence. Directories are listed lazily,
//! which is why the caller has to name the output path it wants skipped.

use crate::data::FileEntry;
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Returns an iterator over every regular file reachable from `root`.
///
/// # Arguments
/// * `root` - The directory to walk
/// * `skip` - A canonical path that is never yielded, whether reached directly or
///   through a symlink
///
/// # Behavior
/// * Symlinks are not followed into directories
/// * A symlink whose target is a regular file is yielded like a regular file
/// * A dangling symlink is skipped; any other failure to resolve a symlink is an error
/// * Sockets, FIFOs and device nodes are skipped
///
/// # Errors
/// Yields an error when a directory cannot be listed or an entry cannot be
/// inspected. The iterator does not stop on its own; the caller decides whether
/// to abort.
pub fn walk_files<'a>(
    root: &Path,
    skip: Option<&'a Path>,
) -> impl Iterator<Item = Result<FileEntry>> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |res| {
            let entry = match res {
                Ok(entry) => entry,
                Err(err) => return Some(Err(walk_error(err))),
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                return None;
            }

            if file_type.is_symlink() {
                match fs::metadata(entry.path()) {
                    Ok(meta) if meta.is_file() => {}
                    Ok(_) => return None,
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {
                        debug!(path = %entry.path().display(), "skipping dangling symlink");
                        return None;
                    }
                    Err(err) => return Some(Err(inspect_error(entry.path(), err))),
                }

                if let Some(skip) = skip {
                    match fs::canonicalize(entry.path()) {
                        Ok(target) if target == skip => {
                            debug!(path = %entry.path().display(), "skipping link to output file");
                            return None;
                        }
                        Ok(_) => {}
                        Err(err) => return Some(Err(inspect_error(entry.path(), err))),
                    }
                }
            } else if !file_type.is_file() {
                debug!(path = %entry.path().display(), "skipping special file");
                return None;
            } else if skip.is_some_and(|s| s == entry.path()) {
                debug!(path = %entry.path().display(), "skipping output file");
                return None;
            }

            Some(Ok(FileEntry::from_path(entry.into_path())))
        })
}

/// Collects the whole walk, stopping at the first error.
pub fn collect_files(root: &Path, skip: Option<&Path>) -> Result<Vec<FileEntry>> {
    walk_files(root, skip).collect()
}

fn inspect_error(path: &Path, err: io::Error) -> anyhow::Error {
    anyhow::Error::from(err).context(format!("Failed to inspect {}", path.display()))
}

fn walk_error(err: walkdir::Error) -> anyhow::Error {
    let path = err
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown>".to_string());
    if err.loop_ancestor().is_some() {
        return anyhow!("Filesystem loop detected at {}", path);
    }
    anyhow::Error::from(err).context(format!("Failed to list {}", path))
}

/// Verifies that `root` exists and is a directory before a run touches the output.
pub fn check_root(root: &Path) -> Result<()> {
    let meta = fs::metadata(root)
        .with_context(|| format!("Cannot access root directory {}", root.display()))?;
    if !meta.is_dir() {
        return Err(anyhow!("Root path {} is not a directory", root.display()));
    }
    Ok(())
}

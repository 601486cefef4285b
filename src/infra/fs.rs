//! Directory scanning for markdown files.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Errors that prevent a directory scan from starting.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not found: {path}")]
    NotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("cannot walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Scans a directory recursively for markdown files.
///
/// A file qualifies when its name ends in `.md`, compared case-insensitively.
/// Entries below the root that cannot be read are skipped, so one unreadable
/// subtree does not hide results from the rest of the tree. Entries are
/// visited in file-name order.
///
/// Returned paths are the root joined with the relative path, with a leading
/// `./` dropped.
///
/// # Errors
///
/// Returns `ScanError::NotFound` if the root doesn't exist.
/// Returns `ScanError::NotADirectory` if the root is not a directory.
/// Returns `ScanError::Walk` if the root itself cannot be read.
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::NotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(ScanError::Walk {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if is_regular_file(&entry) && has_md_extension(&entry) {
            files.push(clean_path(entry.path()));
        }
    }

    Ok(files)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn has_md_extension(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .to_lowercase()
        .ends_with(".md")
}

fn clean_path(path: &Path) -> PathBuf {
    path.strip_prefix(".").unwrap_or(path).to_path_buf()
}

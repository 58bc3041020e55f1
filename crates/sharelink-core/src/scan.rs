//! Local filesystem access for the annotation pipeline
//!
//! Walking, reading and writing are synchronous: the tree is small relative to
//! the remote lookups, and files are processed strictly one at a time.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::AnnotateError;

/// Every regular file found under a root, plus the entries that could not be read
#[derive(Debug, Default)]
pub struct DirectoryListing {
    /// Regular files, sorted by name within each directory
    pub files: Vec<PathBuf>,
    /// Nested entries that could not be enumerated
    pub errors: Vec<AnnotateError>,
}

/// Recursively lists every regular file under `root`
///
/// Directories are descended into but never returned. Symlinks are skipped
/// unless `follow_links` is set, in which case their targets are listed.
///
/// # Errors
/// Returns [`AnnotateError::FileSystem`] if `root` does not exist or cannot be
/// read. Failures deeper in the tree are collected in
/// [`DirectoryListing::errors`] instead.
pub fn walk_files(root: &Path, follow_links: bool) -> Result<DirectoryListing, AnnotateError> {
    std::fs::metadata(root).map_err(|err| AnnotateError::file_system(root, err))?;

    let mut listing = DirectoryListing::default();

    for entry in WalkDir::new(root)
        .follow_links(follow_links)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    listing.files.push(entry.into_path());
                }
            }
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                if err.depth() == 0 {
                    return Err(AnnotateError::file_system(&path, err));
                }
                warn!(path = %path.display(), error = %err, "Skipping unreadable entry");
                listing.errors.push(AnnotateError::file_system(&path, err));
            }
        }
    }

    debug!(
        root = %root.display(),
        files = listing.files.len(),
        errors = listing.errors.len(),
        "Directory walk complete"
    );
    Ok(listing)
}

/// Reads a file as UTF-8 text
///
/// Returns `Ok(None)` when the file is readable but not valid UTF-8
/// (images and other binary assets living next to the markup).
///
/// # Errors
/// Returns [`AnnotateError::Read`] if the file cannot be read
pub fn read_text(path: &Path) -> Result<Option<String>, AnnotateError> {
    let bytes = std::fs::read(path).map_err(|err| AnnotateError::read(path, err))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(Some(text)),
        Err(_) => {
            debug!(path = %path.display(), "Not UTF-8 text, skipping");
            Ok(None)
        }
    }
}

/// Replaces a file's content
///
/// # Errors
/// Returns [`AnnotateError::Write`] if the file cannot be written
pub fn write_text(path: &Path, content: &str) -> Result<(), AnnotateError> {
    std::fs::write(path, content).map_err(|err| AnnotateError::write(path, err))
}

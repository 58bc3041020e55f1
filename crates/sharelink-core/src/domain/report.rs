//! Run report for a directory annotation
//!
//! Collects what was found, resolved and rewritten, along with every failure
//! that was isolated along the way.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use super::errors::AnnotateError;
use super::newtypes::{ResolvedPath, SharedLinkId};

/// Mapping from shared link identifier to its drive-relative path
///
/// Built once after every file has been scanned, then only read.
pub type LinkMap = BTreeMap<SharedLinkId, ResolvedPath>;

/// Summary of a `resolve` or `annotate` run
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnnotateReport {
    /// Directory that was walked
    pub root: PathBuf,
    /// Whether file writes were suppressed
    pub dry_run: bool,
    /// Regular files found under the root
    pub files_scanned: usize,
    /// Files skipped because their content is not UTF-8 text
    pub files_skipped: usize,
    /// Distinct shared link identifiers found across all files
    pub identifiers_found: usize,
    /// Identifiers that resolved successfully
    pub resolved: LinkMap,
    /// Files whose content changed (written unless `dry_run`)
    pub rewritten: Vec<PathBuf>,
    /// Failures isolated to a single file or identifier
    pub failures: Vec<AnnotateError>,
}

impl AnnotateReport {
    /// Creates an empty report for the given root
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
            ..Default::default()
        }
    }

    /// Number of identifiers that resolved
    pub fn identifiers_resolved(&self) -> usize {
        self.resolved.len()
    }

    /// Number of files whose content changed
    pub fn files_rewritten(&self) -> usize {
        self.rewritten.len()
    }

    /// Returns true if no failure was recorded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line human summary, e.g. "resolved 2 of 3 identifiers, rewrote 1 of 5 files"
    pub fn summary(&self) -> String {
        let verb = if self.dry_run { "would rewrite" } else { "rewrote" };
        format!(
            "resolved {} of {} identifiers, {} {} of {} files",
            self.identifiers_resolved(),
            self.identifiers_found,
            verb,
            self.files_rewritten(),
            self.files_scanned
        )
    }
}

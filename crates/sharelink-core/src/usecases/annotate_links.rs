//! Annotate links use case
//!
//! Orchestrates the whole pipeline over a directory tree:
//!
//! 1. Walk the root and list every regular file
//! 2. Extract shared link identifiers from every text file (union, deduplicated)
//! 3. Resolve each identifier once, building the [`LinkMap`]
//! 4. Rewrite every file with the completed map, persisting only changed files
//!
//! Step 3 finishes before step 4 starts, so an identifier appearing in several
//! files is rewritten identically everywhere. Failures are isolated per file and
//! per identifier and collected into the [`AnnotateReport`]; only a root that
//! cannot be walked aborts the run.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::resolve_link::ResolveLinkUseCase;
use crate::{
    config::RunConfig,
    domain::{AnnotateError, AnnotateReport, LinkMap, SharedLinkId},
    links::{extract_shared_link_ids, rewrite_shared_links},
    ports::IShareProvider,
    scan::{read_text, walk_files, write_text},
};

/// Output of the walk and extraction steps
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Number of regular files found
    pub files_scanned: usize,
    /// Files that were read as UTF-8 text, in walk order
    pub text_files: Vec<PathBuf>,
    /// Files skipped because they are not UTF-8
    pub files_skipped: usize,
    /// Distinct identifiers across all text files
    pub identifiers: BTreeSet<SharedLinkId>,
    /// Walk and read failures
    pub failures: Vec<AnnotateError>,
}

/// Use case for resolving and embedding shared link paths across a tree
pub struct AnnotateLinksUseCase {
    resolver: ResolveLinkUseCase,
}

impl AnnotateLinksUseCase {
    /// Creates a new AnnotateLinksUseCase
    ///
    /// # Arguments
    ///
    /// * `share_provider` - Remote lookups used to resolve each identifier
    pub fn new(share_provider: Arc<dyn IShareProvider + Send + Sync>) -> Self {
        Self {
            resolver: ResolveLinkUseCase::new(share_provider),
        }
    }

    /// Walks the configured root and collects every shared link identifier
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError::FileSystem`] if the root cannot be walked.
    pub fn scan(&self, config: &RunConfig) -> Result<ScanOutcome, AnnotateError> {
        let listing = walk_files(&config.scan.root, config.scan.follow_links)?;

        let mut outcome = ScanOutcome {
            files_scanned: listing.files.len(),
            failures: listing.errors,
            ..Default::default()
        };

        for path in listing.files {
            match read_text(&path) {
                Ok(Some(content)) => {
                    let ids = extract_shared_link_ids(&content);
                    if !ids.is_empty() {
                        debug!(path = %path.display(), count = ids.len(), "Found shared links");
                    }
                    outcome.identifiers.extend(ids);
                    outcome.text_files.push(path);
                }
                Ok(None) => outcome.files_skipped += 1,
                Err(err) => {
                    warn!(error = %err, "Skipping file");
                    outcome.failures.push(err);
                }
            }
        }

        info!(
            files = outcome.files_scanned,
            identifiers = outcome.identifiers.len(),
            "Scan complete"
        );
        Ok(outcome)
    }

    /// Resolves every identifier, one request pair at a time
    ///
    /// Returns the identifiers that resolved and a failure for each one that
    /// did not. A failing identifier never stops the others.
    pub async fn resolve_all(
        &self,
        identifiers: &BTreeSet<SharedLinkId>,
    ) -> (LinkMap, Vec<AnnotateError>) {
        let mut links = LinkMap::new();
        let mut failures = Vec::new();

        for id in identifiers {
            match self.resolver.execute(id).await {
                Ok(path) => {
                    info!(share_id = %id, path = %path, "Resolved");
                    links.insert(id.clone(), path);
                }
                Err(err) => {
                    let reason = format!("{err:#}");
                    warn!(share_id = %id, error = %reason, "Resolution failed");
                    failures.push(AnnotateError::Resolution {
                        id: id.to_string(),
                        reason,
                    });
                }
            }
        }

        (links, failures)
    }

    /// Walks, extracts and resolves without touching any file
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError::FileSystem`] if the root cannot be walked.
    pub async fn resolve(&self, config: &RunConfig) -> Result<AnnotateReport, AnnotateError> {
        let (report, _) = self.scan_and_resolve(config).await?;
        Ok(report)
    }

    /// Runs the full pipeline, rewriting files unless `rewrite.dry_run` is set
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError::FileSystem`] if the root cannot be walked.
    pub async fn annotate(&self, config: &RunConfig) -> Result<AnnotateReport, AnnotateError> {
        let (mut report, text_files) = self.scan_and_resolve(config).await?;

        if report.resolved.is_empty() {
            debug!("No resolved links, nothing to rewrite");
            return Ok(report);
        }

        for path in text_files {
            let content = match read_text(&path) {
                Ok(Some(content)) => content,
                Ok(None) => continue,
                Err(err) => {
                    warn!(error = %err, "Skipping file");
                    report.failures.push(err);
                    continue;
                }
            };

            let rewrite = rewrite_shared_links(&content, &report.resolved);
            if !rewrite.changed() {
                continue;
            }

            if report.dry_run {
                info!(path = %path.display(), links = rewrite.replacements, "Would rewrite");
                report.rewritten.push(path);
                continue;
            }

            match write_text(&path, &rewrite.content) {
                Ok(()) => {
                    info!(path = %path.display(), links = rewrite.replacements, "Rewrote");
                    report.rewritten.push(path);
                }
                Err(err) => {
                    warn!(error = %err, "Write failed");
                    report.failures.push(err);
                }
            }
        }

        info!(summary = %report.summary(), "Annotation complete");
        Ok(report)
    }

    async fn scan_and_resolve(
        &self,
        config: &RunConfig,
    ) -> Result<(AnnotateReport, Vec<PathBuf>), AnnotateError> {
        let scan = self.scan(config)?;

        let mut report = AnnotateReport::new(&config.scan.root, config.rewrite.dry_run);
        report.files_scanned = scan.files_scanned;
        report.files_skipped = scan.files_skipped;
        report.identifiers_found = scan.identifiers.len();
        report.failures = scan.failures;

        let (links, failures) = self.resolve_all(&scan.identifiers).await;
        report.resolved = links;
        report.failures.extend(failures);

        Ok((report, scan.text_files))
    }
}

//! Run configuration for sharelink.
//!
//! There is no configuration file: the CLI builds a [`RunConfig`] from its
//! flags and validates it before any work starts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Base URL for Microsoft Graph API v1.0
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

// ---------------------------------------------------------------------------
// Config sections
// ---------------------------------------------------------------------------

/// Top-level configuration for a `resolve` or `annotate` run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub scan: ScanConfig,
    pub rewrite: RewriteConfig,
    pub graph: GraphConfig,
}

/// Directory walk settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory whose files are scanned for shared links.
    pub root: PathBuf,
    /// Follow symbolic links while walking.
    pub follow_links: bool,
}

/// Rewrite settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Report the files that would change without writing them.
    pub dry_run: bool,
}

/// Microsoft Graph endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Base URL every API path is appended to.
    pub base_url: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

impl RunConfig {
    /// Creates a configuration that scans `root` with default settings.
    pub fn for_directory(root: impl Into<PathBuf>) -> Self {
        Self {
            scan: ScanConfig {
                root: root.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.scan.follow_links = follow_links;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.rewrite.dry_run = dry_run;
        self
    }

    pub fn with_graph_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.graph.base_url = base_url.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"scan.root"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl RunConfig {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- scan ---
        if self.scan.root.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "scan.root".into(),
                message: "must not be empty".into(),
            });
        } else if !self.scan.root.is_dir() {
            errors.push(ValidationError {
                field: "scan.root".into(),
                message: format!("not a directory: {}", self.scan.root.display()),
            });
        }

        // --- graph ---
        errors.extend(validate_base_url(&self.graph.base_url));

        errors
    }
}

/// Checks that a Graph base URL is an absolute http(s) URL.
pub fn validate_base_url(base_url: &str) -> Option<ValidationError> {
    match url::Url::parse(base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => None,
        Ok(url) => Some(ValidationError {
            field: "graph.base_url".into(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(err) => Some(ValidationError {
            field: "graph.base_url".into(),
            message: format!("invalid URL: {err}"),
        }),
    }
}

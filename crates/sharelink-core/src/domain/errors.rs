//! Domain error types
//!
//! This module defines error types for validating domain values and the
//! per-unit failures collected while annotating a directory tree.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when constructing domain values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid shared link identifier
    #[error("Invalid shared link ID: {0}")]
    InvalidSharedLinkId(String),

    /// Invalid remote ID format
    #[error("Invalid remote ID: {0}")]
    InvalidRemoteId(String),

    /// Invalid drive-relative path
    #[error("Invalid resolved path: {0}")]
    InvalidResolvedPath(String),

    /// A `parentReference.path` that does not contain a drive root marker
    #[error("Invalid parent reference: {0}")]
    InvalidParentReference(String),
}

/// A failure isolated to a single file or a single shared link
///
/// Only [`AnnotateError::FileSystem`] on the walk root is fatal; every other
/// occurrence is collected into the run report and processing continues.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotateError {
    /// A path could not be enumerated
    #[error("Cannot access {path}: {reason}")]
    FileSystem {
        /// The path that could not be accessed
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// A file could not be read
    #[error("Cannot read {path}: {reason}")]
    Read {
        /// The file that could not be read
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// A shared link could not be resolved to a drive path
    #[error("Cannot resolve {id}: {reason}")]
    Resolution {
        /// The shared link identifier
        id: String,
        /// Underlying cause, including the remote error chain
        reason: String,
    },

    /// A rewritten file could not be persisted
    #[error("Cannot write {path}: {reason}")]
    Write {
        /// The file that could not be written
        path: String,
        /// Underlying cause
        reason: String,
    },
}

impl AnnotateError {
    pub(crate) fn file_system(path: &Path, reason: impl ToString) -> Self {
        Self::FileSystem {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn read(path: &Path, reason: impl ToString) -> Self {
        Self::Read {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: &Path, reason: impl ToString) -> Self {
        Self::Write {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

//! Domain newtypes with validation
//!
//! This module provides strongly-typed wrappers for the identifiers and paths
//! that flow through the annotation pipeline. Each newtype ensures data validity
//! at construction time.

use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

// ============================================================================
// Shared link identifiers
// ============================================================================

/// Opaque share token embedded in a `1drv.ms/i/` URL
///
/// Format: e.g. "s!AmslmcZf6z3Lg98-IHg6iib_9ykDOw" (legacy OneDrive share id),
/// "u!aHR0cHM6Ly8..." (base64url encoded sharing URL) or
/// "c/cb3deb5f67996c9b/EXyzToken" (current form with the owner's drive id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SharedLinkId(String);

impl SharedLinkId {
    /// Create a new SharedLinkId
    ///
    /// # Errors
    /// Returns error if the id is empty or holds a character that would end
    /// the link inside a quoted attribute (whitespace, `"`, `?` or `#`)
    pub fn new(id: String) -> Result<Self, DomainError> {
        if id.is_empty() {
            return Err(DomainError::InvalidSharedLinkId(
                "Shared link ID cannot be empty".to_string(),
            ));
        }

        if id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '?' | '#'))
        {
            return Err(DomainError::InvalidSharedLinkId(format!(
                "Shared link ID contains invalid characters: {id}"
            )));
        }

        Ok(Self(id))
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SharedLinkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets a `LinkMap` be queried with the raw `&str` cut out of a quoted link
impl Borrow<str> for SharedLinkId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for SharedLinkId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<String> for SharedLinkId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SharedLinkId> for String {
    fn from(id: SharedLinkId) -> Self {
        id.0
    }
}

// ============================================================================
// OneDrive-specific types
// ============================================================================

/// OneDrive item ID (alphanumeric identifier)
///
/// Format: Alphanumeric string, typically like "01BYE5RZ6QN3ZWBTUFOFD3GSPGOHDJD36K"
/// or "CB3DEB5F67996C9B!28632" for personal drives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RemoteId(String);

impl RemoteId {
    /// Create a new RemoteId
    ///
    /// # Errors
    /// Returns error if the ID format is invalid
    pub fn new(id: String) -> Result<Self, DomainError> {
        if id.is_empty() {
            return Err(DomainError::InvalidRemoteId(
                "Remote ID cannot be empty".to_string(),
            ));
        }

        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '!' || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidRemoteId(format!(
                "Remote ID contains invalid characters: {id}"
            )));
        }

        Ok(Self(id))
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RemoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RemoteId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<String> for RemoteId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RemoteId> for String {
    fn from(id: RemoteId) -> Self {
        id.0
    }
}

/// Path of an item relative to the drive root
///
/// Format: forward-slash separated, no leading slash, e.g. "Pictures/album/x.jpg".
/// This is the value embedded as a URL fragment by the rewrite engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResolvedPath(String);

impl ResolvedPath {
    /// Create a new ResolvedPath
    ///
    /// # Errors
    /// Returns error if the path is empty, absolute, or contains a double quote
    pub fn new(path: String) -> Result<Self, DomainError> {
        if path.is_empty() {
            return Err(DomainError::InvalidResolvedPath(
                "Resolved path cannot be empty".to_string(),
            ));
        }

        if path.starts_with('/') {
            return Err(DomainError::InvalidResolvedPath(format!(
                "Resolved path must be relative to the drive root: {path}"
            )));
        }

        // Would terminate the quoted attribute it gets embedded into
        if path.contains('"') {
            return Err(DomainError::InvalidResolvedPath(format!(
                "Resolved path contains a double quote: {path}"
            )));
        }

        Ok(Self(path))
    }

    /// Compose a path from a Graph `parentReference.path` and an item name
    ///
    /// The directory is everything after the last `:` in `parent_path`
    /// (e.g. "/drive/root:/Pictures/album" gives "Pictures/album").
    ///
    /// # Errors
    /// Returns error if `parent_path` has no `:` or the composed path is invalid
    pub fn from_parent_reference(parent_path: &str, name: &str) -> Result<Self, DomainError> {
        let (_, directory) = parent_path.rsplit_once(':').ok_or_else(|| {
            DomainError::InvalidParentReference(format!(
                "expected '<drive>/root:/<dir>', got {parent_path}"
            ))
        })?;

        let directory = directory.trim_matches('/');
        let name = name.trim_matches('/');

        if directory.is_empty() {
            Self::new(name.to_string())
        } else {
            Self::new(format!("{directory}/{name}"))
        }
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ResolvedPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResolvedPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<String> for ResolvedPath {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ResolvedPath> for String {
    fn from(path: ResolvedPath) -> Self {
        path.0
    }
}

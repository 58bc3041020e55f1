//! Resolve link use case
//!
//! Turns one shared link identifier into the path of the shared file inside
//! the owner's drive. The shared item view does not expose the owner's
//! directory, so this takes two sequential lookups:
//!
//! 1. `get_shared_item` - share token to canonical drive item id
//! 2. `get_drive_item` - drive item id to `parentReference.path` + name

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    domain::{ResolvedPath, SharedLinkId},
    ports::IShareProvider,
};

/// Use case for resolving a single shared link
pub struct ResolveLinkUseCase {
    share_provider: Arc<dyn IShareProvider + Send + Sync>,
}

impl ResolveLinkUseCase {
    /// Creates a new ResolveLinkUseCase
    ///
    /// # Arguments
    ///
    /// * `share_provider` - Remote lookups for shares and drive items
    pub fn new(share_provider: Arc<dyn IShareProvider + Send + Sync>) -> Self {
        Self { share_provider }
    }

    /// Resolves `share_id` to a drive-relative path
    ///
    /// # Errors
    ///
    /// Returns an error if either lookup fails or the drive item has no
    /// usable parent path. Nothing is retried.
    pub async fn execute(&self, share_id: &SharedLinkId) -> Result<ResolvedPath> {
        let shared = self
            .share_provider
            .get_shared_item(share_id)
            .await
            .with_context(|| format!("Failed to fetch shared item {share_id}"))?;

        debug!(share_id = %share_id, item_id = %shared.id, "Share points at drive item");

        let item = self
            .share_provider
            .get_drive_item(&shared.id)
            .await
            .with_context(|| format!("Failed to fetch drive item {}", shared.id))?;

        let parent_path = item
            .parent_path
            .as_deref()
            .with_context(|| format!("Drive item {} has no parent path", item.id))?;

        let path = ResolvedPath::from_parent_reference(parent_path, &item.name)
            .with_context(|| format!("Cannot compose path for drive item {}", item.id))?;

        debug!(share_id = %share_id, path = %path, "Resolved shared link");
        Ok(path)
    }
}

//! Share provider port (driven/secondary port)
//!
//! This module defines the interface used to turn a shared link identifier
//! into a drive item. The implementation targets Microsoft OneDrive via the
//! Microsoft Graph API; tests substitute an in-memory provider.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are adapter-specific
//!   and don't need domain-level classification.
//! - Uses `#[async_trait]` for async trait methods.
//! - `SharedItem` and `DriveItem` are port-level DTOs; the resolve use case
//!   composes them into a `ResolvedPath`.

use serde::{Deserialize, Serialize};

use crate::domain::newtypes::{RemoteId, SharedLinkId};

/// The drive item a shared link points to, as seen through the share
///
/// A shared item does not carry the owner's directory path, only the
/// canonical item identifier needed for the second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedItem {
    /// Canonical drive item identifier
    pub id: RemoteId,
    /// Item name as exposed by the share
    pub name: Option<String>,
}

/// A drive item fetched from the owner's drive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveItem {
    /// Drive item identifier
    pub id: RemoteId,
    /// File name
    pub name: String,
    /// `parentReference.path`, e.g. "/drive/root:/Pictures"
    /// (None when the provider did not return one)
    pub parent_path: Option<String>,
}

/// Port trait for resolving shared links
///
/// Exposes exactly the two lookups needed to go from a share token to a path
/// inside the caller's drive. Implementations do not retry.
#[async_trait::async_trait]
pub trait IShareProvider: Send + Sync {
    /// Fetches the drive item behind a shared link
    ///
    /// # Arguments
    /// * `share_id` - The token taken from a `1drv.ms/i/` URL
    async fn get_shared_item(&self, share_id: &SharedLinkId) -> anyhow::Result<SharedItem>;

    /// Fetches a drive item from the caller's drive by its canonical id
    ///
    /// # Arguments
    /// * `item_id` - The identifier returned by [`get_shared_item`](Self::get_shared_item)
    async fn get_drive_item(&self, item_id: &RemoteId) -> anyhow::Result<DriveItem>;
}

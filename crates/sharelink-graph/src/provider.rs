//! GraphShareProvider - port implementations for Microsoft Graph API
//!
//! Wraps the [`GraphClient`] to fulfil the [`IShareProvider`] and
//! [`IProfileProvider`] port contracts.
//!
//! ## Design Notes
//!
//! - The client is held directly (no mutex): the bearer token is supplied once
//!   and never refreshed, so no method needs `&mut GraphClient`.
//! - Errors keep their [`GraphError`](crate::GraphError) classification inside
//!   the `anyhow::Error` chain.

use anyhow::Result;
use tracing::debug;

use sharelink_core::domain::newtypes::{RemoteId, SharedLinkId};
use sharelink_core::ports::{
    DriveItem, IProfileProvider, IShareProvider, SharedItem, UserInfo,
};

use crate::client::GraphClient;

/// Share and profile provider that delegates to the Microsoft Graph API
pub struct GraphShareProvider {
    client: GraphClient,
}

impl GraphShareProvider {
    /// Creates a new `GraphShareProvider` wrapping the given [`GraphClient`]
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Returns the wrapped client
    pub fn client(&self) -> &GraphClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl IShareProvider for GraphShareProvider {
    /// Delegates to [`GraphClient::get_shared_item`].
    async fn get_shared_item(&self, share_id: &SharedLinkId) -> Result<SharedItem> {
        debug!(share_id = %share_id, "GraphShareProvider::get_shared_item");
        self.client.get_shared_item(share_id).await
    }

    /// Delegates to [`GraphClient::get_drive_item`].
    async fn get_drive_item(&self, item_id: &RemoteId) -> Result<DriveItem> {
        debug!(item_id = %item_id, "GraphShareProvider::get_drive_item");
        self.client.get_drive_item(item_id).await
    }
}

#[async_trait::async_trait]
impl IProfileProvider for GraphShareProvider {
    /// Delegates to [`GraphClient::get_user_info`].
    async fn get_user_info(&self) -> Result<UserInfo> {
        debug!("GraphShareProvider::get_user_info");
        self.client.get_user_info().await
    }
}

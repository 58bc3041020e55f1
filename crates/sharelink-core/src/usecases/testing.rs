//! In-memory share provider for use case tests

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    domain::{RemoteId, SharedLinkId},
    ports::{DriveItem, IShareProvider, SharedItem},
};

/// Share provider backed by two maps, recording every lookup
#[derive(Default)]
pub struct MockShareProvider {
    shares: HashMap<String, RemoteId>,
    items: HashMap<String, DriveItem>,
    calls: Mutex<Vec<String>>,
}

impl MockShareProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a share and the drive item it points at
    pub fn with_item(
        mut self,
        share_id: &str,
        item_id: &str,
        parent_path: Option<&str>,
        name: &str,
    ) -> Self {
        let remote_id = RemoteId::from_str(item_id).unwrap();
        self.shares.insert(share_id.to_string(), remote_id.clone());
        self.items.insert(
            item_id.to_string(),
            DriveItem {
                id: remote_id,
                name: name.to_string(),
                parent_path: parent_path.map(str::to_string),
            },
        );
        self
    }

    /// Registers a share whose drive item lookup fails
    pub fn with_dangling_share(mut self, share_id: &str, item_id: &str) -> Self {
        self.shares
            .insert(share_id.to_string(), RemoteId::from_str(item_id).unwrap());
        self
    }

    /// Lookups performed so far, as "share:<id>" / "item:<id>"
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IShareProvider for MockShareProvider {
    async fn get_shared_item(&self, share_id: &SharedLinkId) -> anyhow::Result<SharedItem> {
        self.calls.lock().unwrap().push(format!("share:{share_id}"));
        let id = self
            .shares
            .get(share_id.as_str())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("share {share_id} not found"))?;
        Ok(SharedItem { id, name: None })
    }

    async fn get_drive_item(&self, item_id: &RemoteId) -> anyhow::Result<DriveItem> {
        self.calls.lock().unwrap().push(format!("item:{item_id}"));
        self.items
            .get(item_id.as_str())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("item {item_id} not found"))
    }
}

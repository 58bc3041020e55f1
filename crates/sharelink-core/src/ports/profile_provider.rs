//! Profile provider port
//!
//! Backs the `whoami` entry point: authenticate with the supplied token and
//! report who it belongs to.

use serde::{Deserialize, Serialize};

/// Information about the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// User's display name
    pub display_name: String,
    /// User's email address (mail, falling back to the principal name)
    pub email: String,
    /// Provider-specific user identifier
    pub id: String,
}

/// Port trait for reading the authenticated user's profile
#[async_trait::async_trait]
pub trait IProfileProvider: Send + Sync {
    /// Retrieves information about the authenticated user
    async fn get_user_info(&self) -> anyhow::Result<UserInfo>;
}

//! Microsoft Graph API client
//!
//! Provides a typed HTTP client for the Graph endpoints used to resolve shared
//! links. Handles authentication headers, JSON deserialization, endpoint
//! construction and classification of error statuses into [`GraphError`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sharelink_graph::client::GraphClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GraphClient::new("access-token-here");
//! let user_info = client.get_user_info().await?;
//! println!("Hello, {}", user_info.display_name);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header::RETRY_AFTER, Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use sharelink_core::{
    config::DEFAULT_GRAPH_BASE_URL,
    domain::newtypes::{RemoteId, SharedLinkId},
    ports::{DriveItem, SharedItem, UserInfo},
};

use crate::GraphError;

// ============================================================================
// Graph API response types
// ============================================================================

/// Response from the /me endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeResponse {
    /// User's display name
    display_name: Option<String>,
    /// User's email (mail field)
    mail: Option<String>,
    /// User's principal name (typically email)
    user_principal_name: Option<String>,
    /// User ID
    id: Option<String>,
}

/// DriveItem as returned by `/shares/{id}/driveItem` and `/me/drive/items/{id}`
///
/// The shared view of an item omits `parentReference.path`; only the
/// owner's view carries it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphDriveItem {
    /// OneDrive item ID
    id: String,
    /// Item name
    name: Option<String>,
    /// Parent reference
    parent_reference: Option<GraphParentRef>,
}

/// Parent reference of a drive item
#[derive(Debug, Deserialize)]
struct GraphParentRef {
    /// Parent path (e.g., "/drive/root:/Documents")
    path: Option<String>,
}

/// Error envelope returned by Graph on non-success statuses
#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    error: GraphErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GraphErrorDetail {
    code: Option<String>,
    message: Option<String>,
}

/// Extracts "code: message" from a Graph error body, if it has one
fn describe_error_body(body: &str) -> Option<String> {
    let parsed: GraphErrorBody = serde_json::from_str(body).ok()?;
    match (parsed.error.code, parsed.error.message) {
        (Some(code), Some(message)) => Some(format!("{code}: {message}")),
        (Some(code), None) => Some(code),
        (None, Some(message)) => Some(message),
        (None, None) => None,
    }
}

// ============================================================================
// GraphClient
// ============================================================================

/// HTTP client for Microsoft Graph API calls
///
/// Wraps `reqwest::Client` with authentication headers and base URL
/// construction. The bearer token is used as-is: no refresh, no retry.
pub struct GraphClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests
    base_url: String,
    /// OAuth2 access token
    access_token: String,
}

impl GraphClient {
    /// Creates a new GraphClient with the given access token
    ///
    /// # Arguments
    /// * `access_token` - A valid OAuth2 access token for Microsoft Graph
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(access_token, DEFAULT_GRAPH_BASE_URL)
    }

    /// Creates a new GraphClient with a custom base URL (useful for testing)
    ///
    /// # Arguments
    /// * `access_token` - A valid OAuth2 access token
    /// * `base_url` - Custom base URL for API requests
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Returns a reference to the current access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates an authenticated request builder for the given method and path
    ///
    /// Automatically prepends the base URL and adds the Authorization header.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path relative to base URL (e.g., "/me")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.access_token)
    }

    /// Sends `GET path` and deserializes the JSON body
    ///
    /// Non-success statuses are classified into [`GraphError`], which stays
    /// reachable through `anyhow::Error::downcast_ref`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");

        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(GraphError::from)
            .with_context(|| format!("Failed to send GET {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs);
            let body = response.text().await.unwrap_or_default();
            let detail = describe_error_body(&body).unwrap_or_else(|| format!("GET {path}"));

            debug!(path, status = status.as_u16(), detail = %detail, "Graph request failed");

            let err = if status == StatusCode::TOO_MANY_REQUESTS {
                GraphError::TooManyRequests { retry_after }
            } else {
                GraphError::from_status(status, detail)
            };
            return Err(err.into());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GraphError::InvalidResponse(e.to_string()))
            .with_context(|| format!("Failed to parse GET {path} response"))
    }

    /// Retrieves information about the authenticated user (`GET /me`)
    pub async fn get_user_info(&self) -> Result<UserInfo> {
        let me: MeResponse = self.get_json("/me").await?;

        let email = me
            .mail
            .or(me.user_principal_name)
            .unwrap_or_else(|| "unknown@unknown.com".to_string());

        let display_name = me
            .display_name
            .unwrap_or_else(|| "Unknown User".to_string());

        Ok(UserInfo {
            display_name,
            email,
            id: me.id.unwrap_or_default(),
        })
    }

    /// Fetches the drive item behind a share (`GET /shares/{id}/driveItem`)
    pub async fn get_shared_item(&self, share_id: &SharedLinkId) -> Result<SharedItem> {
        let path = format!("/shares/{}/driveItem", share_id.as_str());
        let item: GraphDriveItem = self.get_json(&path).await?;

        let id = RemoteId::new(item.id)
            .map_err(|e| GraphError::InvalidResponse(e.to_string()))
            .with_context(|| format!("Share {share_id} returned an unusable item id"))?;

        debug!(share_id = %share_id, item_id = %id, "Fetched shared item");
        Ok(SharedItem {
            id,
            name: item.name,
        })
    }

    /// Fetches a drive item by id (`GET /me/drive/items/{id}`)
    pub async fn get_drive_item(&self, item_id: &RemoteId) -> Result<DriveItem> {
        let path = format!("/me/drive/items/{}", item_id.as_str());
        let item: GraphDriveItem = self.get_json(&path).await?;

        let name = item
            .name
            .ok_or_else(|| GraphError::InvalidResponse(format!("item {item_id} has no name")))?;
        let id = RemoteId::new(item.id).map_err(|e| GraphError::InvalidResponse(e.to_string()))?;
        let parent_path = item.parent_reference.and_then(|pr| pr.path);

        debug!(item_id = %id, name = %name, parent = ?parent_path, "Fetched drive item");
        Ok(DriveItem {
            id,
            name,
            parent_path,
        })
    }
}

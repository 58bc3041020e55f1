//! Port definitions (hexagonal architecture interfaces)
//!
//! Ports are interfaces that the core depends on, but whose implementations
//! live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IShareProvider`] - Shared link to drive item lookups
//! - [`IProfileProvider`] - Authenticated user profile

pub mod profile_provider;
pub mod share_provider;

pub use profile_provider::{IProfileProvider, UserInfo};
pub use share_provider::{DriveItem, IShareProvider, SharedItem};

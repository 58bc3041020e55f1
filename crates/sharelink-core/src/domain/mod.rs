//! Domain entities and business logic
//!
//! This module contains the core domain types for sharelink:
//! - Newtypes for shared link identifiers, drive item ids and resolved paths
//! - The run report aggregated by the annotation use case
//! - Domain-specific error types

pub mod errors;
pub mod newtypes;
pub mod report;

// Re-export commonly used types
pub use errors::{AnnotateError, DomainError};
pub use newtypes::*;
pub use report::{AnnotateReport, LinkMap};

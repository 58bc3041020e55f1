//! Use cases (interactors) for sharelink
//!
//! This module contains the application use cases that orchestrate
//! domain logic and port interfaces.
//!
//! ## Use Cases
//!
//! - [`ResolveLinkUseCase`] - One shared link to one drive-relative path
//! - [`AnnotateLinksUseCase`] - Walk, extract, resolve and rewrite a directory tree

pub mod annotate_links;
pub mod resolve_link;

#[cfg(test)]
pub(crate) mod testing;

pub use annotate_links::{AnnotateLinksUseCase, ScanOutcome};
pub use resolve_link::ResolveLinkUseCase;

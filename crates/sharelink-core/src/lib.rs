//! sharelink Core - Domain logic for annotating OneDrive shared links
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain types** - `SharedLinkId`, `RemoteId`, `ResolvedPath`, `AnnotateReport`
//! - **Link handling** - extraction and idempotent rewriting of `1drv.ms/i/` links
//! - **Filesystem scanning** - recursive walk and text file I/O
//! - **Port definitions** - `IShareProvider`, `IProfileProvider`
//! - **Use cases** - `ResolveLinkUseCase`, `AnnotateLinksUseCase`
//!
//! # Architecture
//!
//! Ports define trait interfaces that adapter crates (`sharelink-graph`)
//! implement. Use cases orchestrate the domain through those ports.

pub mod config;
pub mod domain;
pub mod links;
pub mod ports;
pub mod scan;
pub mod usecases;

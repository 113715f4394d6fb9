//! # Fleetconf Client
//!
//! A Rust client library for the Fleetconf fleet configuration API.
//!
//! The service exposes list-style endpoints for OS-configuration resources
//! (policy assignments, compliance reports, inventories, vulnerability
//! reports, patch jobs). Every list call returns one bounded page plus an
//! opaque continuation token; this crate wraps that protocol in lazy pagers
//! that are consumed page-by-page or item-by-item, in either async or
//! blocking mode.
//!
//! ## Features
//!
//! - **Lazy Pagination**: one generic pager pair for all list operations
//! - **Async and Blocking**: `FleetconfClient` streams, `blocking::BlockingClient` iterators
//! - **Retries and Rate Limiting**: configurable backoff, token bucket limiting
//! - **Per-Call Options**: retry/timeout/metadata forwarded on every page fetch
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fleetconf_client::{
//!     CallOptions, ClientConfig, FleetconfClient, ListInventoriesRequest,
//! };
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> fleetconf_client::Result<()> {
//!     let client = FleetconfClient::new(ClientConfig::default())?;
//!
//!     let request = ListInventoriesRequest::new("zones/eu-1").with_page_size(100);
//!     let pager = client.list_inventories(&request, CallOptions::new()).await?;
//!
//!     // Follow-up pages are fetched transparently as the stream advances.
//!     let inventories = pager.items();
//!     futures::pin_mut!(inventories);
//!     while let Some(inventory) = inventories.try_next().await? {
//!         println!("{}", inventory.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types: call options, retry policy, metadata
pub mod types;

/// Generic sync/async pagers over list operations
pub mod pager;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Resource request/response/item shapes
pub mod resources;

/// Client configuration
pub mod config;

/// Asynchronous client facade
pub mod client;

/// Blocking client facade
pub mod blocking;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::FleetconfClient;
pub use config::{AuthConfig, ClientConfig};
pub use error::{Error, Result};
pub use pager::{
    AsyncPageFetcher, AsyncPager, Items, PageFetcher, PageableRequest, PageableResponse, Pager,
    Pages,
};
pub use resources::*;
pub use types::{BackoffType, CallOptions, Metadata, RetryPolicy};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

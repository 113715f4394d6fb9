//! HTTP transport module
//!
//! The transport is where the opaque per-call policy bundle gains meaning:
//! retry designation, timeout, and metadata from
//! [`CallOptions`](crate::types::CallOptions) are interpreted here, and
//! nowhere else.
//!
//! # Features
//!
//! - **Automatic Retries**: configurable backoff per retry policy
//! - **Rate Limiting**: token bucket rate limiter using governor
//! - **Metadata**: call metadata sent as request headers

mod client;
mod rate_limit;

pub use client::HttpClient;
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;

//! Common types used throughout the Fleetconf client
//!
//! This module contains the per-call policy bundle (`CallOptions`), the
//! retry policy types interpreted by the transport, and shared utilities.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Type Aliases
// ============================================================================

/// Ordered key/value pairs sent along with every request as headers.
///
/// Order is preserved; duplicate keys are allowed, matching wire metadata
/// semantics.
pub type Metadata = Vec<(String, String)>;

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff between retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Retry Policy
// ============================================================================

/// Retry policy for follow-up calls.
///
/// The policy is interpreted by the transport layer only; pagers forward it
/// verbatim with every call and never act on it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Backoff strategy
    pub backoff: BackoffType,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            backoff: BackoffType::Exponential,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Set the maximum number of retries
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the backoff strategy and bounds
    #[must_use]
    pub fn with_backoff(mut self, backoff: BackoffType, initial: Duration, max: Duration) -> Self {
        self.backoff = backoff;
        self.initial_backoff = initial;
        self.max_backoff = max;
        self
    }

    /// Delay before the given retry attempt (0-based)
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let delay = match self.backoff {
            BackoffType::Constant => self.initial_backoff,
            BackoffType::Linear => self.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.initial_backoff * factor
            }
        };

        std::cmp::min(delay, self.max_backoff)
    }
}

// ============================================================================
// Call Options
// ============================================================================

/// Per-call policy bundle: retry designation, timeout, and metadata.
///
/// Pagers store one of these at construction and pass it unchanged to the
/// invoker on every follow-up call. Its semantics are defined entirely by
/// the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    /// Retry designation; `None` falls back to the client default
    pub retry: Option<RetryPolicy>,
    /// Per-call timeout override
    pub timeout: Option<Duration>,
    /// Key/value pairs sent with the request as headers
    pub metadata: Metadata,
}

impl CallOptions {
    /// Create an empty options bundle (client defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Set the per-call timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Append a metadata key/value pair
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

//! Client configuration
//!
//! Connection-level settings shared by every call a client makes: service
//! endpoint, default timeout and retry policy, rate limiting, headers, and
//! credentials. Per-call overrides live in
//! [`CallOptions`](crate::types::CallOptions).

use std::collections::HashMap;
use std::time::Duration;

use url::Url;

use crate::error::Result;
use crate::http::RateLimiterConfig;
use crate::types::RetryPolicy;

/// Default production endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.fleetconf.io";

/// Credentials applied to every request
#[derive(Debug, Clone)]
pub enum AuthConfig {
    /// Static API key sent in a custom header
    ApiKey {
        /// Header name, e.g. `x-api-key`
        header: String,
        /// The key value
        key: String,
    },
    /// Bearer token sent in the Authorization header
    Bearer {
        /// The token value
        token: String,
    },
}

/// Configuration for a Fleetconf client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service endpoint root
    pub endpoint: String,
    /// Default request timeout
    pub timeout: Duration,
    /// Default retry policy, overridable per call
    pub retry: RetryPolicy,
    /// Client-side rate limiting; `None` disables it
    pub rate_limit: Option<RateLimiterConfig>,
    /// Headers added to every request
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
    /// Credentials; `None` sends unauthenticated requests
    pub auth: Option<AuthConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: HashMap::new(),
            user_agent: format!("fleetconf-client/{}", env!("CARGO_PKG_VERSION")),
            auth: None,
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse and validate the endpoint URL
    pub fn endpoint_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.endpoint)?)
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the service endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the default request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the default retry policy
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.config.retry = retry;
        self
    }

    /// Set the rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable client-side rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the credentials
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = Some(auth);
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

//! HTTP transport with retry and rate limiting
//!
//! Executes the actual list calls. Handles:
//! - Automatic retries with configurable backoff
//! - Rate limiting to prevent API throttling
//! - Call metadata applied as request headers
//! - Error classification for retry decisions

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::rate_limit::RateLimiter;
use crate::config::{AuthConfig, ClientConfig};
use crate::error::{Error, Result};
use crate::types::CallOptions;

/// HTTP transport for the Fleetconf API
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a transport from a client configuration.
    ///
    /// Fails if the endpoint is not a valid URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.endpoint_url()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// Execute a GET and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        options: &CallOptions,
    ) -> Result<T> {
        let response = self.get(path, query, options).await?;
        let value = response.json().await.map_err(Error::Http)?;
        Ok(value)
    }

    /// Execute a GET with retry, rate limiting, and metadata applied.
    ///
    /// The retry designation and timeout come from `options`, falling back
    /// to the client defaults.
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::too_many_lines)]
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        options: &CallOptions,
    ) -> Result<Response> {
        let url = self.build_url(path);
        let retry = options
            .retry
            .clone()
            .unwrap_or_else(|| self.config.retry.clone());
        let timeout = options.timeout.unwrap_or(self.config.timeout);

        let mut last_error = None;
        let mut attempt = 0;

        while attempt <= retry.max_retries {
            // Wait for rate limiter
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            // Build request
            let mut req = self.client.get(&url);

            for (key, value) in &self.config.default_headers {
                req = req.header(key.as_str(), value.as_str());
            }

            // Call metadata travels as headers
            for (key, value) in &options.metadata {
                req = req.header(key.as_str(), value.as_str());
            }

            if !query.is_empty() {
                req = req.query(query);
            }

            req = req.timeout(timeout);
            req = self.apply_auth(req);

            match req.send().await {
                Ok(response) => {
                    let status = response.status();

                    // Check for rate limiting
                    if status == StatusCode::TOO_MANY_REQUESTS {
                        let retry_after = extract_retry_after(&response);
                        if attempt < retry.max_retries {
                            warn!(
                                "Rate limited (429), attempt {}/{}, waiting {}s",
                                attempt + 1,
                                retry.max_retries + 1,
                                retry_after
                            );
                            tokio::time::sleep(Duration::from_secs(retry_after)).await;
                            attempt += 1;
                            continue;
                        }
                        return Err(Error::RateLimited {
                            retry_after_seconds: retry_after,
                        });
                    }

                    // Check for retryable server errors
                    if is_retryable_status(status) && attempt < retry.max_retries {
                        let delay = retry.backoff_delay(attempt);
                        warn!(
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status.as_u16(),
                            attempt + 1,
                            retry.max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::HttpStatus {
                            status: status.as_u16(),
                            body: String::new(),
                        });
                        continue;
                    }

                    // Remaining client and server errors are final
                    if status.is_client_error() || status.is_server_error() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(Error::HttpStatus {
                            status: status.as_u16(),
                            body,
                        });
                    }

                    debug!("GET {} succeeded", url);
                    return Ok(response);
                }
                Err(e) => {
                    if e.is_timeout() {
                        if attempt < retry.max_retries {
                            let delay = retry.backoff_delay(attempt);
                            warn!(
                                "Request timeout, attempt {}/{}, retrying in {:?}",
                                attempt + 1,
                                retry.max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            last_error = Some(Error::Timeout {
                                timeout_ms: timeout.as_millis() as u64,
                            });
                            continue;
                        }
                        return Err(Error::Timeout {
                            timeout_ms: timeout.as_millis() as u64,
                        });
                    }

                    if e.is_connect() && attempt < retry.max_retries {
                        let delay = retry.backoff_delay(attempt);
                        warn!(
                            "Connection error, attempt {}/{}, retrying in {:?}",
                            attempt + 1,
                            retry.max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::Http(e));
                        continue;
                    }

                    return Err(Error::Http(e));
                }
            }
        }

        // Exhausted all retries
        Err(last_error.unwrap_or(Error::MaxRetriesExceeded {
            max_retries: retry.max_retries,
        }))
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        let base = self.config.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Apply configured credentials
    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.auth {
            Some(AuthConfig::ApiKey { header, key }) => req.header(header.as_str(), key.as_str()),
            Some(AuthConfig::Bearer { token }) => req.bearer_auth(token),
            None => req,
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("endpoint", &self.config.endpoint)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Check if an HTTP status is retryable
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status.as_u16(),
        429 | 500 | 502 | 503 | 504 | 520 | 521 | 522 | 523 | 524
    )
}

/// Extract retry-after header value
fn extract_retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60)
}

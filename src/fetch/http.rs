// src/fetch/http.rs
// =============================================================================
// Fetches raw wiki sources over HTTP.
//
// Key functionality:
// - One reqwest Client, reused for every page (connection pooling)
// - A per-request timeout
// - Non-2xx responses are errors: a 404 means the page doesn't exist, and
//   GitHub's error body must never be mistaken for Markdown
//
// Rust concepts:
// - Traits: ContentSource abstracts "something that returns text for a URL"
// - impl Future in traits: lets implementors write plain `async fn`
// =============================================================================

use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Anything that can hand back the text stored at a URL.
pub trait ContentSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Downloads raw Markdown with reqwest.
#[derive(Debug, Clone)]
pub struct RawContentFetcher {
    client: Client,
}

impl RawContentFetcher {
    // Builds a fetcher whose requests give up after `timeout`
    //
    // Redirects are followed (raw.github.com forwards to
    // raw.githubusercontent.com), up to 5 hops.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl ContentSource for RawContentFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "fetching raw content");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to fetch {}: {}", url, describe_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Failed to fetch {}: HTTP {}", url, status));
        }

        let content = response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {}", url))?;

        tracing::debug!(url, bytes = content.len(), "fetched raw content");
        Ok(content)
    }
}

// Turns a reqwest error into a short human-readable reason
fn describe_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string();

    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            "connection failed".to_string()
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else {
        error_string
    }
}

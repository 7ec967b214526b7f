// src/wiki/fetch.rs
// =============================================================================
// This module downloads article pages.
//
// Key functionality:
// - Builds the absolute URL (site base + article identifier)
// - Makes an HTTP GET with a bounded per-request timeout
// - Classifies failures (timeout, connection, HTTP status) for the logs
// - NEVER returns an error: every failure degrades to an empty document,
//   which simply contributes no links to the search
//
// The `Fetcher` trait is the seam between the search and the network, so
// the search can run against an in-memory graph in tests.
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::ArticleId;

/// Retrieves the raw document of an article.
///
/// Implementations absorb every failure and return an empty string instead.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, article: &ArticleId) -> String;
}

// Why a fetch failed; only used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    Timeout,
    Connect,
    Status(u16),
    Other,
}

impl FailureKind {
    fn from_error(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            FailureKind::Timeout
        } else if error.is_connect() {
            FailureKind::Connect
        } else if let Some(status) = error.status() {
            FailureKind::Status(status.as_u16())
        } else {
            FailureKind::Other
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => f.write_str("timed out"),
            FailureKind::Connect => f.write_str("connection failed"),
            FailureKind::Status(code) => write!(f, "HTTP {}", code),
            FailureKind::Other => f.write_str("request error"),
        }
    }
}

/// Fetches pages over HTTP with reqwest.
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    // Creates a fetcher for the given site
    //
    // Parameters:
    //   base: site root, e.g. https://en.wikipedia.org
    //   timeout: per-request limit; expiry yields an empty document
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        // We reuse this client for all requests (connection pooling)
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!("wikiracer/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base })
    }

    async fn try_fetch(&self, url: Url) -> std::result::Result<String, FailureKind> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FailureKind::from_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FailureKind::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| FailureKind::from_error(&e))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, article: &ArticleId) -> String {
        let url = match article.url(&self.base) {
            Ok(url) => url,
            Err(e) => {
                warn!(article = %article, error = %e, "skipping article");
                return String::new();
            }
        };

        match self.try_fetch(url).await {
            Ok(body) => {
                debug!(article = %article, bytes = body.len(), "fetched");
                body
            }
            Err(kind) => {
                warn!(article = %article, failure = %kind, "fetch failed, treating page as empty");
                String::new()
            }
        }
    }
}

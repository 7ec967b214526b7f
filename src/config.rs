// src/config.rs
// =============================================================================
// Search configuration and its validation.
//
// The CLI builds a SearchConfig from its flags; validate() rejects anything
// that would make the search meaningless before any request is made. A
// configuration error is fatal (exit code 2) and no search is attempted.
// =============================================================================

use anyhow::{anyhow, bail, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";
pub const DEFAULT_ARTICLE_PREFIX: &str = "/wiki/";
pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_FETCH_TIMEOUT_SECS: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub base_url: Url,
    pub article_prefix: String,
    pub workers: usize,
    pub fetch_timeout: Duration,
    /// None = search until found or exhausted
    pub max_depth: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            article_prefix: DEFAULT_ARTICLE_PREFIX.to_string(),
            workers: DEFAULT_WORKERS,
            fetch_timeout: Duration::from_secs_f64(DEFAULT_FETCH_TIMEOUT_SECS),
            max_depth: None,
        }
    }
}

impl SearchConfig {
    // Builds a config from raw CLI values and validates it
    pub fn from_args(
        base_url: &str,
        article_prefix: &str,
        workers: usize,
        fetch_timeout_secs: f64,
        max_depth: Option<usize>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow!("Invalid base URL '{}': {}", base_url, e))?;

        if !fetch_timeout_secs.is_finite() || fetch_timeout_secs <= 0.0 {
            bail!("Fetch timeout must be a positive number of seconds, got {}", fetch_timeout_secs);
        }

        // Finite but huge values (1e30) do not fit in a Duration
        let fetch_timeout = Duration::try_from_secs_f64(fetch_timeout_secs)
            .map_err(|e| anyhow!("Invalid fetch timeout {}: {}", fetch_timeout_secs, e))?;

        let config = Self {
            base_url,
            article_prefix: article_prefix.to_string(),
            workers,
            fetch_timeout,
            max_depth,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            bail!("At least one worker is required");
        }
        if self.fetch_timeout.is_zero() {
            bail!("Fetch timeout must be greater than zero");
        }
        if !matches!(self.base_url.scheme(), "http" | "https") || self.base_url.host_str().is_none() {
            bail!("Base URL must be an http(s) URL with a host: {}", self.base_url);
        }
        if self.article_prefix.len() < 2
            || !self.article_prefix.starts_with('/')
            || !self.article_prefix.ends_with('/')
        {
            bail!(
                "Article prefix must start and end with '/', got '{}'",
                self.article_prefix
            );
        }
        if self.max_depth == Some(0) {
            bail!("Max depth must be at least 1");
        }
        Ok(())
    }
}

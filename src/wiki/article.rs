// src/wiki/article.rs
// =============================================================================
// Article identifiers: the unit of visitation for the search.
//
// An identifier is the normalized site-relative path of an article, for
// example "/wiki/Rust_(programming_language)". Two identifiers are equal
// exactly when their paths are equal, so the query string and the fragment
// are always stripped before an identifier is built.
//
// Where identifiers come from:
// - The command line (start and end article)
// - href attributes found in fetched pages (see links.rs)
// =============================================================================

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::fmt;
use url::Url;

/// A normalized article path such as `/wiki/Foo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    // Builds an identifier from a path that is already known to be
    // fragment-free and query-free. Returns None when the path is not an
    // article path (wrong prefix, or nothing after the prefix).
    fn from_path(path: &str, prefix: &str) -> Option<Self> {
        let name = path.strip_prefix(prefix)?;
        if name.is_empty() || name.starts_with('/') {
            return None;
        }
        Some(ArticleId(path.to_string()))
    }

    // Normalizes an href found in a page
    //
    // Accepted:
    //   "/wiki/Foo"                       -> /wiki/Foo
    //   "/wiki/Foo#History"               -> /wiki/Foo
    //   "https://<same origin>/wiki/Foo?x" -> /wiki/Foo
    //
    // Rejected (None):
    //   "#History", "mailto:...", "javascript:...", links to another origin,
    //   "/w/index.php?...", "/wiki/" and anything the url crate cannot parse
    pub fn from_href(href: &str, base: &Url, prefix: &str) -> Option<Self> {
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') {
            return None;
        }

        let resolved = base.join(href).ok()?;
        if !matches!(resolved.scheme(), "http" | "https") {
            return None;
        }
        // Same scheme, host and port as the site
        if resolved.origin() != base.origin() {
            return None;
        }

        // Url::path() never contains the query or the fragment
        Self::from_path(resolved.path(), prefix)
    }

    // Parses a start/end article given on the command line
    //
    // Both "/wiki/Foo" and the bare title "Foo" are accepted. Spaces become
    // underscores, the form the site itself uses in its links
    // ("Albert Einstein" -> /wiki/Albert_Einstein).
    pub fn from_arg(arg: &str, prefix: &str) -> Result<Self> {
        let arg = arg.trim();
        if arg.is_empty() {
            return Err(anyhow!("Article name must not be empty"));
        }
        let arg = &arg.split_whitespace().collect::<Vec<_>>().join("_");

        let path = if arg.starts_with(prefix) {
            arg.to_string()
        } else {
            format!("{}{}", prefix, arg.trim_start_matches('/'))
        };

        // Run the path through the url crate so CLI input is percent-encoded
        // and stripped of '?'/'#' exactly like links found in pages
        let resolved = Url::parse("http://localhost/")
            .and_then(|root| root.join(&path))
            .map_err(|e| anyhow!("Invalid article '{}': {}", arg, e))?;

        Self::from_path(resolved.path(), prefix)
            .ok_or_else(|| anyhow!("Invalid article '{}': expected {}<name>", arg, prefix))
    }

    // Absolute URL of the article on the given site
    pub fn url(&self, base: &Url) -> Result<Url> {
        base.join(&self.0)
            .map_err(|e| anyhow!("Cannot build URL for {}: {}", self.0, e))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://en.wikipedia.org").unwrap()
    }

    #[test]
    fn test_relative_href() {
        let id = ArticleId::from_href("/wiki/Rust", &base(), "/wiki/").unwrap();
        assert_eq!(id.as_str(), "/wiki/Rust");
    }

    #[test]
    fn test_fragment_and_query_are_stripped() {
        let a = ArticleId::from_href("/wiki/Rust#History", &base(), "/wiki/").unwrap();
        let b = ArticleId::from_href("/wiki/Rust?oldid=12", &base(), "/wiki/").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "/wiki/Rust");
    }

    #[test]
    fn test_same_host_absolute_link() {
        let id = ArticleId::from_href("https://en.wikipedia.org/wiki/Ferris", &base(), "/wiki/");
        assert_eq!(id.map(|i| i.to_string()), Some("/wiki/Ferris".to_string()));
    }

    #[test]
    fn test_rejects_non_articles() {
        let base = base();
        for href in [
            "#Section",
            "",
            "mailto:someone@example.com",
            "javascript:void(0)",
            "https://de.wikipedia.org/wiki/Rust",
            "/w/index.php?title=Rust",
            "/wiki/",
            "//other.org/wiki/Rust",
            "https://en.wikipedia.org:8443/wiki/Rust",
            "http://en.wikipedia.org/wiki/Rust",
        ] {
            assert!(
                ArticleId::from_href(href, &base, "/wiki/").is_none(),
                "{} should be rejected",
                href
            );
        }
    }

    #[test]
    fn test_from_arg_accepts_bare_title() {
        let a = ArticleId::from_arg("Rust", "/wiki/").unwrap();
        let b = ArticleId::from_arg("/wiki/Rust", "/wiki/").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_arg_spaces_become_underscores() {
        let from_cli = ArticleId::from_arg("Albert Einstein", "/wiki/").unwrap();
        let from_page = ArticleId::from_href("/wiki/Albert_Einstein", &base(), "/wiki/").unwrap();
        assert_eq!(from_cli, from_page);
        assert_eq!(from_cli.as_str(), "/wiki/Albert_Einstein");
    }

    #[test]
    fn test_same_port_link_is_kept() {
        let local = Url::parse("http://127.0.0.1:8080").unwrap();
        assert!(ArticleId::from_href("http://127.0.0.1:8080/wiki/Rust", &local, "/wiki/").is_some());
        assert!(ArticleId::from_href("http://127.0.0.1:9090/wiki/Rust", &local, "/wiki/").is_none());
    }

    #[test]
    fn test_from_arg_rejects_empty() {
        assert!(ArticleId::from_arg("   ", "/wiki/").is_err());
        assert!(ArticleId::from_arg("/wiki/", "/wiki/").is_err());
    }

    #[test]
    fn test_url_joins_base() {
        let id = ArticleId::from_arg("Rust", "/wiki/").unwrap();
        assert_eq!(id.url(&base()).unwrap().as_str(), "https://en.wikipedia.org/wiki/Rust");
    }
}

// src/wiki/links.rs
// =============================================================================
// This module extracts article links from fetched pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (html5ever underneath, so broken markup is fine)
// - Supports CSS selectors for finding elements
//
// Only links that normalize to an article identifier on the same site are
// kept (see article.rs). Everything else is dropped silently: external
// links, fragment-only anchors, special schemes, malformed hrefs.
//
// Extraction is pure and CPU-bound, so the search runs it on the blocking
// worker pool rather than on the async runtime.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

use super::ArticleId;

/// Extracts the set of internal article links from a raw HTML document.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    base: Url,
    prefix: String,
    selector: Selector,
}

impl LinkExtractor {
    pub fn new(base: Url, prefix: impl Into<String>) -> Self {
        // "a[href]" is a constant, valid selector; parsing it cannot fail
        let selector = Selector::parse("a[href]").expect("static selector");
        Self {
            base,
            prefix: prefix.into(),
            selector,
        }
    }

    // Returns every article referenced by the page
    //
    // Example:
    //   <a href="/wiki/Foo">   -> {/wiki/Foo}
    //   <a href="#top">        -> {}
    //   <a href="https://x.y"> -> {}
    pub fn extract(&self, document: &str) -> HashSet<ArticleId> {
        // Failed fetches come through as empty documents
        if document.is_empty() {
            return HashSet::new();
        }

        let html = Html::parse_document(document);

        html.select(&self.selector)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| ArticleId::from_href(href, &self.base, &self.prefix))
            .collect()
    }
}

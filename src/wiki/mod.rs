// src/wiki/mod.rs
// =============================================================================
// Everything that knows about the wiki site itself.
//
// Submodules:
// - article: normalized article identifiers
// - links: extracts article links from a page
// - fetch: downloads pages (the only code that touches the network)
//
// The search (src/race/) only sees these through ArticleId, LinkExtractor
// and the Fetcher trait.
// =============================================================================

mod article;
mod fetch;
mod links;

pub use article::ArticleId;
pub use fetch::{Fetcher, HttpFetcher};
pub use links::LinkExtractor;

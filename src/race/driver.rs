// src/race/driver.rs
// =============================================================================
// The search driver: runs the BFS one full depth level at a time.
//
// How one level works:
// 1. Fetch every article of the frontier (concurrently, bounded)
// 2. Wait for ALL fetches to finish
// 3. Extract links from every page (concurrently, on blocking threads)
// 4. Wait for ALL extractions to finish
// 5. Union the links and hand them to the state machine
// 6. Stop on Found, on an empty frontier, or at the depth limit
//
// There is no overlap between levels. The visited set must reflect the
// exact boundary of the previous level before the next one starts.
// =============================================================================

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::frontier::{SearchState, Step};
use super::pool::WorkerPool;
use crate::wiki::{ArticleId, Fetcher, LinkExtractor};

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The target was linked from a page at this depth
    Found { depth: usize },
    /// The frontier ran dry; no path exists from the start article
    Exhausted { levels_searched: usize },
    /// The configured maximum depth was reached without finding the target
    DepthLimit { levels_searched: usize },
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }
}

/// Summary of one search, printed as text or JSON by main.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub start: ArticleId,
    pub target: ArticleId,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Pages requested, including failed ones
    pub pages_fetched: usize,
    /// Pages that came back empty (failed or blank)
    pub pages_empty: usize,
    /// Articles ever scheduled for fetching
    pub visited: usize,
    pub elapsed_ms: u128,
}

/// Runs level-synchronized searches with a fetcher, an extractor and a pool.
pub struct Racer<F> {
    fetcher: F,
    extractor: Arc<LinkExtractor>,
    pool: WorkerPool,
    max_depth: Option<usize>,
}

impl<F: Fetcher> Racer<F> {
    pub fn new(fetcher: F, extractor: LinkExtractor, pool: WorkerPool) -> Self {
        Self {
            fetcher,
            extractor: Arc::new(extractor),
            pool,
            max_depth: None,
        }
    }

    // Stops the search once this many levels were searched
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub async fn run(&self, start: ArticleId, target: ArticleId) -> SearchReport {
        let started = Instant::now();
        let mut state = SearchState::new(start.clone(), target.clone());
        let mut pages_fetched = 0;
        let mut pages_empty = 0;

        let outcome = match state.initial() {
            Step::Found(depth) => Outcome::Found { depth },
            Step::Continue(mut frontier) => loop {
                let depth = state.depth();

                // An empty frontier means every reachable article was seen
                if frontier.is_empty() {
                    break Outcome::Exhausted {
                        levels_searched: depth - 1,
                    };
                }
                if self.max_depth.is_some_and(|max| depth > max) {
                    break Outcome::DepthLimit {
                        levels_searched: depth - 1,
                    };
                }

                info!(
                    depth,
                    frontier = frontier.len(),
                    workers = self.pool.workers(),
                    "searching level"
                );

                let pages = self.fetch_all(frontier).await;
                pages_fetched += pages.len();
                pages_empty += pages.iter().filter(|page| page.is_empty()).count();

                let candidates = self.extract_all(pages).await;
                let links = candidates.len();

                match state.advance(candidates) {
                    Step::Found(depth) => break Outcome::Found { depth },
                    Step::Continue(next) => {
                        info!(depth, links, new = next.len(), "level done");
                        frontier = next;
                    }
                }
            },
        };

        SearchReport {
            start,
            target,
            outcome,
            pages_fetched,
            pages_empty,
            visited: state.visited_len(),
            elapsed_ms: started.elapsed().as_millis(),
        }
    }

    // Fetch phase; returns documents aligned with the frontier
    async fn fetch_all(&self, frontier: Vec<ArticleId>) -> Vec<String> {
        let fetcher = &self.fetcher;
        self.pool
            .map_async(frontier, |article| async move { fetcher.fetch(&article).await })
            .await
    }

    // Extract phase; returns the union of all links found
    async fn extract_all(&self, pages: Vec<String>) -> HashSet<ArticleId> {
        let extractor = Arc::clone(&self.extractor);
        let link_sets = self
            .pool
            .map_blocking(pages, move |page: String| extractor.extract(&page))
            .await;

        let candidates: HashSet<ArticleId> = link_sets.into_iter().flatten().collect();
        debug!(candidates = candidates.len(), "links extracted");
        candidates
    }
}

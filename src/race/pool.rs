// src/race/pool.rs
// =============================================================================
// A bounded worker pool with a synchronous "map" barrier.
//
// Both methods take a whole batch, run at most `workers` items at a time,
// and return only when every item is done. Results come back in the same
// order as the inputs.
//
// - map_async: for I/O-bound futures (page fetches)
// - map_blocking: for CPU-bound closures (HTML parsing), run on tokio's
//   blocking thread pool so parsing never stalls the async runtime
//
// A failing item never fails the batch. Fetches already absorb their own
// errors; a blocking task that panics is replaced by R::default().
// =============================================================================

use futures::stream::{self, StreamExt};
use std::future::Future;
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    // A pool needs at least one worker; 0 is bumped to 1
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    // Runs `f` over every item with bounded concurrency
    //
    // .buffered(N) keeps N futures in flight and yields results in input
    // order (unlike .buffer_unordered, which yields them as they finish).
    pub async fn map_async<T, R, F, Fut>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = R>,
    {
        stream::iter(items.into_iter().map(f))
            .buffered(self.workers)
            .collect()
            .await
    }

    // Runs a CPU-bound `f` over every item on blocking threads
    pub async fn map_blocking<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Default + Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let f = Arc::new(f);

        self.map_async(items, |item| {
            let f = Arc::clone(&f);
            async move {
                match tokio::task::spawn_blocking(move || f(item)).await {
                    Ok(result) => result,
                    Err(e) => {
                        error!(error = %e, "worker task failed, using empty result");
                        R::default()
                    }
                }
            }
        })
        .await
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why buffered and not buffer_unordered?
//    - Both keep N futures in flight
//    - buffered yields results in input order, so results[i] belongs to
//      items[i] without carrying the input along
//
// 2. Why spawn_blocking for parsing?
//    - scraper's Html is not Send and parsing is pure CPU work
//    - Each page is parsed and dropped on one blocking thread; only the
//      resulting link set crosses back to the async side
// -----------------------------------------------------------------------------

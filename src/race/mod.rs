// src/race/mod.rs
// =============================================================================
// This module contains the search itself.
//
// Submodules:
// - frontier: the state machine owning the visited set and depth counter
// - pool: bounded, order-preserving parallel map with a join barrier
// - driver: runs one full BFS level at a time until found or exhausted
//
// The network and the HTML parser live in src/wiki/; this module only sees
// them through the Fetcher trait and LinkExtractor.
// =============================================================================

mod driver;
mod frontier;
mod pool;

pub use driver::{Outcome, Racer, SearchReport};
pub use pool::WorkerPool;

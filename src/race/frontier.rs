// src/race/frontier.rs
// =============================================================================
// The search state machine.
//
// It owns the visited set and the depth counter. The driver feeds it the
// union of all links found at the current depth, and it answers with either
// the next frontier or the depth at which the target was seen:
//
//   Ready(1, {start}) --advance(candidates)--> Found(depth)
//                                          \--> Ready(depth + 1, visited')
//
// The target check happens on the raw candidates, BEFORE they are filtered
// against the visited set. A target linked from any page at depth d is found
// at depth d, even if it was already visited.
//
// The state machine is plain synchronous code. The driver only calls it
// between batches, so the visited set is never touched concurrently.
// =============================================================================

use std::collections::HashSet;

use crate::wiki::ArticleId;

/// Result of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Fetch these articles next. Empty means the search is exhausted.
    Continue(Vec<ArticleId>),
    /// The target was linked from a page at this depth.
    Found(usize),
}

#[derive(Debug)]
pub struct SearchState {
    start: ArticleId,
    target: ArticleId,
    visited: HashSet<ArticleId>,
    depth: usize,
}

impl SearchState {
    pub fn new(start: ArticleId, target: ArticleId) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.clone());

        Self {
            start,
            target,
            visited,
            depth: 1,
        }
    }

    // The first step, before anything has been fetched
    //
    // Racing an article to itself is trivially solved at depth 1.
    pub fn initial(&self) -> Step {
        if self.start == self.target {
            Step::Found(self.depth)
        } else {
            Step::Continue(vec![self.start.clone()])
        }
    }

    // Consumes the links discovered at the current depth
    pub fn advance(&mut self, candidates: HashSet<ArticleId>) -> Step {
        if candidates.contains(&self.target) {
            return Step::Found(self.depth);
        }

        self.depth += 1;

        let fresh: Vec<ArticleId> = candidates
            .into_iter()
            .filter(|id| !self.visited.contains(id))
            .collect();
        self.visited.extend(fresh.iter().cloned());

        Step::Continue(fresh)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> ArticleId {
        ArticleId::from_arg(name, "/wiki/").unwrap()
    }

    fn set(names: &[&str]) -> HashSet<ArticleId> {
        names.iter().map(|n| id(n)).collect()
    }

    fn sorted(step: Step) -> Vec<ArticleId> {
        match step {
            Step::Continue(mut ids) => {
                ids.sort();
                ids
            }
            Step::Found(depth) => panic!("unexpected Found({})", depth),
        }
    }

    #[test]
    fn test_initial_frontier_is_start() {
        let state = SearchState::new(id("A"), id("Z"));
        assert_eq!(state.initial(), Step::Continue(vec![id("A")]));
        assert_eq!(state.depth(), 1);
        assert_eq!(state.visited_len(), 1);
    }

    #[test]
    fn test_start_equals_target() {
        let state = SearchState::new(id("A"), id("A"));
        assert_eq!(state.initial(), Step::Found(1));
    }

    #[test]
    fn test_direct_link_found_at_depth_one() {
        let mut state = SearchState::new(id("A"), id("T"));
        assert_eq!(state.advance(set(&["B", "T"])), Step::Found(1));
        // Nothing changes on Found
        assert_eq!(state.depth(), 1);
        assert_eq!(state.visited_len(), 1);
    }

    #[test]
    fn test_visited_articles_are_filtered() {
        let mut state = SearchState::new(id("A"), id("T"));
        assert_eq!(sorted(state.advance(set(&["A", "B", "C"]))), vec![id("B"), id("C")]);
        assert_eq!(state.depth(), 2);
        assert_eq!(state.visited_len(), 3);

        // B and C link back to each other and to A; only D is new
        assert_eq!(sorted(state.advance(set(&["A", "B", "C", "D"]))), vec![id("D")]);
        assert_eq!(state.depth(), 3);
        assert_eq!(state.visited_len(), 4);
    }

    #[test]
    fn test_target_checked_before_filtering() {
        // The target is the start article, so it is visited from the
        // beginning; a link back to it still ends the search
        let mut state = SearchState::new(id("A"), id("A"));
        assert_eq!(state.advance(set(&["B"])), Step::Continue(vec![id("B")]));
        assert_eq!(state.advance(set(&["A", "C"])), Step::Found(2));
    }

    #[test]
    fn test_no_new_links_exhausts() {
        let mut state = SearchState::new(id("A"), id("T"));
        assert_eq!(state.advance(set(&["A"])), Step::Continue(vec![]));
        assert_eq!(state.advance(HashSet::new()), Step::Continue(vec![]));
    }

    #[test]
    fn test_diamond_graph_levels() {
        // A -> {B, C}, B -> {D}, C -> {D}, D -> {T}
        let mut state = SearchState::new(id("A"), id("T"));
        assert_eq!(sorted(state.advance(set(&["B", "C"]))), vec![id("B"), id("C")]);
        assert_eq!(sorted(state.advance(set(&["D"]))), vec![id("D")]);
        assert_eq!(state.visited_len(), 4);
        assert_eq!(state.advance(set(&["T"])), Step::Found(3));
    }
}

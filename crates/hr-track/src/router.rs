//! Routing trait and the default turn-priority depth-first search.
//!
//! # Not shortest-path
//!
//! The search is a greedy, bounded depth-first walk: at every step the three
//! turn options are tried in the fixed order right, straight, left, and the
//! first option that reaches the target wins — even when another option
//! would have been shorter.  That first-match behavior is the contract, not
//! an approximation of shortest-path.
//!
//! # Termination
//!
//! Two mechanisms bound the search on cyclic track layouts:
//!
//! - a depth budget decremented per recursion, returning `NoRoute` when
//!   exhausted, and
//! - a per-branch history of `(cell, turn)` decisions.  Every step is
//!   recorded but only non-straight entries are consulted — straight track
//!   is not a decision point, so an arbitrarily long straight run is legal
//!   (and still budget-bounded) — and re-taking a recorded turn abandons
//!   the branch.
//!
//! Each branch owns its history; there is no shared mutable state across
//! branches.

use hr_core::{CellId, Turn};

use crate::error::{TrackError, TrackResult};
use crate::network::TrackNetwork;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable route search.
///
/// The sim calls routing through this trait so tests and applications can
/// substitute their own strategy without touching the tick loop.
pub trait Router {
    /// Full route from `curr` (heading defined by `prev → curr`) to `target`.
    ///
    /// The returned path starts at the cell *after* `curr` and ends at
    /// `target`.  `Err(NoRoute)` is the normal exhausted-search outcome and
    /// folds in depth-budget expiry.
    fn find_route(
        &self,
        net: &TrackNetwork,
        target: CellId,
        prev: CellId,
        curr: CellId,
    ) -> TrackResult<Vec<CellId>>;

    /// Single-step variant: the first viable turn-priority candidate that is
    /// an actual neighbor, with no target or loop logic.  Used as a
    /// best-effort heading source for trains without an active reservation.
    fn next_cell(&self, net: &TrackNetwork, prev: CellId, curr: CellId) -> Option<CellId>;
}

// ── TurnRouter ────────────────────────────────────────────────────────────────

/// The default bounded depth-first search over the turn model.
#[derive(Copy, Clone, Debug)]
pub struct TurnRouter {
    /// Maximum recursion depth; the search gives up (`NoRoute`) when spent.
    pub depth_budget: u32,
}

impl TurnRouter {
    pub fn new(depth_budget: u32) -> Self {
        Self { depth_budget }
    }

    fn search(
        &self,
        net: &TrackNetwork,
        target: CellId,
        prev: CellId,
        curr: CellId,
        history: &[(CellId, Turn)],
        budget: u32,
    ) -> Option<Vec<CellId>> {
        if budget == 0 {
            return None;
        }
        for turn in Turn::PRIORITY {
            let Some(next) = net.extrapolate_cell(prev, curr, turn) else {
                continue;
            };
            // Viable only if a track actually exists in that direction.
            if !net.are_linked(curr, next) {
                continue;
            }
            if next == target {
                return Some(vec![next]);
            }
            // Re-taking a recorded non-straight turn means we are looping:
            // abandon this option and try the next one.
            if turn != Turn::Straight && history.contains(&(curr, turn)) {
                continue;
            }
            let mut branch = history.to_vec();
            branch.push((curr, turn));
            if let Some(mut path) = self.search(net, target, curr, next, &branch, budget - 1) {
                path.insert(0, next);
                return Some(path);
            }
        }
        None
    }
}

impl Router for TurnRouter {
    fn find_route(
        &self,
        net: &TrackNetwork,
        target: CellId,
        prev: CellId,
        curr: CellId,
    ) -> TrackResult<Vec<CellId>> {
        self.search(net, target, prev, curr, &[], self.depth_budget)
            .ok_or(TrackError::NoRoute { from: curr, to: target })
    }

    fn next_cell(&self, net: &TrackNetwork, prev: CellId, curr: CellId) -> Option<CellId> {
        Turn::PRIORITY.into_iter().find_map(|turn| {
            net.extrapolate_cell(prev, curr, turn)
                .filter(|&next| net.are_linked(curr, next))
        })
    }
}

impl Default for TurnRouter {
    /// 100 steps: deep enough for any sane map, small enough that a
    /// pathological topology cannot stall a tick.
    fn default() -> Self {
        Self::new(100)
    }
}

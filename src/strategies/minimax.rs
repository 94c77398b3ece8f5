//! Plain fixed-depth minimax.
//!
//! Full width, no pruning: every legal move is searched to the given depth.
//! A (maximizing) and B (minimizing) are searched by separate branches, each
//! letting the last equally-scored move win.

use super::super::interface::*;
use super::super::rules::{apply, is_terminal, legal_moves};
use super::util::*;
use crate::grid::Grid;

/// Options to use for the search engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Plies searched below the root.
    pub max_depth: usize,
}

impl SearchOptions {
    pub fn new() -> Self {
        SearchOptions { max_depth: 3 }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Search `grid` to `depth` plies. Returns the backed-up score and the move
/// that achieves it, or no move at a leaf or when the side to move is stuck.
/// `nodes` is incremented once per visited position.
pub(super) fn minimax<E: Evaluator + ?Sized>(
    eval: &E, grid: &Grid, depth: usize, maximizing: bool, history: &[Move], nodes: &mut u64,
) -> (Evaluation, Option<Move>) {
    *nodes += 1;
    if depth == 0 || is_terminal(grid) {
        return (eval.evaluate(grid, maximizing, history), None);
    }
    let mut best = ValueMove::new(maximizing);
    if maximizing {
        for m in legal_moves(grid, Side::A) {
            let child = apply(grid, m, Side::A);
            let (value, _) = minimax(eval, &child, depth - 1, false, history, nodes);
            best.offer(value, m);
        }
    } else {
        for m in legal_moves(grid, Side::B) {
            let child = apply(grid, m, Side::B);
            let (value, _) = minimax(eval, &child, depth - 1, true, history, nodes);
            best.offer(value, m);
        }
    }
    best.into_inner()
}

pub struct Minimax<E: Evaluator> {
    opts: SearchOptions,
    eval: E,
    prev_value: Evaluation,
    nodes: u64,
}

impl<E: Evaluator> Minimax<E> {
    pub fn new(eval: E, opts: SearchOptions) -> Minimax<E> {
        Minimax { opts, eval, prev_value: 0, nodes: 0 }
    }

    pub fn with_max_depth(eval: E, depth: usize) -> Minimax<E> {
        Self::new(eval, SearchOptions::new().with_max_depth(depth))
    }

    /// Score of the last root searched.
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// Positions visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn evaluator(&self) -> &E {
        &self.eval
    }

    /// Search from `grid` with an explicit depth and side flag.
    pub fn search(
        &mut self, grid: &Grid, depth: usize, maximizing: bool, history: &[Move],
    ) -> (Evaluation, Option<Move>) {
        self.nodes = 0;
        let result = minimax(&self.eval, grid, depth, maximizing, history, &mut self.nodes);
        self.prev_value = result.0;
        result
    }
}

impl<E: Evaluator> Strategy for Minimax<E> {
    fn choose_move(&mut self, grid: &Grid, side: Side, history: &[Move]) -> Option<Move> {
        let (value, best) = self.search(grid, self.opts.max_depth, side.is_maximizing(), history);
        tracing::debug!(
            %side,
            depth = self.opts.max_depth,
            value,
            nodes = self.nodes,
            best = ?best,
            "minimax search finished"
        );
        best
    }
}

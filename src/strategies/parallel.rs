//! Minimax with the root's children searched in parallel.
//!
//! Each child subtree gets its own copy of the grid, so the subtrees share
//! nothing but the evaluator and the history snapshot. Child scores are
//! collected in generation order and reduced exactly as the sequential engine
//! does, so the chosen move never depends on which thread finished first.

extern crate rayon;

use super::super::error::Result;
use super::super::interface::*;
use super::super::rules::{apply, is_terminal, legal_moves};
use super::minimax::{minimax, SearchOptions};
use super::util::*;
use crate::grid::Grid;

use rayon::prelude::*;

/// Options for [`ParallelMinimax`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParallelOptions {
    pub num_threads: Option<usize>,
}

impl ParallelOptions {
    pub fn new() -> Self {
        ParallelOptions { num_threads: None }
    }

    /// Set the total number of threads to use. Otherwise defaults to num_cpus.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }
}

pub struct ParallelMinimax<E: Evaluator> {
    opts: SearchOptions,
    eval: E,
    thread_pool: rayon::ThreadPool,
    prev_value: Evaluation,
    nodes: u64,
}

impl<E: Evaluator + Sync> ParallelMinimax<E> {
    pub fn new(eval: E, opts: SearchOptions, par_opts: ParallelOptions) -> Result<Self> {
        let num_threads = par_opts.num_threads.unwrap_or_else(num_cpus::get);
        let thread_pool = rayon::ThreadPoolBuilder::new().num_threads(num_threads).build()?;
        Ok(ParallelMinimax { opts, eval, thread_pool, prev_value: 0, nodes: 0 })
    }

    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn search(
        &mut self, grid: &Grid, depth: usize, maximizing: bool, history: &[Move],
    ) -> (Evaluation, Option<Move>) {
        self.nodes = 1;
        if depth == 0 || is_terminal(grid) {
            let value = self.eval.evaluate(grid, maximizing, history);
            self.prev_value = value;
            return (value, None);
        }
        let side = Side::from_maximizing(maximizing);
        let moves = legal_moves(grid, side);
        let eval = &self.eval;
        let scored: Vec<(Move, Evaluation, u64)> = self.thread_pool.install(|| {
            moves
                .par_iter()
                .with_max_len(1)
                .map(|&m| {
                    let child = apply(grid, m, side);
                    let mut nodes = 0;
                    let (value, _) =
                        minimax(eval, &child, depth - 1, !maximizing, history, &mut nodes);
                    (m, value, nodes)
                })
                .collect()
        });

        let mut best = ValueMove::new(maximizing);
        for (m, value, nodes) in scored {
            self.nodes += nodes;
            best.offer(value, m);
        }
        let result = best.into_inner();
        self.prev_value = result.0;
        result
    }
}

impl<E: Evaluator + Sync> Strategy for ParallelMinimax<E> {
    fn choose_move(&mut self, grid: &Grid, side: Side, history: &[Move]) -> Option<Move> {
        let (value, best) = self.search(grid, self.opts.max_depth, side.is_maximizing(), history);
        tracing::debug!(
            %side,
            depth = self.opts.max_depth,
            value,
            nodes = self.nodes,
            threads = self.thread_pool.current_num_threads(),
            best = ?best,
            "parallel minimax search finished"
        );
        best
    }
}

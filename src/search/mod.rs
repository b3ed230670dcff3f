//! Search module.
//!
//! # Architecture
//! - `Searcher`: search controller owning the per-invocation statistics
//! - `minimax`: the recursive alpha-beta search and its root driver
//! - `ordering`: the capture/check move-ordering heuristic
//!
//! One `find_best_move` call is a single synchronous unit of work: no
//! partial results, no cancellation, no time limit. Concurrent searches
//! need one `Searcher` each; nothing mutable is shared between them.

mod minimax;
mod ordering;

pub use ordering::ordered_moves;

use std::time::Instant;

use thiserror::Error;

use crate::eval;
use crate::rules;
use crate::types::{Board, Color, Depth, Move, NodeCount, Score};

/// Invalid search requests, rejected at the boundary
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A depth below one would degrade to no search at all
    #[error("search depth must be at least 1, got {0}")]
    DepthTooShallow(i32),
}

/// Configuration for one search invocation.
///
/// `evaluation_side` names the side whose advantage the returned score
/// measures. It must be the side to move at the root and stays fixed for
/// the whole search while the plies alternate; alpha-beta scores are only
/// meaningful relative to one maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub max_depth: Depth,
    pub evaluation_side: Color,
}

impl SearchParams {
    pub fn new(max_depth: Depth, evaluation_side: Color) -> Self {
        Self {
            max_depth,
            evaluation_side,
        }
    }

    /// Parameters for searching `board`, evaluating for its side to move
    pub fn for_position(board: &Board, max_depth: Depth) -> Self {
        Self::new(max_depth, board.side_to_move())
    }
}

/// Statistics collected during one search
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes: NodeCount,
    pub time_ms: u64,
}

impl SearchStats {
    pub fn nps(&self) -> u64 {
        if self.time_ms > 0 {
            self.nodes * 1000 / self.time_ms
        } else {
            0
        }
    }
}

/// Result of one search invocation.
///
/// `best_move` is `None` only for a terminal root position, in which case
/// `score` is its static evaluation; that is a defined game-over return,
/// not a fault.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub stats: SearchStats,
}

/// Search controller.
///
/// Holds the node counter and timing for the most recent invocation. All
/// other search state is transient on the call stack.
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Nodes visited by the most recent search. Diagnostic only.
    pub fn nodes_visited(&self) -> NodeCount {
        self.stats.nodes
    }

    /// Find the best move for the side to move in `board`.
    ///
    /// Explores the move tree to `params.max_depth` plies, scoring leaves
    /// with the evaluator from `params.evaluation_side`'s perspective and
    /// backing scores up by minimax with alpha-beta pruning. Equal root
    /// scores keep the earliest move in ordering, so repeated calls on the
    /// same position return the same move.
    pub fn find_best_move(
        &mut self,
        board: &Board,
        params: &SearchParams,
    ) -> Result<SearchResult, SearchError> {
        if params.max_depth.raw() < 1 {
            return Err(SearchError::DepthTooShallow(params.max_depth.raw()));
        }

        self.stats = SearchStats::default();
        let start = Instant::now();

        if rules::is_terminal(board) {
            return Ok(SearchResult {
                best_move: None,
                score: eval::evaluate(board, params.evaluation_side),
                stats: self.stats.clone(),
            });
        }

        let (best_move, score) =
            minimax::search_root(self, board, params.max_depth, params.evaluation_side);

        self.stats.time_ms = start.elapsed().as_millis() as u64;
        log::debug!(
            "searched depth {} in {} ms: {} nodes ({} nps), best {:?} ({})",
            params.max_depth.raw(),
            self.stats.time_ms,
            self.stats.nodes,
            self.stats.nps(),
            best_move,
            score,
        );

        Ok(SearchResult {
            best_move,
            score,
            stats: self.stats.clone(),
        })
    }

    /// Increment the node counter
    #[inline]
    pub(crate) fn inc_nodes(&mut self) {
        self.stats.nodes += 1;
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

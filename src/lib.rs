//! Alfil: a depth-limited alpha-beta chess engine.
//!
//! The library searches a game tree to a fixed depth and picks the move
//! that maximizes a material/piece-square/mobility evaluation under
//! adversarial play. Board representation, legality, and move application
//! come from the `chess` crate; this crate contributes the search, the
//! move-ordering heuristic, and the evaluator, plus a small game wrapper
//! for hosts.
//!
//! ```no_run
//! use alfil::{Depth, SearchParams, Searcher};
//! use chess::Board;
//!
//! let board = Board::default();
//! let mut searcher = Searcher::new();
//! let params = SearchParams::for_position(&board, Depth::new(3));
//! let result = searcher.find_best_move(&board, &params).unwrap();
//! println!("best: {:?} ({} nodes)", result.best_move, result.stats.nodes);
//! ```

pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod types;

pub use eval::evaluate;
pub use game::{Game, GameResult};
pub use search::{SearchError, SearchParams, SearchResult, SearchStats, Searcher};
pub use types::{Depth, Score};

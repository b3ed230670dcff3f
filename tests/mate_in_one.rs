//! Mate-in-one suite: the mating move must be returned at every depth,
//! and its backed-up score must be the winning checkmate sentinel.

use alfil::{Depth, Score, SearchParams, Searcher};
use chess::{Board, ChessMove};
use std::str::FromStr;

const MATES: &[(&str, &str)] = &[
    // Back-rank mate, white to move
    ("6k1/5ppp/8/8/8/8/8/R6K w - - 0 1", "a1a8"),
    // Scholar's mate, white to move
    (
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        "h5f7",
    ),
    // Back-rank mate, black to move
    ("r6k/8/8/8/8/8/5PPP/6K1 b - - 0 1", "a8a1"),
];

#[test]
fn mating_move_found_at_every_depth() {
    for (fen, mate) in MATES {
        let board = Board::from_str(fen).unwrap();
        let mating_move = ChessMove::from_str(mate).unwrap();
        for depth in 1..=3 {
            let mut searcher = Searcher::new();
            let params = SearchParams::for_position(&board, Depth::new(depth));
            let result = searcher.find_best_move(&board, &params).unwrap();
            assert_eq!(
                result.best_move,
                Some(mating_move),
                "depth {depth} missed the mate in {fen}"
            );
            assert_eq!(result.score, Score::mate());
        }
    }
}

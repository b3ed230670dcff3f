//! Alpha-beta pruning must never change the search result, only the node
//! count. A full-width reference minimax, sharing the engine's exact move
//! ordering and evaluator, has to agree on the chosen move and the root
//! value for every position and depth.

use alfil::search::ordered_moves;
use alfil::{evaluate, rules, Depth, Score, SearchParams, Searcher};
use chess::{Board, ChessMove, Color};
use std::str::FromStr;

fn reference_minimax(board: &Board, depth: i32, maximizing: bool, side: Color) -> Score {
    if depth == 0 || rules::is_terminal(board) {
        return evaluate(board, side);
    }
    let mut best = if maximizing {
        Score::neg_infinity()
    } else {
        Score::infinity()
    };
    for m in ordered_moves(board) {
        let value = reference_minimax(&board.make_move_new(m), depth - 1, !maximizing, side);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

fn reference_best_move(board: &Board, depth: i32) -> (Option<ChessMove>, Score) {
    let side = board.side_to_move();
    let mut best_move = None;
    let mut best_value = Score::neg_infinity();
    for m in ordered_moves(board) {
        let value = reference_minimax(&board.make_move_new(m), depth - 1, false, side);
        if value > best_value {
            best_value = value;
            best_move = Some(m);
        }
    }
    (best_move, best_value)
}

#[test]
fn pruned_and_full_width_search_agree() {
    let cases = [
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 3),
        (
            "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
            2,
        ),
        ("k7/1q6/8/8/8/8/8/K5R1 w - - 0 1", 3),
        ("6k1/5ppp/8/8/8/8/8/R6K w - - 0 1", 2),
        ("7k/8/8/8/8/8/P7/K7 w - - 0 1", 3),
    ];

    for (fen, depth) in cases {
        let board = Board::from_str(fen).unwrap();
        let mut searcher = Searcher::new();
        let params = SearchParams::for_position(&board, Depth::new(depth));
        let pruned = searcher.find_best_move(&board, &params).unwrap();
        let (full_move, full_value) = reference_best_move(&board, depth);

        assert_eq!(pruned.best_move, full_move, "move diverged in {fen}");
        assert_eq!(pruned.score, full_value, "value diverged in {fen}");
    }
}

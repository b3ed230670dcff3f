//! Depth-limited minimax with alpha-beta pruning.
//!
//! The evaluation perspective is fixed at the root: the maximizing plies
//! are the ones where the evaluation side is to move, and every leaf is
//! scored from that same side no matter whose turn it is. Positions are
//! copy-make (`make_move_new`), so backtracking is dropping the child
//! board and no undo bookkeeping exists.

use super::{ordering, Searcher};
use crate::eval;
use crate::rules;
use crate::types::{Board, Color, Depth, Move, Score};

/// Root driver: order the legal moves and keep the first one whose
/// backed-up score strictly beats the incumbent. Each root child is
/// searched with the full window, as a minimizing node one ply shallower.
///
/// The caller has already rejected terminal positions, so the move list is
/// non-empty and a best move always exists.
pub(super) fn search_root(
    searcher: &mut Searcher,
    board: &Board,
    depth: Depth,
    evaluation_side: Color,
) -> (Option<Move>, Score) {
    let mut best_move = None;
    let mut best_value = Score::neg_infinity();

    for m in ordering::ordered_moves(board) {
        let child = board.make_move_new(m);
        let value = search(
            searcher,
            &child,
            depth - 1,
            Score::neg_infinity(),
            Score::infinity(),
            false,
            evaluation_side,
        );
        if value > best_value {
            best_value = value;
            best_move = Some(m);
        }
    }

    (best_move, best_value)
}

/// Recursive alpha-beta search. Counts one node per call, evaluates at
/// depth zero or any terminal position, and otherwise explores the ordered
/// moves of whichever side is to move here. The window is passed by value:
/// a child sees the bounds as they stand when it is entered, and a cutoff
/// abandons the remaining siblings once `beta <= alpha`.
fn search(
    searcher: &mut Searcher,
    board: &Board,
    depth: Depth,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    evaluation_side: Color,
) -> Score {
    searcher.inc_nodes();

    if depth.is_leaf() || rules::is_terminal(board) {
        return eval::evaluate(board, evaluation_side);
    }

    if maximizing {
        let mut best = Score::neg_infinity();
        for m in ordering::ordered_moves(board) {
            let child = board.make_move_new(m);
            let value = search(searcher, &child, depth - 1, alpha, beta, false, evaluation_side);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut worst = Score::infinity();
        for m in ordering::ordered_moves(board) {
            let child = board.make_move_new(m);
            let value = search(searcher, &child, depth - 1, alpha, beta, true, evaluation_side);
            worst = worst.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        worst
    }
}

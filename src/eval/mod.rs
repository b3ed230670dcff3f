//! Static position evaluation.
//!
//! Scores a position from an explicit perspective side: material plus
//! piece-square placement for every piece on the board, signed by
//! ownership, plus a mobility term for the side to move. Checkmate,
//! stalemate, and insufficient material short-circuit to sentinel values.

mod pst;

use crate::rules;
use crate::types::{
    piece_value, Board, BoardStatus, Color, MoveGen, Score, Value, ALL_PIECES,
};

/// Centipawns per legal move of the side to move
const MOBILITY_WEIGHT: Value = 10;

/// Evaluate a position from `perspective`'s point of view.
///
/// Positive means `perspective` stands better. The function is a pure
/// query: the board is never mutated and repeated calls agree.
///
/// Terminal positions return sentinels: `-SCORE_CHECKMATE` when
/// `perspective` is the mated side, `+SCORE_CHECKMATE` when its opponent
/// is, and exactly zero for stalemate or insufficient material. The sign
/// depends only on who is to move in the mated position, never on which
/// side a search caller happens to be maximizing.
pub fn evaluate(board: &Board, perspective: Color) -> Score {
    match board.status() {
        BoardStatus::Checkmate => {
            return if board.side_to_move() == perspective {
                Score::mated()
            } else {
                Score::mate()
            };
        }
        BoardStatus::Stalemate => return Score::draw(),
        BoardStatus::Ongoing => {}
    }
    if rules::insufficient_material(board) {
        return Score::draw();
    }

    // Material and placement, accumulated from White's point of view
    let mut white_score: Value = 0;
    for &color in &[Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        for &piece in ALL_PIECES.iter() {
            for sq in board.pieces(piece) & board.color_combined(color) {
                white_score += sign * (piece_value(piece) + pst::positional_bonus(piece, sq, color));
            }
        }
    }

    // Mobility of the side to move. Counts fully legal moves.
    let mobility = MoveGen::new_legal(board).len() as Value * MOBILITY_WEIGHT;
    if board.side_to_move() == Color::White {
        white_score += mobility;
    } else {
        white_score -= mobility;
    }

    if perspective == Color::White {
        Score::cp(white_score)
    } else {
        Score::cp(-white_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn starting_position_reduces_to_mobility() {
        // Material and placement cancel exactly at the start; only the
        // twenty-move mobility term for White remains.
        let board = Board::default();
        assert_eq!(evaluate(&board, Color::White), Score::cp(200));
        assert_eq!(evaluate(&board, Color::Black), Score::cp(-200));
    }

    #[test]
    fn material_advantage_shows_up() {
        // Black is missing the queen
        let board =
            Board::from_str("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert!(evaluate(&board, Color::White).raw() > 800);
        assert!(evaluate(&board, Color::Black).raw() < -800);
    }

    #[test]
    fn checkmate_sign_follows_the_mated_side() {
        // Fool's mate: White to move and checkmated
        let board =
            Board::from_str("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert_eq!(evaluate(&board, Color::White), Score::mated());
        assert_eq!(evaluate(&board, Color::Black), Score::mate());
    }

    #[test]
    fn stalemate_is_exactly_zero() {
        let board = Board::from_str("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(evaluate(&board, Color::White), Score::draw());
        assert_eq!(evaluate(&board, Color::Black), Score::draw());
    }

    #[test]
    fn insufficient_material_is_exactly_zero() {
        let board = Board::from_str("4k3/8/8/8/8/8/8/4KB2 w - - 0 1").unwrap();
        assert_eq!(evaluate(&board, Color::White), Score::draw());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let board = Board::default();
        let first = evaluate(&board, Color::White);
        assert_eq!(evaluate(&board, Color::White), first);
        assert_eq!(board, Board::default());
    }
}

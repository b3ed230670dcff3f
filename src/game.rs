//! Game state wrapper around the rules engine.
//!
//! Tracks a playable game for a host application: validated move
//! application, the move history, and game-over classification. The rules
//! engine's boards are copy-make, so undo is realized by replaying the
//! history from the initial position.

use std::str::FromStr;

use crate::rules;
use crate::types::{Board, BoardStatus, Color, Move, MoveGen, Square};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

/// A game in progress.
///
/// Fifty-move and repetition draws are not tracked; the rules engine's
/// board carries no reversible-move history.
pub struct Game {
    initial: Board,
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Start a game from the standard initial position
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    /// Start a game from an arbitrary position
    pub fn from_board(board: Board) -> Self {
        Self {
            initial: board,
            board,
            history: Vec::new(),
        }
    }

    /// Start a game from a FEN string
    pub fn from_fen(fen: &str) -> Result<Self, chess::Error> {
        Ok(Self::from_board(Board::from_str(fen)?))
    }

    /// The current position
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Moves played so far
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Check whether a move is legal in the current position
    pub fn is_legal(&self, m: Move) -> bool {
        self.board.legal(m)
    }

    /// Play a move if it is legal. Returns whether it was applied.
    pub fn make_move(&mut self, m: Move) -> bool {
        if !self.is_legal(m) {
            return false;
        }
        self.board = self.board.make_move_new(m);
        self.history.push(m);
        true
    }

    /// Take back the last move, returning it. Replays the remaining
    /// history from the initial position.
    pub fn undo(&mut self) -> Option<Move> {
        let undone = self.history.pop()?;
        let mut board = self.initial;
        for &m in &self.history {
            board = board.make_move_new(m);
        }
        self.board = board;
        Some(undone)
    }

    /// All legal moves of the piece standing on `square`
    pub fn moves_from(&self, square: Square) -> Vec<Move> {
        MoveGen::new_legal(&self.board)
            .filter(|m| m.get_source() == square)
            .collect()
    }

    /// Check whether the game has ended
    pub fn is_over(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    /// How the game ended, if it has
    pub fn result(&self) -> Option<GameResult> {
        match self.board.status() {
            BoardStatus::Checkmate => Some(GameResult::Checkmate {
                // The side to move is the one that got mated
                winner: !self.board.side_to_move(),
            }),
            BoardStatus::Stalemate => Some(GameResult::Stalemate),
            BoardStatus::Ongoing => {
                if rules::insufficient_material(&self.board) {
                    Some(GameResult::InsufficientMaterial)
                } else {
                    None
                }
            }
        }
    }

    /// The current position in FEN notation
    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Reset to the initial position, clearing the history
    pub fn reset(&mut self) {
        self.board = self.initial;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

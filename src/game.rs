use std::collections::HashSet;
use serde::ser::SerializeStruct;
use serde::Serializer;
use crate::board::{new_board, Board, Color, Square};
use crate::moves::{apply_move, can_move_no_check, is_check, legal_moves};

/// The committed position and whose turn it is. Only a legal `do_move` changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
}

pub fn create_initial_state() -> GameState {
    GameState::new()
}

impl GameState {
    pub fn new() -> Self {
        GameState { board: new_board(), side_to_move: Color::White }
    }

    /// Starts from an arbitrary position. Each side is expected to have exactly one king.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        GameState { board, side_to_move }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn can_move(&self, old: Square, new: Square) -> bool {
        can_move_no_check(&self.board, self.side_to_move, old, new)
    }

    pub fn do_move(&mut self, old: Square, new: Square) -> bool {
        if !self.can_move(old, new) {
            log::trace!("{:?} cannot move {} -> {}", self.side_to_move, old, new);
            return false;
        }
        self.board = apply_move(&self.board, old, new);
        log::debug!("{:?} moved {} -> {}", self.side_to_move, old, new);
        self.side_to_move = self.side_to_move.opposite();
        true
    }

    pub fn is_in_check(&self) -> bool {
        is_check(&self.board, self.side_to_move)
    }

    pub fn legal_moves(&self, from: Square) -> HashSet<Square> {
        legal_moves(&self.board, self.side_to_move, from)
    }

    /// Every legal (from, to) pair for the side to move, ordered by origin then destination.
    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        let mut moves: Vec<(Square, Square)> = self.board.pieces()
            .filter(|&(_, piece)| piece.color == self.side_to_move)
            .flat_map(|(from, _)| self.legal_moves(from).into_iter().map(move |to| (from, to)))
            .collect();
        moves.sort();
        moves
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl serde::Serialize for GameState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GameState", 3)?;
        state.serialize_field("board", &self.board)?;
        state.serialize_field("side_to_move", &self.side_to_move)?;
        state.serialize_field("in_check", &self.is_in_check())?;
        state.end()
    }
}

use std::collections::HashSet;
use crate::board::{Board, Color, Piece, PieceType, Square};

fn rank_delta(old: Square, new: Square) -> i8 {
    new.rank() as i8 - old.rank() as i8
}

fn file_delta(old: Square, new: Square) -> i8 {
    new.file() as i8 - old.file() as i8
}

pub fn king_geometry(old: Square, new: Square) -> bool {
    rank_delta(old, new).abs() <= 1 && file_delta(old, new).abs() <= 1
}

pub fn rook_geometry(old: Square, new: Square) -> bool {
    old.rank() == new.rank() || old.file() == new.file()
}

pub fn bishop_geometry(old: Square, new: Square) -> bool {
    rank_delta(old, new).abs() == file_delta(old, new).abs()
}

pub fn queen_geometry(old: Square, new: Square) -> bool {
    rook_geometry(old, new) || bishop_geometry(old, new)
}

pub fn knight_geometry(old: Square, new: Square) -> bool {
    rank_delta(old, new).abs() * file_delta(old, new).abs() == 2
}

/// Non-capturing pawn step: one rank forward, or two from the home rank.
pub fn pawn_walk_geometry(color: Color, old: Square, new: Square) -> bool {
    let forward = color.forward();
    let ranks = rank_delta(old, new);
    old.file() == new.file()
        && (ranks == forward || (old.rank() == color.pawn_home_rank() && ranks == 2 * forward))
}

pub fn pawn_take_geometry(color: Color, old: Square, new: Square) -> bool {
    file_delta(old, new).abs() == 1 && rank_delta(old, new) == color.forward()
}

/// True when no piece stands strictly between `old` and `new`.
/// Squares that do not share a rank, file or diagonal have nothing in between.
pub fn path_is_clear(board: &Board, old: Square, new: Square) -> bool {
    let (ranks, files) = (rank_delta(old, new), file_delta(old, new));
    if old == new || !(ranks == 0 || files == 0 || ranks.abs() == files.abs()) {
        return true;
    }
    let step = (ranks.signum(), files.signum());
    let mut current = old.offset(step.0, step.1);
    while let Some(square) = current {
        if square == new {
            return true;
        }
        if board.get(square).is_some() {
            return false;
        }
        current = square.offset(step.0, step.1);
    }
    true
}

fn move_pawn(board: &Board, color: Color, old: Square, new: Square) -> bool {
    match board.get(new) {
        None => pawn_walk_geometry(color, old, new) && path_is_clear(board, old, new),
        Some(_) => pawn_take_geometry(color, old, new),
    }
}

/// Ownership, occupancy and movement geometry for `side`, without looking at what the move does
/// to `side`'s own king.
pub fn can_move_piece(board: &Board, side: Color, old: Square, new: Square) -> bool {
    if old == new {
        return false;
    }
    let piece = match board.get(old) {
        None => return false,
        Some(p) => p,
    };
    if piece.color != side {
        return false;
    }
    if board.get(new).is_some_and(|dest| dest.color == side) {
        return false;
    }
    match piece.kind {
        PieceType::King => king_geometry(old, new),
        PieceType::Queen => queen_geometry(old, new) && path_is_clear(board, old, new),
        PieceType::Rook => rook_geometry(old, new) && path_is_clear(board, old, new),
        PieceType::Bishop => bishop_geometry(old, new) && path_is_clear(board, old, new),
        PieceType::Knight => knight_geometry(old, new),
        PieceType::Pawn => move_pawn(board, piece.color, old, new),
    }
}

/// Returns a new board with the piece at `old` moved to `new`. A pawn reaching its last rank
/// becomes a queen. No legality checks are made.
pub fn apply_move(board: &Board, old: Square, new: Square) -> Board {
    let mut new_board = board.clone();
    let piece = match board.get(old) {
        None => return new_board,
        Some(p) => p,
    };
    let piece = if piece.kind == PieceType::Pawn && new.rank() == piece.color.last_rank() {
        Piece::new(piece.color, PieceType::Queen)
    } else {
        piece
    };
    new_board.set(old, None);
    new_board.set(new, Some(piece));
    new_board
}

/// Whether `color`'s king could be captured by the opponent on `board`.
pub fn is_check(board: &Board, color: Color) -> bool {
    let king = match board.king_position(color) {
        Some(square) => square,
        None => {
            log::warn!("No {:?} king on the board, treating it as not in check", color);
            return false;
        }
    };
    let attacker = color.opposite();
    board.pieces()
        .filter(|&(_, piece)| piece.color == attacker)
        .any(|(square, _)| can_move_piece(board, attacker, square, king))
}

pub fn can_move_no_check(board: &Board, side: Color, old: Square, new: Square) -> bool {
    can_move_piece(board, side, old, new) && !is_check(&apply_move(board, old, new), side)
}

pub fn legal_moves(board: &Board, side: Color, from: Square) -> HashSet<Square> {
    if !board.get(from).is_some_and(|piece| piece.color == side) {
        return HashSet::new();
    }
    Square::all()
        .filter(|&to| can_move_no_check(board, side, from, to))
        .collect()
}

use std::fmt;
use std::str::FromStr;
use serde::Serializer;
use crate::board::Color::{Black, White};
use crate::error::ChessError;

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;

const PAWN_HOME_RANK_WHITE: usize = 1;
const PAWN_HOME_RANK_BLACK: usize = 6;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Color {
    White, Black
}

impl Color {
    pub fn opposite(&self) -> Color {
        if self == &White {
            Black
        } else {
            White
        }
    }

    /// Rank step of a pawn of this color.
    pub fn forward(&self) -> i8 {
        match self {
            White => 1,
            Black => -1,
        }
    }

    pub fn pawn_home_rank(&self) -> usize {
        match self {
            White => PAWN_HOME_RANK_WHITE,
            Black => PAWN_HOME_RANK_BLACK,
        }
    }

    /// Rank on which a pawn of this color promotes.
    pub fn last_rank(&self) -> usize {
        match self {
            White => HEIGHT - 1,
            Black => 0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Piece { color, kind }
    }

    fn icon(&self) -> char {
        let icon = match self.kind {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Pawn => 'p',
        };
        if self.color == White { icon.to_ascii_uppercase() } else { icon }
    }
}

/// A square on the board, zero-based. Rank 0 is the white back rank, file 0 is the a-file.
///
/// Values can only be built through checked constructors, so every `Square` indexes the board safely.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: usize,
    file: usize,
}

impl Square {
    pub fn new(rank: usize, file: usize) -> Result<Square, ChessError> {
        if rank < HEIGHT && file < WIDTH {
            Ok(Square { rank, file })
        } else {
            Err(ChessError::InvalidSquare(format!("({}, {})", rank, file)))
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn file(&self) -> usize {
        self.file
    }

    /// Returns `None` when the step leaves the board.
    pub fn offset(&self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        (rank >= 0 && rank < HEIGHT as i8 && file >= 0 && file < WIDTH as i8)
            .then_some(Square { rank: rank as usize, file: file as usize })
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..HEIGHT).flat_map(|rank| (0..WIDTH).map(move |file| Square { rank, file }))
    }
}

impl FromStr for Square {
    type Err = ChessError;

    /// Algebraic notation: file letter `a`-`h` followed by rank digit `1`-`8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Square {
                rank: (rank - b'1') as usize,
                file: (file - b'a') as usize,
            }),
            _ => Err(ChessError::InvalidSquare(s.to_string())),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file as u8) as char, (b'1' + self.rank as u8) as char)
    }
}

impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: [[Option<Piece>; WIDTH]; HEIGHT],
}

impl Board {
    pub fn empty() -> Board {
        Board { squares: [new_empty(); HEIGHT] }
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank][square.file]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank][square.file] = piece;
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn king_position(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece == Piece::new(color, PieceType::King))
            .map(|(square, _)| square)
    }
}

/// Renders the board with rank 8 on top, white pieces upper case and `.` for empty cells.
pub fn to_string(board: &Board) -> String {
    let mut result: String = String::new();
    for row in (0 .. HEIGHT).rev() {
        for col in 0 .. WIDTH {
            let icon = match &board.squares[row][col] {
                None => '.',
                Some(p) => p.icon(),
            };
            result.push(icon);
        }
        result.push('\n');
    }
    let r = &result[0..result.len()-1];
    r.to_string()
}

impl serde::Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(to_string(self).as_str())
    }
}

fn new_pieces(color: Color) -> [Option<Piece>; WIDTH] {
    [
        Some(Piece::new(color, PieceType::Rook)),
        Some(Piece::new(color, PieceType::Knight)),
        Some(Piece::new(color, PieceType::Bishop)),
        Some(Piece::new(color, PieceType::Queen)),
        Some(Piece::new(color, PieceType::King)),
        Some(Piece::new(color, PieceType::Bishop)),
        Some(Piece::new(color, PieceType::Knight)),
        Some(Piece::new(color, PieceType::Rook))
    ]
}

fn new_pawns(color: Color) -> [Option<Piece>; WIDTH] {
    [Some(Piece::new(color, PieceType::Pawn)); WIDTH]
}

fn new_empty() -> [Option<Piece>; WIDTH] {
    [None; WIDTH]
}

pub fn new_board() -> Board {
    Board {
        squares: [
            new_pieces(White),
            new_pawns(White),
            new_empty(),
            new_empty(),
            new_empty(),
            new_empty(),
            new_pawns(Black),
            new_pieces(Black)
        ],
    }
}

#[cfg(test)]
mod test {
    use crate::board::{new_board, to_string, Board, Color, Piece, PieceType, Square};
    use crate::board::Color::{Black, White};
    use crate::error::ChessError;

    fn sq(s: &str) -> Square {
        s.parse().expect("Valid square expected")
    }

    #[test]
    fn test_parse_square() {
        assert_eq!(sq("a1"), Square::new(0, 0).unwrap());
        assert_eq!(sq("h8"), Square::new(7, 7).unwrap());
        let e2 = sq("e2");
        assert_eq!((e2.rank(), e2.file()), (1, 4));

        for bad in ["i1", "a9", "a0", "a", "e22", "", "E2", "2e"] {
            assert_eq!(bad.parse::<Square>(), Err(ChessError::InvalidSquare(bad.to_string())));
        }
    }

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(8, 0).is_err());
        assert!(Square::new(0, 8).is_err());
        assert_eq!(Square::all().count(), 64);

        assert_eq!(sq("a1").offset(-1, 0), None);
        assert_eq!(sq("h8").offset(0, 1), None);
        assert_eq!(sq("b1").offset(2, 1), Some(sq("c3")));
    }

    #[test]
    fn test_square_display() {
        for s in ["a1", "e4", "h8", "c7"] {
            assert_eq!(sq(s).to_string(), s);
        }
        assert_eq!(serde_json::to_string(&sq("d8")).unwrap(), "\"d8\"");
    }

    #[test]
    fn test_color() {
        assert_eq!(White.opposite(), Black);
        assert_eq!(Black.opposite(), White);
        assert_eq!(White.forward(), 1);
        assert_eq!(Black.forward(), -1);
        assert_eq!(White.last_rank(), 7);
        assert_eq!(Black.last_rank(), 0);
    }

    #[test]
    fn test_new_board() {
        let board = new_board();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.get(sq("e1")), Some(Piece::new(White, PieceType::King)));
        assert_eq!(board.get(sq("d8")), Some(Piece::new(Black, PieceType::Queen)));
        assert_eq!(board.get(sq("g7")), Some(Piece::new(Black, PieceType::Pawn)));
        assert_eq!(board.get(sq("e4")), None);
        assert_eq!(board.king_position(White), Some(sq("e1")));
        assert_eq!(board.king_position(Black), Some(sq("e8")));
        assert_eq!(Board::empty().king_position(Color::White), None);
    }

    #[test]
    fn test_to_string() {
        let expected = "rnbqkbnr\n\
                        pppppppp\n\
                        ........\n\
                        ........\n\
                        ........\n\
                        ........\n\
                        PPPPPPPP\n\
                        RNBQKBNR";
        assert_eq!(to_string(&new_board()), expected);
        let json = serde_json::to_string(&Board::empty()).unwrap();
        assert!(json.starts_with("\"........\\n........"));
    }
}

/// Errors raised while decoding input at the edge of the crate.
///
/// Move legality itself never fails: an illegal move is just `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

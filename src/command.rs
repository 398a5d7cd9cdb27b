use std::str::FromStr;
use crate::board::Square;
use crate::error::ChessError;

/// One line of driver input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Move(Square, Square),
    Moves(Square),
    Random,
    Json,
    Quit,
}

impl FromStr for Command {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            ["quit"] | ["exit"] => Ok(Command::Quit),
            ["random"] => Ok(Command::Random),
            ["json"] => Ok(Command::Json),
            ["moves", square] => Ok(Command::Moves(square.parse()?)),
            [from, to] => Ok(Command::Move(from.parse()?, to.parse()?)),
            _ => Err(ChessError::UnknownCommand(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::board::Square;
    use crate::command::Command;
    use crate::error::ChessError;

    fn sq(s: &str) -> Square {
        s.parse().expect("Valid square expected")
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("e2 e4".parse::<Command>(), Ok(Command::Move(sq("e2"), sq("e4"))));
        assert_eq!("  g1   f3 ".parse::<Command>(), Ok(Command::Move(sq("g1"), sq("f3"))));
        assert_eq!("moves b1".parse::<Command>(), Ok(Command::Moves(sq("b1"))));
        assert_eq!("random".parse::<Command>(), Ok(Command::Random));
        assert_eq!("json".parse::<Command>(), Ok(Command::Json));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("e2 e9".parse::<Command>(), Err(ChessError::InvalidSquare("e9".to_string())));
        assert_eq!("moves z1".parse::<Command>(), Err(ChessError::InvalidSquare("z1".to_string())));
        assert_eq!("e2e4".parse::<Command>(), Err(ChessError::UnknownCommand("e2e4".to_string())));
        assert_eq!("castle long now".parse::<Command>(), Err(ChessError::UnknownCommand("castle long now".to_string())));
    }
}

use super::types::tiles::{Hai, Suhai};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgariError {
    /// Hand notation could not be parsed.
    Parse { input: String, message: String },
    /// A numbered tile with a rank outside 1-9.
    InvalidTile(Hai),
    /// More than four copies of one tile.
    TooManyCopies { tile: Hai, count: u8 },
    /// More red fives declared than fives in the hand.
    AkaDoraExceedsFives { suit: Suhai, declared: u8, available: u8 },
}

impl fmt::Display for AgariError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgariError::Parse { input, message } => {
                write!(f, "Parse error on '{}': {}", input, message)
            }
            AgariError::InvalidTile(tile) => write!(f, "Invalid tile: {:?}", tile),
            AgariError::TooManyCopies { tile, count } => {
                write!(f, "Invalid hand: {} copies of {} (at most 4)", count, tile)
            }
            AgariError::AkaDoraExceedsFives {
                suit,
                declared,
                available,
            } => write!(
                f,
                "Invalid input: {} red 5{} declared but only {} in hand",
                declared,
                suit.letter(),
                available
            ),
        }
    }
}

impl std::error::Error for AgariError {}

pub type CalcResult<T> = Result<T, AgariError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_tile() {
        let err = AgariError::TooManyCopies {
            tile: Hai::Suhai(3, Suhai::Pinzu),
            count: 5,
        };
        assert_eq!(err.to_string(), "Invalid hand: 5 copies of 3p (at most 4)");

        let err = AgariError::AkaDoraExceedsFives {
            suit: Suhai::Manzu,
            declared: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Invalid input: 2 red 5m declared but only 1 in hand"
        );
    }
}

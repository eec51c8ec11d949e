use std::fmt;

/// Game-specific error types
#[derive(Debug)]
pub enum GameError {
    /// No player names were supplied
    EmptyRoster,
    /// Seat does not belong to an alive player
    UnknownPlayer(usize),
    /// No game has been started yet
    NotStarted,
    /// The round is over; only a reset re-arms it
    Disarmed,
    /// Invalid input provided by user
    InvalidInput(String),
    /// Failed to parse user input
    ParseError(String),
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::EmptyRoster => write!(f, "at least one player is required"),
            GameError::UnknownPlayer(seat) => write!(f, "seat {} is not an alive player", seat),
            GameError::NotStarted => write!(f, "no game has been started"),
            GameError::Disarmed => write!(f, "the round is over, reset to play again"),
            GameError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GameError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::ParseError(err.to_string())
    }
}

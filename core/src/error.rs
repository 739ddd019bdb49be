use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Board already finished, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, BoardError>;

/// Failure to load a [`BoardConfig`](crate::BoardConfig) from text.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Malformed board configuration")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] BoardError),
}

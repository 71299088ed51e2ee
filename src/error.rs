use std::path::PathBuf;

use crate::game::{GameOutcome, OutOfBounds, Position};

/// Why a move was refused by the rules. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("{input} moves are not played in {game}")]
    WrongInput {
        input: &'static str,
        game: &'static str,
    },

    #[error("no piece of the current player at {0}")]
    NotYourPiece(Position),

    #[error("destination {0} is occupied")]
    DestinationOccupied(Position),

    #[error("{from} -> {to} is not a forward diagonal step or jump")]
    BadDirection { from: Position, to: Position },

    #[error("no opponent piece to capture at {0}")]
    NothingToCapture(Position),
}

/// Errors returned when submitting a move to a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("game is already over: {0}")]
    GameOver(GameOutcome),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

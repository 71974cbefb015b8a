use std::path::PathBuf;

/// Why a tile could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    #[error("column {0} is out of range (expected 0-6)")]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors from playing a move in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("the round is already over")]
    RoundOver,

    #[error("the computer agent picked no column while columns were open")]
    NoColumnChosen,

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMoveError),
}

/// Errors from reading a board back from its text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 6 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {width} slots, expected 7")]
    RowWidth { row: usize, width: usize },

    #[error("unknown symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
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

    #[error("config validation error: {0}")]
    Validation(String),
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtfError {
    #[error("Invalid symbol '{symbol}' encountered at row {row}, column {col}")]
    InvalidSymbol { symbol: char, row: usize, col: usize },

    #[error("Invalid symbol '\\x{byte:02x}' encountered at row {row}, column {col}")]
    InvalidByte { byte: u8, row: usize, col: usize },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize transition system: {0}")]
    Json(#[from] serde_json::Error),
}

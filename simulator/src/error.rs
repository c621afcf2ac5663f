use thiserror::Error;

/// Errors raised by the simulation core.
#[derive(Debug, Error)]
pub enum SimError {
    /// A coordinate fell outside the grid before any wrapping was applied.
    #[error("cell (row {row}, col {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("grid text parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SimError>;

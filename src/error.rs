//! Error types for loading word lists and building boards.

use thiserror::Error;

/// Everything that can go wrong outside the search itself. Trie operations and
/// the search never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A board must have at least one row.
    #[error("Invalid board dimension: {0}")]
    InvalidDimension(usize),

    #[error("Board of dimension {dimension} needs {expected} cells, but {found} were given")]
    CellCountMismatch {
        dimension: usize,
        expected: usize,
        found: usize,
    },

    /// Rows given explicitly do not form a square.
    #[error("Board is not square: {rows} rows, but a row of width {width}")]
    NotSquare { rows: usize, width: usize },

    #[error("Malformed word list line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

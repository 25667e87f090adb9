use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrassenError {
    #[error("invalid matrix dimension: {0}")]
    InvalidDimension(usize),
    #[error("dimension mismatch: [{a}x{a}] @ [{b}x{b}]")]
    DimensionMismatch { a: usize, b: usize },
    #[error("invalid cutoff: {0} (must be at least 1)")]
    InvalidCutoff(usize),
    #[error("data length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("row {row} has {len} entries but the matrix has dimension {dimension}")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },
    #[error("index ({row}, {col}) out of bounds for dimension {dimension}")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        dimension: usize,
    },
    #[error("verification mismatch at ({row}, {col}): expected {expected}, got {got}")]
    VerificationMismatch {
        row: usize,
        col: usize,
        expected: String,
        got: String,
    },
}

pub type Result<T> = std::result::Result<T, StrassenError>;

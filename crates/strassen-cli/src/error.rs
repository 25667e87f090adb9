use std::path::PathBuf;

use strassen_core::StrassenError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to open file {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Usage(String),
    #[error("line {line}: invalid integer {value:?}")]
    InvalidInteger { line: usize, value: String },
    #[error("expected {expected} matrix entries, got {got}")]
    EntryCount { expected: usize, got: usize },
    #[error("matrix error: {0}")]
    Core(#[from] StrassenError),
}

pub type Result<T> = std::result::Result<T, CliError>;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PsalmzError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("File is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("Truncated read: expected {expected} bytes, got {read}")]
    Truncated { expected: u64, read: u64 },

    #[error("File is not valid UTF-8: {}", .0.display())]
    Encoding(PathBuf),

    #[error("Line {line}: expected an integer id, found {content:?}")]
    Format { line: usize, content: String },

    #[error("Line {line}: id {id} is out of order (follows {previous})")]
    Unsorted { line: usize, previous: i64, id: i64 },

    #[error("Duplicate id: {id}")]
    DuplicateId { id: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PsalmzError>;

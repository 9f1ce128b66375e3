//! # File Loader
//!
//! Reads a book file fully into memory. The buffer is sized from the file's
//! metadata, and a read that comes up short is reported as
//! [`PsalmzError::Truncated`] instead of being parsed as if it were complete.

use crate::error::{PsalmzError, Result};
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The full content of a book file, handed to the parser by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    path: PathBuf,
    content: String,
}

impl Buffer {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

/// Loads the whole file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Buffer> {
    let path = path.as_ref();

    let metadata = std::fs::metadata(path).map_err(|e| map_open_error(e, path))?;
    if metadata.is_dir() {
        return Err(PsalmzError::NotAFile(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| map_open_error(e, path))?;
    let bytes = read_exact_len(file, metadata.len()).map_err(|e| match e {
        PsalmzError::EmptyFile(_) => PsalmzError::EmptyFile(path.to_path_buf()),
        other => other,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded file");

    let content = String::from_utf8(bytes).map_err(|_| PsalmzError::Encoding(path.to_path_buf()))?;
    Ok(Buffer::new(path, content))
}

/// Reads exactly `expected` bytes from `reader`.
///
/// Fails with `EmptyFile` when nothing could be read and with `Truncated`
/// when the reader ends early. Bytes beyond `expected` are ignored.
pub fn read_exact_len<R: Read>(reader: R, expected: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
    let read = reader.take(expected).read_to_end(&mut bytes)? as u64;

    if read == 0 {
        return Err(PsalmzError::EmptyFile(PathBuf::new()));
    }
    if read < expected {
        return Err(PsalmzError::Truncated { expected, read });
    }
    Ok(bytes)
}

fn map_open_error(err: io::Error, path: &Path) -> PsalmzError {
    match err.kind() {
        ErrorKind::NotFound => PsalmzError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => PsalmzError::PermissionDenied(path.to_path_buf()),
        _ => PsalmzError::Io(err),
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating or writing test files.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Bodies and targets handed to the writer are not index-aligned.
    #[error("test files list size ({targets}) not equal to the size of the list of test bodies ({bodies})")]
    SizeMismatch { bodies: usize, targets: usize },

    /// Filesystem failure, passed through untouched.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A class could not be described by the type source.
    #[error("{0}")]
    Descriptor(String),
}

impl GenerateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;

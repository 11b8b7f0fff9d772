//! Error type for loading, writing and combining matrices

use spmat_core::SpmatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the `spmat` crate
///
/// Format, range, dimension and operation errors come from the core as
/// [`SpmatError`]; everything else involves the filesystem or the thread pool.
#[derive(Error, Debug)]
pub enum Error {
    /// Matrix format, range, dimension or operation error
    #[error(transparent)]
    Matrix(#[from] SpmatError),

    /// Input path does not exist
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other read or write failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dedicated worker pool could not be created
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    /// The core error, if this is one
    pub fn as_matrix_error(&self) -> Option<&SpmatError> {
        match self {
            Error::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for `spmat` operations
pub type Result<T> = std::result::Result<T, Error>;

//! File I/O for the text matrix format
//!
//! Reading and writing happen here; parsing and rendering stay in
//! [`SparseMatrix`].

use crate::error::{Error, Result};
use crate::store::SparseMatrix;
use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};
use tracing::debug;

/// Read and parse a matrix file
///
/// A missing path is reported as [`Error::NotFound`]; other read failures as
/// [`Error::Io`]; format problems as [`Error::Matrix`].
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| io_error(path, source))?;

    let matrix = SparseMatrix::parse(&text)?;
    debug!(
        path = %path.display(),
        rows = matrix.num_rows(),
        cols = matrix.num_cols(),
        nnz = matrix.nnz(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Render a matrix and write it to `path`, replacing any existing file
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, matrix.render()).map_err(|source| io_error(path, source))?;
    debug!(path = %path.display(), nnz = matrix.nnz(), "wrote matrix");
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> Error {
    if source.kind() == ErrorKind::NotFound {
        Error::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

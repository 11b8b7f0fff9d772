//! Core matrix abstraction trait
//!
//! This module defines the read-only view shared by sparse matrix
//! implementations and the validation helpers that inspect them.

/// Read access to a sparse integer matrix
///
/// Absent entries read as zero, so callers can treat any implementation
/// like a dense matrix without special-casing missing values.
pub trait MatrixView {
    /// Get an element at the specified position
    ///
    /// Returns `0` if the element is not stored or if the position is out
    /// of bounds.
    fn get_element(&self, row: usize, col: usize) -> i64;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Fraction of the dense space holding non-zero elements
    fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        self.nnz() as f64 / (rows as f64 * cols as f64)
    }
}

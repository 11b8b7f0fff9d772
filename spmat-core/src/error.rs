//! Error types for sparse matrix operations

/// Errors that can occur while loading or combining sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Malformed header or entry line (1-based line number)
    FormatError { line: usize },
    /// Entry coordinates outside the declared dimensions
    RangeError {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    /// Non-positive row or column count
    InvalidDimensions { rows: i64, cols: i64 },
    /// Operand shapes incompatible for the named operation
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Operation selector is not add, subtract or multiply
    UnknownOperation,
    /// Result value at `(row, col)` does not fit in `i64`
    Overflow {
        op: &'static str,
        row: usize,
        col: usize,
    },
}

/// Coarse classification used by callers to report failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Raised while reading a matrix
    Load,
    /// Raised while selecting or running an operation
    Operation,
}

impl SpmatError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::FormatError { .. }
            | SpmatError::RangeError { .. }
            | SpmatError::InvalidDimensions { .. } => ErrorCategory::Load,
            SpmatError::DimensionMismatch { .. }
            | SpmatError::UnknownOperation
            | SpmatError::Overflow { .. } => ErrorCategory::Operation,
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::FormatError { line } => {
                write!(f, "Input file has wrong format (line {line})")
            }
            SpmatError::RangeError {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Invalid row/column index in input: ({row}, {col}) outside {rows}x{cols}"
            ),
            SpmatError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid number of rows or columns: {rows}x{cols}")
            }
            SpmatError::DimensionMismatch { op, left, right } => write!(
                f,
                "Incompatible dimensions for {op}: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            SpmatError::UnknownOperation => write!(f, "Invalid operation selected"),
            SpmatError::Overflow { op, row, col } => {
                write!(f, "Integer overflow during {op} at ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;

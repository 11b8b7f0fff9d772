//! Arithmetic over sparse matrices
//!
//! Every operation reads its operands by reference and returns a freshly
//! allocated result. Only stored entries are visited; the dense index space
//! is never scanned. A value that leaves the `i64` range fails the whole
//! operation with [`SpmatError::Overflow`].

use crate::config::EngineConfig;
use crate::store::SparseMatrix;
use hashbrown::{HashMap, HashSet};
use rayon::prelude::*;
use spmat_core::{validate_inner_dimensions, validate_same_shape, Result, SpmatError};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Element-wise sum of two matrices of equal shape
pub fn add(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    elementwise("addition", a, b, i64::checked_add)
}

/// Element-wise difference of two matrices of equal shape
pub fn subtract(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    elementwise("subtraction", a, b, i64::checked_sub)
}

/// Apply `combine` over the union of both operands' non-zero coordinates
///
/// `combine` returns `None` when the result does not fit.
fn elementwise<F>(
    op: &'static str,
    a: &SparseMatrix,
    b: &SparseMatrix,
    combine: F,
) -> Result<SparseMatrix>
where
    F: Fn(i64, i64) -> Option<i64>,
{
    validate_same_shape(op, a, b)?;

    let mut result = SparseMatrix::from_header(a.header());
    let rows: HashSet<usize> = a.stored_rows().chain(b.stored_rows()).collect();

    for row in rows {
        let cols: HashSet<usize> = a.row(row).chain(b.row(row)).map(|(col, _)| col).collect();
        for col in cols {
            let value = combine(a.get(row, col), b.get(row, col))
                .ok_or(SpmatError::Overflow { op, row, col })?;
            // set drops sums that cancel to zero
            result.set(row, col, value);
        }
    }

    debug!(op, nnz = result.nnz(), "element-wise operation complete");
    Ok(result)
}

/// `acc + x * y`, or [`SpmatError::Overflow`] at `(row, col)`
fn multiply_accumulate(acc: i64, x: i64, y: i64, row: usize, col: usize) -> Result<i64> {
    x.checked_mul(y)
        .and_then(|product| acc.checked_add(product))
        .ok_or(SpmatError::Overflow {
            op: "multiplication",
            row,
            col,
        })
}

/// Matrix product `a * b`
///
/// Requires `a.num_cols() == b.num_rows()`. For each non-zero `a[i, k]`
/// the non-zeros of row `k` of `b` are accumulated into row `i` of the
/// result, so the work is proportional to the number of matching pairs.
pub fn multiply(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    validate_inner_dimensions(a, b)?;

    let mut result = SparseMatrix::new(a.num_rows(), b.num_cols())?;

    for (i, k, x) in a.nonzeros() {
        for (j, y) in b.row(k) {
            let value = multiply_accumulate(result.get(i, j), x, y, i, j)?;
            result.set(i, j, value);
        }
    }

    debug!(nnz = result.nnz(), "multiplication complete");
    Ok(result)
}

/// Matrix product computed in parallel, one task per stored row of `a`
///
/// Each task owns a single result row and only reads the operands; rows are
/// written into the result on the calling thread. Produces exactly the same
/// matrix as [`multiply`].
pub fn multiply_parallel(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    validate_inner_dimensions(a, b)?;

    let mut result = SparseMatrix::new(a.num_rows(), b.num_cols())?;
    let rows: Vec<usize> = a.stored_rows().collect();

    let products: Vec<(usize, HashMap<usize, i64>)> = rows
        .par_iter()
        .map(|&i| -> Result<(usize, HashMap<usize, i64>)> {
            let mut acc: HashMap<usize, i64> = HashMap::new();
            for (k, x) in a.row(i) {
                for (j, y) in b.row(k) {
                    let slot = acc.entry(j).or_insert(0);
                    *slot = multiply_accumulate(*slot, x, y, i, j)?;
                }
            }
            Ok((i, acc))
        })
        .collect::<Result<Vec<_>>>()?;

    for (i, acc) in products {
        for (j, value) in acc {
            result.set(i, j, value);
        }
    }

    debug!(
        rows = rows.len(),
        nnz = result.nnz(),
        "parallel multiplication complete"
    );
    Ok(result)
}

/// The arithmetic operations a caller can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Run the operation sequentially
    pub fn apply(self, a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
        }
    }

    /// Run the operation with the strategy chosen by `config`
    pub fn apply_with(
        self,
        a: &SparseMatrix,
        b: &SparseMatrix,
        config: &EngineConfig,
    ) -> crate::Result<SparseMatrix> {
        if self != Operation::Multiply || !config.use_parallel(a.nnz()) {
            trace!(op = %self, "sequential strategy");
            return Ok(self.apply(a, b)?);
        }

        match config.threads {
            Some(threads) => {
                trace!(threads, "parallel strategy on dedicated pool");
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                Ok(pool.install(|| multiply_parallel(a, b))?)
            }
            None => {
                trace!("parallel strategy on global pool");
                Ok(multiply_parallel(a, b)?)
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = SpmatError;

    /// Accepts the operation name (any case) or its menu number
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "1" => Ok(Operation::Add),
            "subtract" | "2" => Ok(Operation::Subtract),
            "multiply" | "3" => Ok(Operation::Multiply),
            _ => Err(SpmatError::UnknownOperation),
        }
    }
}

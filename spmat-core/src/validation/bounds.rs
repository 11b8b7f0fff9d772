//! Dimension and index validation
//!
//! Pure checks shared by the text reader and the arithmetic operations.

use crate::{MatrixView, SpmatError};

/// Validate a declared row/column count
///
/// Both counts must be positive and addressable on this platform.
pub fn validate_dimensions(rows: i64, cols: i64) -> Result<(usize, usize), SpmatError> {
    let invalid = SpmatError::InvalidDimensions { rows, cols };

    if rows <= 0 || cols <= 0 {
        return Err(invalid);
    }

    let nrows = usize::try_from(rows).map_err(|_| invalid)?;
    let ncols = usize::try_from(cols).map_err(|_| invalid)?;

    Ok((nrows, ncols))
}

/// Validate entry coordinates against `rows x cols`
pub fn validate_index(
    row: i64,
    col: i64,
    rows: usize,
    cols: usize,
) -> Result<(usize, usize), SpmatError> {
    let out_of_range = SpmatError::RangeError {
        row,
        col,
        rows,
        cols,
    };

    let r = usize::try_from(row).map_err(|_| out_of_range)?;
    let c = usize::try_from(col).map_err(|_| out_of_range)?;

    if r >= rows || c >= cols {
        return Err(out_of_range);
    }

    Ok((r, c))
}

/// Require identical shapes, as element-wise operations do
pub fn validate_same_shape<A, B>(op: &'static str, a: &A, b: &B) -> Result<(), SpmatError>
where
    A: MatrixView + ?Sized,
    B: MatrixView + ?Sized,
{
    if a.dimensions() != b.dimensions() {
        return Err(SpmatError::DimensionMismatch {
            op,
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    Ok(())
}

/// Require `a.cols == b.rows`, as matrix multiplication does
pub fn validate_inner_dimensions<A, B>(a: &A, b: &B) -> Result<(), SpmatError>
where
    A: MatrixView + ?Sized,
    B: MatrixView + ?Sized,
{
    let (_, a_cols) = a.dimensions();
    let (b_rows, _) = b.dimensions();

    if a_cols != b_rows {
        return Err(SpmatError::DimensionMismatch {
            op: "multiplication",
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shape(usize, usize);

    impl MatrixView for Shape {
        fn get_element(&self, _row: usize, _col: usize) -> i64 {
            0
        }

        fn dimensions(&self) -> (usize, usize) {
            (self.0, self.1)
        }

        fn nnz(&self) -> usize {
            0
        }
    }

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(validate_dimensions(1, 1), Ok((1, 1)));
        assert_eq!(validate_dimensions(3, 7), Ok((3, 7)));

        assert_eq!(
            validate_dimensions(0, 3),
            Err(SpmatError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            validate_dimensions(2, -1),
            Err(SpmatError::InvalidDimensions { rows: 2, cols: -1 })
        );
    }

    #[test]
    fn test_validate_index() {
        assert_eq!(validate_index(0, 0, 2, 3), Ok((0, 0)));
        assert_eq!(validate_index(1, 2, 2, 3), Ok((1, 2)));

        let err = |row: i64, col: i64| -> Result<(usize, usize), SpmatError> {
            Err(SpmatError::RangeError {
                row,
                col,
                rows: 2,
                cols: 3,
            })
        };
        assert_eq!(validate_index(2, 0, 2, 3), err(2, 0));
        assert_eq!(validate_index(0, 3, 2, 3), err(0, 3));
        assert_eq!(validate_index(-1, 0, 2, 3), err(-1, 0));
        assert_eq!(validate_index(0, -5, 2, 3), err(0, -5));
    }

    #[test]
    fn test_validate_shapes() {
        assert_eq!(validate_same_shape("addition", &Shape(2, 3), &Shape(2, 3)), Ok(()));
        assert_eq!(
            validate_same_shape("addition", &Shape(2, 3), &Shape(3, 2)),
            Err(SpmatError::DimensionMismatch {
                op: "addition",
                left: (2, 3),
                right: (3, 2),
            })
        );

        assert_eq!(validate_inner_dimensions(&Shape(2, 3), &Shape(3, 5)), Ok(()));
        assert!(matches!(
            validate_inner_dimensions(&Shape(2, 3), &Shape(2, 3)),
            Err(SpmatError::DimensionMismatch {
                op: "multiplication",
                ..
            })
        ));
    }
}

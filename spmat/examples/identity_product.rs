//! Multiply a matrix by the identity and print every step

use spmat::{add, multiply, subtract, SparseMatrix};

fn main() -> Result<(), spmat::SpmatError> {
    let a = SparseMatrix::parse(
        "rows=2
         cols=2
         (0, 0, 1)
         (0, 1, 2)
         (1, 0, 3)
         (1, 1, 4)",
    )?;
    let identity = SparseMatrix::parse("rows=2\ncols=2\n(0,0,1)\n(1,1,1)")?;

    println!("A:\n{a}");
    println!("I:\n{identity}");

    let product = multiply(&a, &identity)?;
    println!("A * I:\n{product}");
    assert_eq!(product, a);

    let sum = add(&a, &identity)?;
    println!("A + I:\n{sum}");
    println!("A + I - I:\n{}", subtract(&sum, &identity)?);

    // Shapes must agree for element-wise operations
    let wide = SparseMatrix::new(2, 3)?;
    if let Err(err) = add(&a, &wide) {
        println!("A + (2x3): {err}");
    }

    Ok(())
}

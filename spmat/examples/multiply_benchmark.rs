//! Time sequential against row-parallel multiplication on large matrices

use spmat::{load_matrix, multiply, multiply_parallel, write_matrix, SparseMatrix};
use std::time::Instant;

fn main() -> spmat::Result<()> {
    println!("Multiply Benchmark - sequential vs row-parallel");

    // Test parameters
    let n = 20_000;
    let nnz = 400_000;

    println!("Matrices: {n}x{n} with ~{nnz} elements each");

    // Generate test data
    let data_start = Instant::now();
    let a = SparseMatrix::from_entries(
        n,
        n,
        (0..nnz).map(|i| ((i * 31) % n, (i * 37) % n, (i % 17) as i64 - 8)),
    )?;
    let b = SparseMatrix::from_entries(
        n,
        n,
        (0..nnz).map(|i| ((i * 41) % n, (i * 43) % n, (i % 13) as i64 - 6)),
    )?;
    println!(
        "Data generation: {:.3}s ({} and {} non-zeros)",
        data_start.elapsed().as_secs_f64(),
        a.nnz(),
        b.nnz()
    );

    println!("\nMultiplying sequentially...");
    let start = Instant::now();
    let sequential = multiply(&a, &b)?;
    println!("Sequential: {:.3}s", start.elapsed().as_secs_f64());

    println!("\nMultiplying in parallel ({} threads)...", rayon::current_num_threads());
    let start = Instant::now();
    let parallel = multiply_parallel(&a, &b)?;
    println!("Parallel: {:.3}s", start.elapsed().as_secs_f64());

    assert_eq!(sequential, parallel);
    println!("Results match: {} non-zeros", parallel.nnz());

    // Round-trip the result through the text format
    let filename = "benchmark_product.txt";
    let start = Instant::now();
    write_matrix(filename, &parallel)?;
    let reloaded = load_matrix(filename)?;
    println!(
        "\nWrite + reload: {:.3}s ({}x{})",
        start.elapsed().as_secs_f64(),
        reloaded.num_rows(),
        reloaded.num_cols()
    );
    assert_eq!(reloaded, parallel);

    // Clean up
    std::fs::remove_file(filename).map_err(|source| spmat::Error::Io {
        path: filename.into(),
        source,
    })?;
    println!("Cleaned up test file");

    println!("\nBenchmark completed successfully!");
    Ok(())
}

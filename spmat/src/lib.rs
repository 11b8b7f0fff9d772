//! spmat - sparse integer matrices
//!
//! This library stores integer matrices sparsely (only non-zero entries),
//! loads and prints them in a small text format, and adds, subtracts and
//! multiplies them without ever scanning the dense index space.
//!
//! ## Architecture
//!
//! - **spmat-core**: text format, error taxonomy, validation and traits (no I/O)
//! - **spmat**: the matrix store, the arithmetic engine, file I/O and the CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat::{multiply, SparseMatrix};
//!
//! fn example() -> Result<(), spmat::SpmatError> {
//!     let a: SparseMatrix = "rows=2\ncols=2\n(0,0,1)\n(0,1,2)\n(1,0,3)\n(1,1,4)".parse()?;
//!     let identity = SparseMatrix::from_entries(2, 2, [(0, 0, 1), (1, 1, 1)])?;
//!
//!     let product = multiply(&a, &identity)?;
//!     assert_eq!(product, a);
//!     print!("{}", product.render());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **serde** (default): `Serialize` for matrices and entries, JSON output
//! - **cli** (default): the `spmat` command-line shell

// Re-export core abstractions and format definitions
pub use spmat_core::{
    // Core trait
    MatrixView,
    // Format definitions
    Entry, EntryReader, MatrixHeader,
    // Error handling
    ErrorCategory, SpmatError,
};

pub mod arithmetic;
pub mod config;
pub mod error;
pub mod file_io;
pub mod store;

pub use arithmetic::{add, multiply, multiply_parallel, subtract, Operation};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use file_io::{load_matrix, write_matrix};
pub use store::SparseMatrix;

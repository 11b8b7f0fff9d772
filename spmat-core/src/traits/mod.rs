//! Abstract interfaces for sparse matrix implementations

pub mod matrix;

pub use matrix::MatrixView;

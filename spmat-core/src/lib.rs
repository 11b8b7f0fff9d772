#![cfg_attr(not(test), no_std)]

//! spmat core - sparse integer matrix format definitions
//!
//! This crate provides the text format, error taxonomy, validation helpers
//! and traits shared by sparse matrix implementations. It performs no I/O
//! and does not allocate.

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{
    parse_integer, validate_dimensions, validate_inner_dimensions, validate_same_shape,
};

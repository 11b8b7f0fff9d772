//! Validation utilities for the sparse matrix format
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{
    validate_dimensions, validate_index, validate_inner_dimensions, validate_same_shape,
};
pub use parsing::{is_blank, parse_integer, strip_prefix_ignoring_whitespace};

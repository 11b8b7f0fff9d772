//! Text format definitions for sparse integer matrices
//!
//! ```text
//! rows=<positive integer>
//! cols=<positive integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Whitespace is insignificant inside every line and blank lines are ignored
//! anywhere in the input.

pub mod constants;
pub mod entry;
pub mod header;
pub mod reader;

pub use entry::Entry;
pub use header::MatrixHeader;
pub use reader::EntryReader;

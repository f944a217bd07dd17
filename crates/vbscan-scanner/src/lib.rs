//! External scanner for the line continuations of the tree-sitter VBA grammar.
//!
//! A line continuation is an `_` preceded by optional whitespace. Whether one
//! can start at a given position depends on what the parser expects there, so
//! the grammar leaves it to this scanner instead of a lexical rule.

#[cfg(test)]
mod tests;

mod external;
pub mod ffi;
mod line_continuation;

pub use external::{ExternalScanner, SERIALIZATION_BUFFER_SIZE};
pub use line_continuation::LineContinuationScanner;

#[doc(hidden)]
pub use paste::paste as __paste;

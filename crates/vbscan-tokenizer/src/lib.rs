//! A minimal VBA tokenizer that hosts the line continuation scanner.
//!
//! It only knows enough of the language (words, numbers, strings, comments and
//! line breaks) to give the scanner realistic positions to work with, and to
//! split source code into logical lines.


mod logical;
mod token;
mod tokenizer;

pub use logical::{join_lines, logical_lines, LogicalLine};
pub use token::Token;
pub use tokenizer::{tokenize, Tokenizer};

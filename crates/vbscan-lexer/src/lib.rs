//! The host side of the external scanner contract: the lexer capability a
//! scanner drives, the token kinds it can report and the table of kinds the
//! host currently accepts.


mod cursor;
mod lexer;
mod span;
mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use span::{Span, Spanned};
pub use token::{TokenType, ValidSymbols};

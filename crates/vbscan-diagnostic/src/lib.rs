//! Diagnostics reported while tokenizing VBA source.


mod diagnostic;
mod kind;

pub use diagnostic::{Diagnostic, DiagnosticBuilder};
pub use kind::DiagnosticKind;

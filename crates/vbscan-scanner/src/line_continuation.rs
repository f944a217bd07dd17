use tracing::trace;
use vbscan_lexer::{Lexer, TokenType, ValidSymbols};

use crate::ExternalScanner;

/// Scanner for the `_` that continues a logical line onto the next physical one.
///
/// Carries no state: every scan depends only on the input and the valid
/// symbols.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineContinuationScanner;

impl ExternalScanner for LineContinuationScanner {
    fn create() -> Self {
        Self
    }

    fn reset(&mut self) {}

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, _buffer: &[u8]) {}

    fn scan(&mut self, lexer: &mut impl Lexer, valid_symbols: ValidSymbols<'_>) -> bool {
        if !valid_symbols.is_valid(TokenType::LineContinuation) {
            return false;
        }

        // Skipped whitespace stays consumed even if there's no marker after it.
        let mut skipped = 0;
        while lexer.lookahead().is_some_and(char::is_whitespace) {
            lexer.advance(true);
            skipped += 1;
        }

        if lexer.lookahead() == Some('_') {
            lexer.advance(false);
            lexer.set_result_symbol(TokenType::LineContinuation);
            trace!(skipped, "line continuation");

            true
        } else {
            trace!(skipped, lookahead = ?lexer.lookahead(), "no line continuation");

            false
        }
    }
}

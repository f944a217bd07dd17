use crate::TokenType;

/// The view of the host's lexer that an external scanner gets during a scan.
///
/// The host owns the lexer. Scanners only borrow it for the duration of a
/// single call.
pub trait Lexer {
    /// The next unconsumed character, or `None` at the end of the input.
    fn lookahead(&self) -> Option<char>;

    /// Consumes the lookahead character. Skipped characters are treated as
    /// whitespace and left out of the token being scanned.
    fn advance(&mut self, skip: bool);

    /// Reports the kind of the token that was scanned.
    fn set_result_symbol(&mut self, token: TokenType);

    /// Whether the whole input was consumed.
    fn eof(&self) -> bool {
        self.lookahead().is_none()
    }
}

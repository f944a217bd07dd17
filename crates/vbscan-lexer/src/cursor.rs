use std::str::Chars;

use crate::{Lexer, Span, TokenType};

/// In-memory host lexer over a source string.
///
/// Cloning the cursor snapshots its position, which is how hosts roll back
/// after an external scanner declines a token.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
    token_start: usize,
    result_symbol: Option<TokenType>,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars(),
            token_start: 0,
            result_symbol: None,
        }
    }

    /// Byte offset of the lookahead character.
    pub fn position(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }

    /// The whole source, consumed or not.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset where the current token starts. Skipped characters move it
    /// forward.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// The [Span] of the current token, up to the lookahead.
    pub fn token_span(&self) -> Span {
        Span::new(self.token_start, self.position())
    }

    /// The token kind reported by the last successful scan of this token.
    pub fn result_symbol(&self) -> Option<TokenType> {
        self.result_symbol
    }

    /// The unconsumed source.
    pub fn rest(&self) -> &'a str {
        self.chars.as_str()
    }

    /// Starts a new token at the current position.
    pub fn start_token(&mut self) {
        self.token_start = self.position();
        self.result_symbol = None;
    }

    // region: Host-side consumption.
    pub fn bump(&mut self) -> Option<char> {
        self.chars.next()
    }

    pub fn bumped(&mut self, expecting: char) -> bool {
        self.peek_bump(|c| c == expecting).is_some()
    }

    pub fn eat_while(&mut self, condition: impl Fn(char) -> bool) -> &'a str {
        let rest = self.chars.as_str();
        let start = self.position();

        while self.peek_bump(&condition).is_some() {}

        &rest[..self.position() - start]
    }

    pub fn peek2(&self) -> Option<char> {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next()
    }

    fn peek_bump(&mut self, condition: impl Fn(char) -> bool) -> Option<char> {
        let c = self.lookahead()?;

        if condition(c) {
            self.bump()
        } else {
            None
        }
    }
    // endregion
}

impl Lexer for Cursor<'_> {
    fn lookahead(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn advance(&mut self, skip: bool) {
        if self.bump().is_some() && skip {
            self.token_start = self.position();
        }
    }

    fn set_result_symbol(&mut self, token: TokenType) {
        self.result_symbol = Some(token);
    }
}

use tracing::{debug, trace};
use vbscan_diagnostic::{Diagnostic, DiagnosticKind};
use vbscan_lexer::{Cursor, Lexer, Span, Spanned, TokenType, ValidSymbols};
use vbscan_scanner::ExternalScanner;

use crate::Token;

/// Drives an [ExternalScanner] over VBA source the way a tree-sitter parser
/// would: the scanner gets the first chance at every token, and the host
/// lexes whatever it declines.
pub struct Tokenizer<'a, S> {
    cursor: Cursor<'a>,
    scanner: S,
    tokens: Vec<Spanned<Token>>,
    diags: Vec<Diagnostic>,
}

impl<'a, S: ExternalScanner> Tokenizer<'a, S> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            scanner: S::create(),
            tokens: vec![],
            diags: vec![],
        }
    }

    pub fn tokenize(mut self) -> (Vec<Spanned<Token>>, Vec<Diagnostic>) {
        loop {
            if self.line_continuation() {
                continue;
            }

            self.blanks();
            match self.token() {
                Some(token) => self.tokens.push(token),
                None => break,
            }
        }

        debug!(
            tokens = self.tokens.len(),
            diags = self.diags.len(),
            "tokenized source"
        );
        self.scanner.destroy();

        (self.tokens, self.diags)
    }

    // region: External tokens.
    fn line_continuation(&mut self) -> bool {
        // A continuation has to continue something.
        let valid = self
            .tokens
            .last()
            .is_some_and(|token| token.token() != &Token::Newline);
        let valid_symbols = [valid; TokenType::COUNT];

        let checkpoint = self.cursor.clone();
        self.cursor.start_token();

        if self
            .scanner
            .scan(&mut self.cursor, ValidSymbols::new(&valid_symbols))
        {
            let span = self.cursor.token_span();
            trace!(?span, "external token");

            self.lint_continuation(checkpoint.position(), span);
            self.tokens.push(Spanned::new(Token::LineContinuation, span));

            true
        } else {
            // The scanner may have skipped whitespace before giving up.
            self.cursor = checkpoint;

            false
        }
    }

    fn lint_continuation(&mut self, whitespace_start: usize, marker: Span) {
        if whitespace_start == marker.start() {
            self.diags.push(
                Diagnostic::builder(DiagnosticKind::MissingSpace)
                    .label("add a space before this `_`", marker)
                    .build(),
            );
        } else if self.cursor.source()[whitespace_start..marker.start()]
            .contains(|c: char| matches!(c, '\n' | '\r'))
        {
            self.diags.push(
                Diagnostic::builder(DiagnosticKind::DetachedContinuation)
                    .label("not on the line it continues", marker)
                    .build(),
            );
        }

        let rest = self.cursor.rest();
        if rest.trim().is_empty() {
            self.diags.push(
                Diagnostic::builder(DiagnosticKind::ContinuationAtEof)
                    .label("nothing left to continue", marker)
                    .build(),
            );
            return;
        }

        let line_end = rest
            .find(|c: char| matches!(c, '\n' | '\r'))
            .unwrap_or(rest.len());
        let line = &rest[..line_end];
        let text = line.trim();
        if !text.is_empty() {
            let start = marker.end() + line.len() - line.trim_start().len();
            self.diags.push(
                Diagnostic::builder(DiagnosticKind::TrailingText)
                    .label(
                        "move this to the next line",
                        Span::new(start, start + text.len()),
                    )
                    .build(),
            );
        }
    }
    // endregion

    // region: Host tokens.
    fn blanks(&mut self) {
        self.cursor
            .eat_while(|c| c.is_whitespace() && !matches!(c, '\n' | '\r'));
    }

    fn token(&mut self) -> Option<Spanned<Token>> {
        let c = self.cursor.lookahead()?;
        self.cursor.start_token();

        let token = match c {
            '\n' => {
                self.cursor.bump();
                Token::Newline
            }
            '\r' => {
                let start = self.cursor.position();
                self.cursor.bump();
                self.cursor.bumped('\n');
                self.diags.push(
                    Diagnostic::builder(DiagnosticKind::CarriageReturn)
                        .label("read as a line break", Span::new(start, start + 1))
                        .build(),
                );

                Token::Newline
            }
            '\'' => Token::Comment(self.rest_of_line().into()),
            '"' => self.string(),
            '.' if self.cursor.peek2().is_some_and(|c| c.is_ascii_digit()) => self.number(),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() => self.word(),
            c => {
                self.cursor.bump();
                Token::Punct(c)
            }
        };

        Some(Spanned::new(token, self.cursor.token_span()))
    }

    fn number(&mut self) -> Token {
        Token::Number(
            self.cursor
                .eat_while(|c| c.is_ascii_digit() || c == '.')
                .into(),
        )
    }

    fn rest_of_line(&mut self) -> &'a str {
        self.cursor.eat_while(|c| !matches!(c, '\n' | '\r'))
    }

    fn string(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.bump();

        let mut value = String::new();
        loop {
            match self.cursor.lookahead() {
                Some('"') => {
                    self.cursor.bump();

                    // Doubled quotes are escaped quotes.
                    if self.cursor.bumped('"') {
                        value.push('"');
                    } else {
                        return Token::Str {
                            value,
                            closed: true,
                        };
                    }
                }
                Some('\n' | '\r') | None => {
                    self.diags.push(
                        Diagnostic::builder(DiagnosticKind::UnclosedString)
                            .label(
                                "missing closing quote",
                                Span::new(start, self.cursor.position()),
                            )
                            .build(),
                    );

                    return Token::Str {
                        value,
                        closed: false,
                    };
                }
                Some(c) => {
                    self.cursor.bump();
                    value.push(c);
                }
            }
        }
    }

    fn word(&mut self) -> Token {
        let word = self.cursor.eat_while(|c| c.is_alphanumeric() || c == '_');

        // `Rem` comments are words until they're not.
        let is_rem = word.eq_ignore_ascii_case("rem")
            && self.cursor.lookahead().map_or(true, char::is_whitespace);
        if is_rem {
            let comment = format!("{}{}", word, self.rest_of_line());
            Token::Comment(comment)
        } else {
            Token::Word(word.into())
        }
    }
    // endregion
}

pub fn tokenize(source: &str) -> (Vec<Spanned<Token>>, Vec<Diagnostic>) {
    Tokenizer::<vbscan_scanner::LineContinuationScanner>::new(source).tokenize()
}

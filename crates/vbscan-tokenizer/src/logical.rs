use std::mem;

use vbscan_lexer::{Span, Spanned};

use crate::{tokenize, Token};

/// Physical lines joined by line continuations.
#[derive(Debug, PartialEq)]
pub struct LogicalLine {
    text: String,
    span: Span,
    physical_lines: usize,
}

impl LogicalLine {
    /// The line's source text, without the continuation markers and the line
    /// breaks they escape.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The source range from the start of the first physical line to the end of
    /// the last one, excluding its line break.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn physical_lines(&self) -> usize {
        self.physical_lines
    }
}

pub fn logical_lines(source: &str) -> Vec<LogicalLine> {
    let (tokens, _) = tokenize(source);

    join_lines(source, &tokens)
}

/// Splits `source` into logical lines. A line break is escaped when the last
/// token before it is a line continuation. Continuation markers never make it
/// into the text.
pub fn join_lines(source: &str, tokens: &[Spanned<Token>]) -> Vec<LogicalLine> {
    let mut lines = vec![];
    let mut text = String::new();
    let mut start = 0;
    let mut copied = 0;
    let mut previous_end = 0;
    let mut physical_lines = 1;
    let mut continued = false;

    for token in tokens {
        let span = token.span();

        match token.token() {
            Token::LineContinuation => {
                // The scanner may have skipped line breaks to get to the marker.
                let gap_start = previous_end.max(copied);
                let gap = &source[gap_start..span.start()];
                physical_lines += line_breaks(gap);

                text.push_str(&source[copied..gap_start]);
                text.extend(gap.chars().filter(|&c| !matches!(c, '\n' | '\r')));
                copied = span.end();
                continued = true;
            }
            Token::Newline => {
                if continued {
                    physical_lines += 1;
                } else {
                    text.push_str(&source[copied..span.start()]);
                    lines.push(LogicalLine {
                        text: mem::take(&mut text),
                        span: Span::new(start, span.start()),
                        physical_lines,
                    });

                    start = span.end();
                    physical_lines = 1;
                }

                copied = span.end();
                continued = false;
            }
            _ => continued = false,
        }

        previous_end = span.end();
    }

    if start < source.len() {
        text.push_str(&source[copied..]);
        lines.push(LogicalLine {
            text,
            span: Span::new(start, source.len()),
            physical_lines,
        });
    }

    lines
}

/// Counts `\n`, `\r\n` and lone `\r` breaks.
fn line_breaks(text: &str) -> usize {
    text.matches('\n').count() + text.matches('\r').count() - text.matches("\r\n").count()
}

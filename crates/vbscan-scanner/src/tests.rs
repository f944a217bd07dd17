use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vbscan_lexer::{Cursor, Lexer, TokenType, ValidSymbols};

use super::*;

/// Scans `source` from the start and returns whether it matched, how far the
/// cursor moved and the reported token kind.
fn scan(source: &str, valid_symbols: ValidSymbols) -> (bool, usize, Option<TokenType>) {
    let mut scanner = LineContinuationScanner::create();
    let mut cursor = Cursor::new(source);
    let matched = scanner.scan(&mut cursor, valid_symbols);

    (matched, cursor.position(), cursor.result_symbol())
}

/// Lexer that records every call to `advance`.
struct RecordingLexer {
    chars: Vec<char>,
    position: usize,
    advances: Vec<(char, bool)>,
}

impl RecordingLexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            advances: vec![],
        }
    }
}

impl Lexer for RecordingLexer {
    fn lookahead(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn advance(&mut self, skip: bool) {
        if let Some(c) = self.lookahead() {
            self.advances.push((c, skip));
            self.position += 1;
        }
    }

    fn set_result_symbol(&mut self, _token: TokenType) {}
}

#[test]
fn lone_marker() {
    assert_eq!(
        scan("_", ValidSymbols::ALL),
        (true, 1, Some(TokenType::LineContinuation))
    );
}

#[test]
fn marker_after_whitespace() {
    assert_eq!(
        scan("   \n\t_", ValidSymbols::ALL),
        (true, 6, Some(TokenType::LineContinuation))
    );

    // Only the marker is consumed.
    assert_eq!(
        scan(" _\nfoo", ValidSymbols::ALL),
        (true, 2, Some(TokenType::LineContinuation))
    );
}

#[test]
fn unicode_whitespace() {
    // No-break space, em space and the ideographic space are all whitespace.
    assert_eq!(
        scan("\u{A0}\u{2003}\u{3000}_", ValidSymbols::ALL),
        (true, 9, Some(TokenType::LineContinuation))
    );
    assert_eq!(
        scan("\r\n\u{B}\u{C}_", ValidSymbols::ALL),
        (true, 5, Some(TokenType::LineContinuation))
    );
}

#[test]
fn no_marker() {
    assert_eq!(scan("x", ValidSymbols::ALL), (false, 0, None));
    assert_eq!(scan("", ValidSymbols::ALL), (false, 0, None));

    // A zero width space isn't whitespace.
    assert_eq!(scan("\u{200B}_", ValidSymbols::ALL), (false, 0, None));
}

#[test]
fn whitespace_stays_consumed() {
    assert_eq!(scan("  x", ValidSymbols::ALL), (false, 2, None));
    assert_eq!(scan(" \t\n", ValidSymbols::ALL), (false, 3, None));
}

#[test]
fn not_valid() {
    for source in ["_", "   \n\t_", "x", "  x", ""] {
        assert_eq!(scan(source, ValidSymbols::NONE), (false, 0, None));
        assert_eq!(scan(source, ValidSymbols::new(&[])), (false, 0, None));
    }
}

#[test]
fn skips_whitespace_but_not_marker() {
    let mut lexer = RecordingLexer::new(" \t_");
    assert!(LineContinuationScanner.scan(&mut lexer, ValidSymbols::ALL));
    assert_eq!(lexer.advances, vec![(' ', true), ('\t', true), ('_', false)]);
}

#[test]
fn stateless_lifecycle() {
    let mut scanner = LineContinuationScanner::create();
    let mut buffer = [0xAA; SERIALIZATION_BUFFER_SIZE];

    // Nothing is written.
    assert_eq!(scanner.serialize(&mut buffer), 0);
    assert!(buffer.iter().all(|&b| b == 0xAA));

    scanner.deserialize(&buffer[..0]);
    assert_eq!(scanner, LineContinuationScanner::create());

    // Garbage is ignored.
    scanner.deserialize(&[1, 2, 3]);
    scanner.reset();
    assert_eq!(scanner, LineContinuationScanner::default());

    let mut cursor = Cursor::new(" _");
    assert!(scanner.scan(&mut cursor, ValidSymbols::ALL));
    scanner.destroy();
}

#[test]
fn serialize_round_trip_keeps_behavior() {
    let mut restored = LineContinuationScanner::create();
    let mut buffer = [0; SERIALIZATION_BUFFER_SIZE];
    let len = LineContinuationScanner::create().serialize(&mut buffer);
    restored.deserialize(&buffer[..len]);

    for source in ["_", "  x", "\n_", "foo"] {
        let mut fresh = Cursor::new(source);
        let mut cursor = Cursor::new(source);

        assert_eq!(
            LineContinuationScanner::create().scan(&mut fresh, ValidSymbols::ALL),
            restored.scan(&mut cursor, ValidSymbols::ALL)
        );
        assert_eq!(fresh.position(), cursor.position());
    }
}

fn whitespace() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just(' '),
            Just('\t'),
            Just('\n'),
            Just('\r'),
            Just('\u{A0}'),
            Just('\u{3000}'),
        ],
        0..32,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn never_consumes_when_not_valid(source in "\\PC*") {
        prop_assert_eq!(scan(&source, ValidSymbols::NONE), (false, 0, None));
    }

    #[test]
    fn matches_whitespace_then_marker(ws in whitespace(), rest in "\\PC*") {
        let source = format!("{}_{}", ws, rest);
        prop_assert_eq!(
            scan(&source, ValidSymbols::ALL),
            (true, ws.len() + 1, Some(TokenType::LineContinuation))
        );
    }

    #[test]
    fn consumes_whitespace_without_marker(ws in whitespace(), rest in "[a-zA-Z0-9\"'(]\\PC*") {
        let source = format!("{}{}", ws, rest);
        prop_assert_eq!(scan(&source, ValidSymbols::ALL), (false, ws.len(), None));

        // Same thing at the end of the input.
        prop_assert_eq!(scan(&ws, ValidSymbols::ALL), (false, ws.len(), None));
    }

    #[test]
    fn scans_are_deterministic(source in "\\PC*", valid in any::<bool>()) {
        let table = [valid];
        prop_assert_eq!(
            scan(&source, ValidSymbols::new(&table)),
            scan(&source, ValidSymbols::new(&table))
        );
    }
}

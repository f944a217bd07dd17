use vbscan_lexer::{Lexer, ValidSymbols};

/// Size of the buffer tree-sitter hands to [ExternalScanner::serialize].
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// The lifecycle a grammar-driven parser expects from an external scanner.
///
/// The host creates one scanner per parser, snapshots its state between
/// tokens with [serialize](ExternalScanner::serialize) and restores it with
/// [deserialize](ExternalScanner::deserialize) when it backtracks.
pub trait ExternalScanner: Sized {
    fn create() -> Self;

    fn destroy(self) {}

    /// Clears any state kept for a partially scanned token.
    fn reset(&mut self);

    /// Writes the scanner's state to `buffer` and returns the number of bytes
    /// written.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restores a state written by [serialize](ExternalScanner::serialize).
    /// An empty `buffer` means the initial state.
    fn deserialize(&mut self, buffer: &[u8]);

    /// Tries to scan an external token at the lexer's position. On success,
    /// the lexer's position and result symbol describe the token.
    fn scan(&mut self, lexer: &mut impl Lexer, valid_symbols: ValidSymbols<'_>) -> bool;
}

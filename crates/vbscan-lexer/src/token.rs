/// Token kinds recognized by external scanners.
///
/// The discriminants are the symbol ids the grammar assigns to its external
/// tokens, in the order they're declared in the grammar's `externals` list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TokenType {
    /// Optional whitespace followed by `_`.
    LineContinuation = 0,
}

impl TokenType {
    /// Number of external token kinds, which is also the length of the
    /// [ValidSymbols] table the host passes to a scan.
    pub const COUNT: usize = 1;

    /// Returns the host symbol id of this token kind.
    pub fn symbol(self) -> u16 {
        self as u16
    }

    /// Returns the token kind with the given host symbol id, if any.
    pub fn from_symbol(symbol: u16) -> Option<Self> {
        match symbol {
            0 => Some(Self::LineContinuation),
            _ => None,
        }
    }
}

/// The token kinds the host parser would accept at the current position.
///
/// Entries missing from the underlying table read as not valid.
#[derive(Clone, Copy, Debug)]
pub struct ValidSymbols<'a>(&'a [bool]);

impl<'a> ValidSymbols<'a> {
    /// Every external token is valid.
    pub const ALL: ValidSymbols<'static> = ValidSymbols(&[true; TokenType::COUNT]);

    /// No external token is valid.
    pub const NONE: ValidSymbols<'static> = ValidSymbols(&[false; TokenType::COUNT]);

    pub fn new(table: &'a [bool]) -> Self {
        Self(table)
    }

    pub fn is_valid(&self, token: TokenType) -> bool {
        self.0.get(usize::from(token.symbol())).copied().unwrap_or(false)
    }
}

use std::fmt;

/// Range of a token in the source code. Represented by the start and end
/// byte offsets.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a new span with the given start and end offsets.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Span should not end before it starts.");

        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(value: Span) -> Self {
        (value.start, value.len()).into()
    }
}

/// A token together with its [Span].
#[derive(Debug, PartialEq)]
pub struct Spanned<T>(T, Span);

impl<T> Spanned<T> {
    pub fn new(token: T, span: Span) -> Self {
        Self(token, span)
    }

    pub fn token(&self) -> &T {
        &self.0
    }

    pub fn span(&self) -> Span {
        self.1
    }
}

impl<T> From<&Spanned<T>> for miette::SourceSpan {
    fn from(value: &Spanned<T>) -> Self {
        value.1.into()
    }
}

#[derive(Debug, PartialEq)]
pub enum Token {
    /// `'` or `Rem` up to the end of the line.
    Comment(String),
    /// ` _`, as recognized by the external scanner.
    LineContinuation,
    /// `\n`, `\r\n` or a lone `\r`.
    Newline,
    Number(String),
    Punct(char),
    /// A double quoted string, with `""` unescaped.
    Str { value: String, closed: bool },
    Word(String),
}

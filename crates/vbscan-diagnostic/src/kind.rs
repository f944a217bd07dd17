// Ordered alphabetically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, miette::Diagnostic, thiserror::Error)]
pub enum DiagnosticKind {
    #[error("Carriage return!")]
    #[diagnostic(code(vbscan::carriage_return), severity("advice"))]
    CarriageReturn,

    #[error("Line continuation at the end of the file!")]
    #[diagnostic(
        code(vbscan::continuation_at_eof),
        help("There's no line to continue. Delete the `_`.")
    )]
    ContinuationAtEof,

    #[error("Detached line continuation!")]
    #[diagnostic(
        code(vbscan::detached_continuation),
        help("Put the `_` at the end of the line it continues.")
    )]
    DetachedContinuation,

    #[error("You need a space here.")]
    #[diagnostic(code(vbscan::missing_space))]
    MissingSpace,

    #[error("Text after line continuation!")]
    #[diagnostic(
        code(vbscan::trailing_text),
        help("A line continuation must be the last thing on its line.")
    )]
    TrailingText,

    #[error("Unclosed string!")]
    #[diagnostic(code(vbscan::unclosed_string))]
    UnclosedString,
}

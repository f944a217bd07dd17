use std::fmt;

use vbscan_lexer::Span;

use crate::DiagnosticKind;

/// A message attached to a part of the source.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Label {
    message: String,
    span: Span,
}

impl Label {
    pub(crate) fn span(&self) -> Span {
        self.span
    }
}

impl From<&Label> for miette::LabeledSpan {
    fn from(label: &Label) -> Self {
        miette::LabeledSpan::new_with_span(Some(label.message.clone()), label.span)
    }
}

/// A [DiagnosticKind] found somewhere in the source.
///
/// The kind carries the message, code and default help, while the wrapper
/// keeps the locations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Diagnostic {
    kind: DiagnosticKind,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Creates a new [builder](DiagnosticBuilder) for a diagnostic
    /// of the given [kind](DiagnosticKind).
    pub fn builder(kind: DiagnosticKind) -> DiagnosticBuilder {
        DiagnosticBuilder(Self {
            kind,
            labels: vec![],
            help: None,
        })
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// The span of the first label.
    pub fn span(&self) -> Option<Span> {
        self.labels.first().map(Label::span)
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        miette::Diagnostic::code(&self.kind)
    }

    fn severity(&self) -> Option<miette::Severity> {
        miette::Diagnostic::severity(&self.kind).or(Some(miette::Severity::Warning))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.help {
            Some(help) => Some(Box::new(help) as Box<dyn fmt::Display + 'a>),
            None => miette::Diagnostic::help(&self.kind),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(self.labels.iter().map(miette::LabeledSpan::from)))
    }
}

pub struct DiagnosticBuilder(Diagnostic);

impl DiagnosticBuilder {
    /// Points the [Diagnostic] at `span`. The first label is the main one.
    pub fn label(mut self, message: impl Into<String>, span: Span) -> Self {
        self.0.labels.push(Label {
            message: message.into(),
            span,
        });
        self
    }

    /// Overrides the help of the diagnostic's kind.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.0.help = Some(help.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        self.0
    }
}

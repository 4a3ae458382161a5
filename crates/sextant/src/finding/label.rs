//! Labeled source spans for findings.

use sextant_parser::Span;

/// A message attached to a location in the content source.
///
/// ```text
///   × error[E200]: non-ASCII in structural line — "x-axis 低 --> 高"
///     ╭─[src/data/phases.ts:412:1]
/// 412 │   x-axis 低 --> 高
///     ·   ───────┬───────
///     ·          ╰── non-ASCII character in x-axis declaration
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    /// Create a new label.
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

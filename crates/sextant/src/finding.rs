//! Findings reported by the checkers.
//!
//! A [`Finding`] is one validation failure tied to a diagram block. There is
//! no warning level: every finding fails the run. Each finding carries an
//! [`ErrorCode`], a human-readable message, and optionally a [`Label`]
//! pointing at the offending line of the content source plus help text.
//!
//! # Example
//!
//! ```
//! # use sextant::{ChartKind, Finding, finding::ErrorCode};
//! # use sextant::Span;
//! let finding = Finding::new(3, ChartKind::Quadrant, ErrorCode::E200, "bad line")
//!     .with_label(Span::new(120..140), "non-ASCII here")
//!     .with_help("use ASCII text");
//!
//! assert_eq!(finding.to_string(), "error[E200]: bad line");
//! ```

mod error_code;
mod label;

pub use error_code::ErrorCode;
pub use label::Label;

use std::fmt;

use sextant_parser::Span;

use crate::outcome::ChartKind;

/// One validation failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    index: usize,
    chart: ChartKind,
    code: ErrorCode,
    message: String,
    label: Option<Label>,
    help: Option<String>,
}

impl Finding {
    /// Create a finding for the block at `index`.
    pub fn new(
        index: usize,
        chart: ChartKind,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            index,
            chart,
            code,
            message: message.into(),
            label: None,
            help: None,
        }
    }

    /// 1-based index of the block the finding belongs to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Chart type of the block.
    pub fn chart(&self) -> &ChartKind {
        &self.chart
    }

    /// The error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// What failed and why.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The source location, if any.
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// The help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Attach a source location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.label = Some(Label::new(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for Finding {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_new() {
        let finding = Finding::new(2, ChartKind::Gantt, ErrorCode::E100, "too narrow");

        assert_eq!(finding.index(), 2);
        assert_eq!(finding.chart(), &ChartKind::Gantt);
        assert_eq!(finding.code(), ErrorCode::E100);
        assert_eq!(finding.message(), "too narrow");
        assert!(finding.label().is_none());
        assert!(finding.help().is_none());
    }

    #[test]
    fn test_finding_builder_chain() {
        let finding = Finding::new(1, ChartKind::Quadrant, ErrorCode::E200, "bad line")
            .with_label(Span::new(5..9), "here")
            .with_help("use ASCII");

        let label = finding.label().unwrap();
        assert_eq!(label.span(), Span::new(5..9));
        assert_eq!(label.message(), "here");
        assert_eq!(finding.help(), Some("use ASCII"));
    }

    #[test]
    fn test_finding_display() {
        let finding = Finding::new(1, ChartKind::Gantt, ErrorCode::E100, "label overflows");
        assert_eq!(finding.to_string(), "error[E100]: label overflows");
    }
}

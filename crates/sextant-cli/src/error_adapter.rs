//! Adapters from Sextant results and errors to miette diagnostics.
//!
//! The library reports findings and errors as plain types. This module wraps
//! them so the CLI can render them with miette's graphical handler: findings
//! as annotated snippets of the content source, fatal errors as short
//! reports with a stable code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};

use sextant::{Finding, RunResult, SextantError};

/// Adapter for a single checker finding.
pub struct FindingAdapter<'a> {
    /// The wrapped finding
    finding: &'a Finding,
    /// Content source the finding's label points into
    src: &'a NamedSource<String>,
}

impl<'a> FindingAdapter<'a> {
    /// Create a new finding adapter.
    pub fn new(finding: &'a Finding, src: &'a NamedSource<String>) -> Self {
        Self { finding, src }
    }
}

impl fmt::Debug for FindingAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindingAdapter")
            .field("finding", &self.finding)
            .field("src", &self.src.name())
            .finish()
    }
}

impl fmt::Display for FindingAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.finding.index(),
            self.finding.chart(),
            self.finding.message()
        )
    }
}

impl std::error::Error for FindingAdapter<'_> {}

impl MietteDiagnostic for FindingAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.finding.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.finding
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.src as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = self.finding.label()?;
        let span = span_to_miette(label.span());

        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(label.message().to_string()), span),
        )))
    }
}

/// Adapter for fatal [`SextantError`]s.
pub struct ErrorAdapter<'a>(pub &'a SextantError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SextantError::Io(_) => "sextant::io",
            SextantError::Read { .. } => "sextant::read",
            SextantError::Config(_) => "sextant::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            SextantError::Io(_) => None,
            SextantError::Read { .. } => {
                Some(Box::new("check that the path exists and is readable"))
            }
            SextantError::Config(_) => Some(Box::new(
                "check the configuration file, or pass another one with --config",
            )),
        }
    }
}

/// A reportable item that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A checker finding with source location information.
    Finding(FindingAdapter<'a>),
    /// A fatal error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Finding(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Finding(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Finding(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Finding(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Reportable::Finding(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Finding(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

fn span_to_miette(span: sextant_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`SextantError`] into a list of reportable errors.
pub fn to_reportables(err: &SextantError) -> Vec<Reportable<'_>> {
    vec![Reportable::Error(ErrorAdapter(err))]
}

/// Wrap every finding of `result`, in document order.
pub fn finding_reportables<'a>(
    result: &'a RunResult,
    src: &'a NamedSource<String>,
) -> Vec<Reportable<'a>> {
    result
        .findings()
        .map(|finding| Reportable::Finding(FindingAdapter::new(finding, src)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io;

    use sextant::{BlockOutcome, ChartKind, PassNote, Span, finding::ErrorCode};

    use super::*;

    fn source() -> NamedSource<String> {
        NamedSource::new("phases.ts", "x-axis 低 --> 高\nquadrant-1 Now".to_string())
    }

    #[test]
    fn test_finding_adapter() {
        let finding = Finding::new(3, ChartKind::Quadrant, ErrorCode::E200, "bad line")
            .with_label(Span::new(0..18), "non-ASCII here")
            .with_help("use ASCII");
        let src = source();
        let adapter = FindingAdapter::new(&finding, &src);

        assert_eq!(adapter.to_string(), "[3] quadrantChart: bad line");
        assert_eq!(adapter.code().unwrap().to_string(), "E200");
        assert_eq!(adapter.help().unwrap().to_string(), "use ASCII");
        assert!(adapter.source_code().is_some());

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].label(), Some("non-ASCII here"));
        assert_eq!(labels[0].offset(), 0);
        assert_eq!(labels[0].len(), 18);
        assert!(labels[0].primary());
    }

    #[test]
    fn test_finding_without_label() {
        let finding = Finding::new(1, ChartKind::Gantt, ErrorCode::E100, "too narrow");
        let src = source();
        let adapter = FindingAdapter::new(&finding, &src);

        assert!(adapter.labels().is_none());
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_finding_reportables_in_order() {
        let outcome = |index| {
            let findings = vec![Finding::new(index, ChartKind::Gantt, ErrorCode::E100, "x")];
            BlockOutcome::from_findings(index, ChartKind::Gantt, findings, || PassNote::NoTasks)
        };
        let result: RunResult = [outcome(1), outcome(2)].into_iter().collect();
        let src = source();

        let reportables = finding_reportables(&result, &src);

        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "[1] gantt: x");
        assert_eq!(reportables[1].to_string(), "[2] gantt: x");
    }

    #[test]
    fn test_error_codes() {
        let io_err = SextantError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let config_err = SextantError::Config("bad".to_string());

        let reportables = to_reportables(&io_err);
        assert_eq!(reportables.len(), 1);
        assert_eq!(reportables[0].code().unwrap().to_string(), "sextant::io");
        assert!(reportables[0].help().is_none());

        let reportables = to_reportables(&config_err);
        assert_eq!(reportables[0].code().unwrap().to_string(), "sextant::config");
        assert!(reportables[0].help().is_some());
        assert!(reportables[0].labels().is_none());
    }

    #[test]
    fn test_read_error_names_path() {
        let err = SextantError::Read {
            path: "content/phases.ts".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        let reportables = to_reportables(&err);
        assert_eq!(reportables[0].code().unwrap().to_string(), "sextant::read");
        assert!(reportables[0].to_string().contains("content/phases.ts"));
        assert!(std::error::Error::source(&reportables[0]).is_some());
    }
}

//! Sextant - static checks for Mermaid diagrams embedded in content sources.
//!
//! Sextant finds diagram literals in a content source and catches two classes
//! of rendering defects without invoking a renderer: timeline labels that
//! overflow their bars, and non-ASCII text in quadrant chart syntax. The
//! geometry is a deliberately conservative estimate, tunable through
//! [`config::GanttConfig`].

pub mod check;
pub mod config;
pub mod finding;

mod error;
mod outcome;
mod report;

pub use sextant_parser::{ChartType, DiagramBlock, Span};

pub use error::SextantError;
pub use finding::Finding;
pub use outcome::{BlockOutcome, ChartKind, PassNote, Verdict};
pub use report::RunResult;

use log::info;

use config::AppConfig;

/// Checker for the diagrams of a content source.
///
/// A validator holds no state besides its configuration, so checking the same
/// source twice yields identical results.
///
/// # Examples
///
/// ```
/// use sextant::{Validator, config::AppConfig};
///
/// let source = r#"
///     { type: 'mermaid', diagram: `quadrantChart
///         title 優先度
///         x-axis Low --> High
///         Point A: [0.5, 0.5]` },
/// "#;
///
/// let validator = Validator::new(AppConfig::default());
/// let result = validator.check(source);
///
/// assert_eq!(result.diagram_count(), 1);
/// assert!(result.is_clean());
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    config: AppConfig,
}

impl Validator {
    /// Create a validator with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Extraction and measurement settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Extract the diagram blocks of `source` in document order.
    pub fn extract<'src>(&self, source: &'src str) -> Vec<DiagramBlock<'src>> {
        sextant_parser::extract(source, &self.config.extract().options())
    }

    /// Check one block.
    pub fn check_block(&self, block: &DiagramBlock<'_>) -> BlockOutcome {
        check::check_block(block, &self.config)
    }

    /// Extract and check every diagram of `source`.
    ///
    /// A source without diagrams yields an empty, clean result.
    pub fn check(&self, source: &str) -> RunResult {
        let blocks = self.extract(source);
        info!(diagrams = blocks.len(); "Checking diagrams");

        let result: RunResult = blocks
            .iter()
            .map(|block| self.check_block(block))
            .collect();

        info!(
            diagrams = result.diagram_count(),
            findings = result.finding_count();
            "Check finished"
        );
        result
    }
}

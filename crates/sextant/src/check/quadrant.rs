//! Character-set check for quadrant charts.
//!
//! The quadrant chart parser fails outright on non-ASCII text in axis,
//! quadrant and data-point declarations. Free-form lines such as the title
//! tolerate it and are never inspected.

use log::{debug, trace};

use sextant_parser::{DiagramBlock, quadrant::structural_lines};

use crate::{
    config::QuadrantConfig,
    finding::{ErrorCode, Finding},
    outcome::{BlockOutcome, ChartKind, PassNote},
};

/// Check a quadrant block for non-ASCII text in structural lines.
pub fn check(block: &DiagramBlock<'_>, config: &QuadrantConfig) -> BlockOutcome {
    let index = block.index();

    let findings: Vec<_> = structural_lines(block)
        .filter(|(line, _)| !line.text().is_ascii())
        .map(|(line, kind)| {
            trace!(index = index, line = line.text(); "Non-ASCII structural line");
            let preview: String = line.text().chars().take(config.preview_len()).collect();

            Finding::new(
                index,
                ChartKind::Quadrant,
                ErrorCode::E200,
                format!("non-ASCII in structural line — \"{preview}\""),
            )
            .with_label(line.span(), format!("non-ASCII character in {kind}"))
            .with_help("use ASCII text here; localized text is only safe in the title")
        })
        .collect();

    debug!(index = index, findings = findings.len(); "Checked quadrant chart");
    BlockOutcome::from_findings(index, ChartKind::Quadrant, findings, || PassNote::Clean)
}

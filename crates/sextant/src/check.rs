//! Per-block checking.
//!
//! [`check_block`] classifies a block and routes it to the checker for its
//! chart type:
//!
//! - [`gantt`] - estimates bar and label widths of timeline charts.
//! - [`quadrant`] - rejects non-ASCII text in quadrant chart syntax.
//!
//! Blocks of any other chart type pass without inspection.

pub mod gantt;
pub mod quadrant;

use log::debug;

use sextant_parser::{ChartType, DiagramBlock};

use crate::{
    config::AppConfig,
    outcome::{BlockOutcome, PassNote},
};

/// Check one diagram block.
pub fn check_block(block: &DiagramBlock<'_>, config: &AppConfig) -> BlockOutcome {
    let chart = block.chart_type();
    debug!(index = block.index(), chart = chart.token(); "Dispatching block");

    match chart {
        ChartType::Gantt => gantt::check(block, config.gantt()),
        ChartType::Quadrant => quadrant::check(block, config.quadrant()),
        ChartType::Other(_) => {
            BlockOutcome::passed(block.index(), chart.into(), PassNote::Uninspected)
        }
    }
}

#[cfg(test)]
mod tests {
    use sextant_parser::Span;

    use super::*;
    use crate::outcome::{ChartKind, Verdict};

    fn block(body: &str) -> DiagramBlock<'_> {
        DiagramBlock::new(1, body, Span::new(0..body.len()))
    }

    #[test]
    fn test_other_chart_passes_uninspected() {
        let body = "flowchart LR\n  A[開始] --> B[終了]";
        let outcome = check_block(&block(body), &AppConfig::default());

        assert_eq!(outcome.chart(), &ChartKind::Other("flowchart".to_string()));
        assert_eq!(outcome.verdict(), &Verdict::Passed(PassNote::Uninspected));
    }

    #[test]
    fn test_gantt_is_routed_to_timeline_checker() {
        let outcome = check_block(&block("gantt\n  title Empty"), &AppConfig::default());

        assert_eq!(outcome.chart(), &ChartKind::Gantt);
        assert_eq!(outcome.verdict(), &Verdict::Passed(PassNote::NoTasks));
    }

    #[test]
    fn test_quadrant_is_routed_to_charset_checker() {
        let body = "quadrantChart\n  x-axis 低 --> 高";
        let outcome = check_block(&block(body), &AppConfig::default());

        assert_eq!(outcome.chart(), &ChartKind::Quadrant);
        assert_eq!(outcome.findings().len(), 1);
    }
}

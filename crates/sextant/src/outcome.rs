//! Per-block check results.

use std::fmt;

use sextant_parser::ChartType;

use crate::finding::Finding;

/// Owned chart type of a checked block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// A `gantt` timeline chart.
    Gantt,
    /// A `quadrantChart`.
    Quadrant,
    /// An unmodeled chart, with its raw leading token.
    Other(String),
}

impl From<ChartType<'_>> for ChartKind {
    fn from(chart: ChartType<'_>) -> Self {
        match chart {
            ChartType::Gantt => ChartKind::Gantt,
            ChartType::Quadrant => ChartKind::Quadrant,
            ChartType::Other(token) => ChartKind::Other(token.to_string()),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Gantt => f.write_str(ChartType::GANTT),
            ChartKind::Quadrant => f.write_str(ChartType::QUADRANT),
            ChartKind::Other(token) => f.write_str(token),
        }
    }
}

/// Why a block passed.
#[derive(Debug, Clone, PartialEq)]
pub enum PassNote {
    /// The chart type is not modeled, so nothing was checked.
    Uninspected,
    /// A timeline chart without task lines.
    NoTasks,
    /// A timeline chart whose labels all fit.
    Tasks {
        /// Number of task lines.
        count: usize,
        /// Share of the total duration taken by the shortest task, in percent.
        narrowest_pct: f64,
    },
    /// A quadrant chart whose structural lines are all ASCII.
    Clean,
}

/// The result of checking one block.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// No findings.
    Passed(PassNote),
    /// One or more findings, in line order.
    Failed(Vec<Finding>),
}

/// The verdict for one diagram block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockOutcome {
    index: usize,
    chart: ChartKind,
    verdict: Verdict,
}

impl BlockOutcome {
    /// Create a passing outcome.
    pub fn passed(index: usize, chart: ChartKind, note: PassNote) -> Self {
        Self {
            index,
            chart,
            verdict: Verdict::Passed(note),
        }
    }

    /// Create an outcome from collected findings.
    ///
    /// Passes with `note` if `findings` is empty.
    pub fn from_findings(
        index: usize,
        chart: ChartKind,
        findings: Vec<Finding>,
        note: impl FnOnce() -> PassNote,
    ) -> Self {
        let verdict = if findings.is_empty() {
            Verdict::Passed(note())
        } else {
            Verdict::Failed(findings)
        };
        Self {
            index,
            chart,
            verdict,
        }
    }

    /// 1-based index of the block.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Chart type of the block.
    pub fn chart(&self) -> &ChartKind {
        &self.chart
    }

    /// The verdict.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Returns `true` if the block produced no findings.
    pub fn is_pass(&self) -> bool {
        matches!(self.verdict, Verdict::Passed(_))
    }

    /// Findings of the block; empty if it passed.
    pub fn findings(&self) -> &[Finding] {
        match &self.verdict {
            Verdict::Passed(_) => &[],
            Verdict::Failed(findings) => findings,
        }
    }
}

//! Run aggregation and console rendering.
//!
//! [`RunResult`] folds [`BlockOutcome`]s in document order. It renders one
//! line per passing block, one line per finding, and a closing summary:
//!
//! ```text
//!   ✓  [1] flowchart
//!   ✓  [2] gantt (4 tasks, narrowest bar 12.5%)
//!   ✗  [3] quadrantChart: non-ASCII in structural line — "x-axis 低 --> 高"
//!
//! ❌  1 error(s) found in 3 diagrams — fix before committing
//! ```
//!
//! Pass lines and the clean summary go to the output writer; failure lines
//! and the failing summary go to the error writer.

use std::io::{self, Write};

use crate::{
    check::gantt::round_half_up,
    finding::Finding,
    outcome::{BlockOutcome, PassNote, Verdict},
};

const PASS_MARK: &str = "✓";
const FAIL_MARK: &str = "✗";

/// Aggregate of all block outcomes of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunResult {
    outcomes: Vec<BlockOutcome>,
    finding_count: usize,
}

impl RunResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of the next block.
    pub fn push(&mut self, outcome: BlockOutcome) {
        self.finding_count += outcome.findings().len();
        self.outcomes.push(outcome);
    }

    /// Outcomes in document order.
    pub fn outcomes(&self) -> &[BlockOutcome] {
        &self.outcomes
    }

    /// Number of diagrams checked.
    pub fn diagram_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Total number of findings across all blocks.
    pub fn finding_count(&self) -> usize {
        self.finding_count
    }

    /// All findings in document order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.outcomes.iter().flat_map(BlockOutcome::findings)
    }

    /// Returns `true` if no block produced a finding.
    pub fn is_clean(&self) -> bool {
        self.finding_count == 0
    }

    /// Process exit code: `0` when clean, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() { 0 } else { 1 }
    }

    /// Render the block lines and the summary.
    ///
    /// # Errors
    ///
    /// Returns any error from the writers.
    pub fn write_report(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        for outcome in &self.outcomes {
            write_outcome(outcome, out, err)?;
        }

        if self.is_clean() {
            writeln!(out, "\n✅  All {} diagrams passed\n", self.diagram_count())
        } else {
            writeln!(
                err,
                "\n❌  {} error(s) found in {} diagrams — fix before committing\n",
                self.finding_count,
                self.diagram_count()
            )
        }
    }
}

impl FromIterator<BlockOutcome> for RunResult {
    fn from_iter<I: IntoIterator<Item = BlockOutcome>>(iter: I) -> Self {
        let mut result = Self::new();
        for outcome in iter {
            result.push(outcome);
        }
        result
    }
}

fn write_outcome(
    outcome: &BlockOutcome,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let index = outcome.index();
    let chart = outcome.chart();

    match outcome.verdict() {
        Verdict::Passed(PassNote::Uninspected | PassNote::Clean) => {
            writeln!(out, "  {PASS_MARK}  [{index}] {chart}")
        }
        Verdict::Passed(PassNote::NoTasks) => {
            writeln!(out, "  {PASS_MARK}  [{index}] {chart} (no tasks found)")
        }
        Verdict::Passed(PassNote::Tasks {
            count,
            narrowest_pct,
        }) => {
            let pct = round_half_up(*narrowest_pct, 1);
            writeln!(
                out,
                "  {PASS_MARK}  [{index}] {chart} ({count} tasks, narrowest bar {pct:.1}%)"
            )
        }
        Verdict::Failed(findings) => findings.iter().try_for_each(|finding| {
            writeln!(
                err,
                "  {FAIL_MARK}  [{index}] {chart}: {}",
                finding.message()
            )
        }),
    }
}

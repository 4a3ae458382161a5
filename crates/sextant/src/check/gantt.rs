//! Label-overflow check for timeline charts.
//!
//! The renderer draws each task as a bar whose width is the task's share of
//! the chart's total duration, and draws the task label inside that bar. A
//! label wider than its bar yields a negative width for the bar's drawable
//! rectangle. This checker estimates both widths from [`GanttConfig`] and
//! reports every task whose label does not fit.
//!
//! Tasks are assumed to be laid end-to-end: the total is the sum of all task
//! durations in the block.

use log::{debug, trace};

use sextant_parser::{
    DiagramBlock,
    gantt::{Task, parse_tasks},
};

use crate::{
    config::GanttConfig,
    finding::{ErrorCode, Finding},
    outcome::{BlockOutcome, ChartKind, PassNote},
};

/// Estimated rendered width of `label` in pixels.
///
/// Characters with a code point above 127 cost
/// [`wide_char_width`](GanttConfig::wide_char_width), all others
/// [`ascii_char_width`](GanttConfig::ascii_char_width).
pub fn label_width(label: &str, config: &GanttConfig) -> f64 {
    label
        .chars()
        .map(|c| {
            if u32::from(c) > 127 {
                config.wide_char_width()
            } else {
                config.ascii_char_width()
            }
        })
        .sum()
}

/// Estimated pixel width of a bar lasting `minutes` out of `total_minutes`.
pub fn bar_width(minutes: u64, total_minutes: u64, config: &GanttConfig) -> f64 {
    (minutes as f64 / total_minutes as f64) * config.grid_width()
}

fn overflow_finding(
    index: usize,
    task: &Task<'_>,
    total_minutes: u64,
    config: &GanttConfig,
) -> Option<Finding> {
    let bar = bar_width(task.minutes(), total_minutes, config);
    let label = label_width(task.label(), config);
    trace!(label = task.label(), bar = bar, label_width = label; "Measured task");

    if label <= bar {
        return None;
    }

    let rect_width = round_half_up(bar - label, 0) as i64;
    let share = round_half_up(task.minutes() as f64 / total_minutes as f64 * 100.0, 1);
    let bar = round_half_up(bar, 0);
    let code = ErrorCode::E100;

    Some(
        Finding::new(
            index,
            ChartKind::Gantt,
            code,
            format!(
                "\"{}\" — bar {bar:.0}px < label {label}px (rect width ~{rect_width})",
                task.label()
            ),
        )
        .with_label(task.span(), code.description())
        .with_help(format!(
            "label needs {label}px but the bar is {bar:.0}px; shorten the label or lengthen \
             the task, which spans {share:.1}% of the chart ({} of {total_minutes} minutes)",
            task.minutes()
        )),
    )
}

/// Round `value` to `decimals` places, with halves rounded up.
pub(crate) fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale + 0.5).floor() / scale
}

/// Check a timeline block for labels wider than their bars.
pub fn check(block: &DiagramBlock<'_>, config: &GanttConfig) -> BlockOutcome {
    let index = block.index();
    let tasks = parse_tasks(block);

    if tasks.is_empty() {
        debug!(index = index; "Timeline without tasks");
        return BlockOutcome::passed(index, ChartKind::Gantt, PassNote::NoTasks);
    }

    let total_minutes = tasks
        .iter()
        .map(Task::minutes)
        .fold(0u64, u64::saturating_add);
    debug!(
        index = index,
        tasks = tasks.len(),
        total_minutes = total_minutes;
        "Checking timeline"
    );

    let findings = tasks
        .iter()
        .filter_map(|task| overflow_finding(index, task, total_minutes, config))
        .collect();

    BlockOutcome::from_findings(index, ChartKind::Gantt, findings, || {
        let shortest = tasks.iter().map(Task::minutes).min().unwrap_or(0);
        PassNote::Tasks {
            count: tasks.len(),
            narrowest_pct: shortest as f64 / total_minutes as f64 * 100.0,
        }
    })
}

//! Task-line grammar for timeline (`gantt`) charts.
//!
//! A task line has the shape:
//!
//! ```text
//! LABEL WS* ':' NOCOMMA* ',' WS* TIME ',' WS* DIGIT+ UNIT ...
//! ```
//!
//! where `TIME` is any comma-free text (`00:00`, `after task1`) and `UNIT` is
//! one of `m`, `h`, `d`, `w`. Text after the unit is ignored. Lines of any
//! other shape (titles, sections, `dateFormat`, ...) are not tasks.

use log::trace;
use winnow::{
    Parser as _,
    ascii::digit1,
    error::ModalResult,
    token::{any, take_till, take_while},
};

use crate::{extract::DiagramBlock, lines::Line, span::Span};

/// Unit suffix of a task duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// `m`
    Minutes,
    /// `h`
    Hours,
    /// `d`
    Days,
    /// `w`
    Weeks,
}

impl TimeUnit {
    /// Map a unit suffix character to its unit.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'm' => Some(TimeUnit::Minutes),
            'h' => Some(TimeUnit::Hours),
            'd' => Some(TimeUnit::Days),
            'w' => Some(TimeUnit::Weeks),
            _ => None,
        }
    }

    /// Number of minutes in one unit.
    pub fn minutes(self) -> u64 {
        match self {
            TimeUnit::Minutes => 1,
            TimeUnit::Hours => 60,
            TimeUnit::Days => 1_440,
            TimeUnit::Weeks => 10_080,
        }
    }

    /// Convert `count` units to minutes, or `None` on overflow.
    pub fn to_minutes(self, count: u64) -> Option<u64> {
        count.checked_mul(self.minutes())
    }
}

/// One timed entry of a timeline chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task<'src> {
    label: &'src str,
    minutes: u64,
    span: Span,
}

impl<'src> Task<'src> {
    /// The label drawn inside the bar, trimmed.
    pub fn label(&self) -> &'src str {
        self.label
    }

    /// Duration in minutes, always positive.
    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Location of the whole task line in the content source.
    pub fn span(&self) -> Span {
        self.span
    }
}

fn ws0<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(0.., char::is_whitespace).parse_next(input)
}

fn unit(input: &mut &str) -> ModalResult<TimeUnit> {
    any.verify_map(TimeUnit::from_char).parse_next(input)
}

/// Parse everything after the label colon: two comma-terminated fields and
/// the duration literal.
fn schedule(input: &mut &str) -> ModalResult<(u64, TimeUnit)> {
    (
        take_till(0.., ','),
        ',',
        ws0,
        take_till(0.., ','),
        ',',
        ws0,
        digit1.try_map(str::parse::<u64>),
        unit,
    )
        .map(|(_, _, _, _, _, _, count, unit)| (count, unit))
        .parse_next(input)
}

/// Parse a single line as a task.
///
/// The label ends at the first `:` (after at least one character) whose
/// remainder parses as a schedule. Returns `None` for non-task lines,
/// including a zero or overflowing duration.
pub fn parse_task(line: Line<'_>) -> Option<Task<'_>> {
    let text = line.text();

    text.char_indices()
        .filter(|&(i, c)| c == ':' && i > 0)
        .find_map(|(colon, _)| {
            let mut rest = &text[colon + 1..];
            let (count, unit) = schedule.parse_next(&mut rest).ok()?;
            let minutes = unit.to_minutes(count).filter(|&minutes| minutes > 0)?;

            Some(Task {
                label: text[..colon].trim(),
                minutes,
                span: line.span(),
            })
        })
}

/// Parse all task lines of a block, in order, skipping everything else.
pub fn parse_tasks<'src>(block: &DiagramBlock<'src>) -> Vec<Task<'src>> {
    block
        .lines()
        .filter_map(|line| {
            let task = parse_task(line);
            if let Some(task) = &task {
                trace!(label = task.label(), minutes = task.minutes(); "Parsed task");
            }
            task
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::lines;

    fn task(text: &str) -> Option<Task<'_>> {
        lines(text, 0).next().and_then(parse_task)
    }

    #[test]
    fn test_unit_conversion_table() {
        assert_eq!(TimeUnit::Minutes.to_minutes(7), Some(7));
        assert_eq!(TimeUnit::Hours.to_minutes(7), Some(420));
        assert_eq!(TimeUnit::Days.to_minutes(7), Some(10_080));
        assert_eq!(TimeUnit::Weeks.to_minutes(7), Some(70_560));
    }

    #[test]
    fn test_unit_from_char() {
        assert_eq!(TimeUnit::from_char('w'), Some(TimeUnit::Weeks));
        assert_eq!(TimeUnit::from_char('s'), None);
        assert_eq!(TimeUnit::from_char('M'), None);
    }

    #[test]
    fn test_unit_overflow() {
        assert_eq!(TimeUnit::Weeks.to_minutes(u64::MAX), None);
    }

    #[test]
    fn test_parse_absolute_task() {
        let parsed = task("環境構築 :a1, 00:00, 30m").unwrap();

        assert_eq!(parsed.label(), "環境構築");
        assert_eq!(parsed.minutes(), 30);
    }

    #[test]
    fn test_parse_relative_task() {
        let parsed = task(r#""Long label" : task2, after task1, 2h"#).unwrap();

        assert_eq!(parsed.label(), r#""Long label""#);
        assert_eq!(parsed.minutes(), 120);
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        let parsed = task("Review : r1, 00:00, 1d extra").unwrap();
        assert_eq!(parsed.minutes(), 1_440);
    }

    #[test]
    fn test_parse_label_ends_at_first_viable_colon() {
        let parsed = task("Setup : s1, 09:30, 1w").unwrap();

        assert_eq!(parsed.label(), "Setup");
        assert_eq!(parsed.minutes(), 10_080);
    }

    #[test]
    fn test_non_task_lines() {
        assert!(task("gantt").is_none());
        assert!(task("title Rollout plan").is_none());
        assert!(task("dateFormat HH:mm").is_none());
        assert!(task("axisFormat %H:%M").is_none());
        assert!(task("section Phase 1").is_none());
        assert!(task("Deploy : d1, 00:00, 5s").is_none());
        assert!(task("Deploy : d1, 5m").is_none());
        assert!(task(": d1, 00:00, 5m").is_none());
    }

    #[test]
    fn test_zero_duration_is_not_a_task() {
        assert!(task("Nothing : n1, 00:00, 0m").is_none());
    }

    #[test]
    fn test_parse_tasks_of_block() {
        let body = "gantt\n  dateFormat HH:mm\n  section Setup\n  A : a, 00:00, 1m\n  B : b, after a, 3m";
        let block = DiagramBlock::new(1, body, Span::new(0..body.len()));
        let tasks = parse_tasks(&block);

        let labels: Vec<_> = tasks.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(tasks[1].minutes(), 3);
        let range: std::ops::Range<usize> = tasks[1].span().into();
        assert_eq!(&body[range], "B : b, after a, 3m");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::lines::lines;

    fn unit_strategy() -> impl Strategy<Value = (char, u64)> {
        prop_oneof![
            Just(('m', 1u64)),
            Just(('h', 60u64)),
            Just(('d', 1_440u64)),
            Just(('w', 10_080u64)),
        ]
    }

    fn check_conversion(count: u64, suffix: char, factor: u64) -> Result<(), TestCaseError> {
        let line = format!("Task : t, 00:00, {count}{suffix}");
        let parsed = lines(&line, 0).next().and_then(parse_task);

        prop_assert_eq!(parsed.map(|t| t.minutes()), Some(count * factor));
        Ok(())
    }

    proptest! {
        #[test]
        fn duration_converts_to_minutes(count in 1u64..100_000, (suffix, factor) in unit_strategy()) {
            check_conversion(count, suffix, factor)?;
        }
    }
}

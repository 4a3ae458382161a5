//! Line classification for quadrant charts.
//!
//! Only structural lines are interpreted by the renderer's chart grammar:
//!
//! ```text
//! 'x-axis' ...  |  'y-axis' ...  |  'quadrant-' DIGIT ...
//! WORD_OR_SPACE+ ':' WS* '[' ...
//! ```
//!
//! Everything else (`title`, comments, class definitions) is free-form.

use std::fmt;

use winnow::{
    Parser as _,
    combinator::alt,
    error::ModalResult,
    token::{any, take_while},
};

use crate::{extract::DiagramBlock, lines::Line};

/// The kind of a structural quadrant-chart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralKind {
    /// `x-axis <left> --> <right>`
    XAxis,
    /// `y-axis <bottom> --> <top>`
    YAxis,
    /// `quadrant-N <name>`
    Quadrant(u8),
    /// `<name>: [x, y]`
    DataPoint,
}

impl fmt::Display for StructuralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralKind::XAxis => write!(f, "x-axis declaration"),
            StructuralKind::YAxis => write!(f, "y-axis declaration"),
            StructuralKind::Quadrant(n) => write!(f, "quadrant-{n} declaration"),
            StructuralKind::DataPoint => write!(f, "data point"),
        }
    }
}

fn is_word_or_space(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace()
}

fn axis_or_quadrant(input: &mut &str) -> ModalResult<StructuralKind> {
    alt((
        "x-axis".value(StructuralKind::XAxis),
        "y-axis".value(StructuralKind::YAxis),
        (
            "quadrant-",
            any.verify_map(|c: char| c.to_digit(10)),
        )
            .map(|(_, digit)| StructuralKind::Quadrant(digit as u8)),
    ))
    .parse_next(input)
}

fn data_point(input: &mut &str) -> ModalResult<StructuralKind> {
    (
        take_while(1.., is_word_or_space),
        ':',
        take_while(0.., char::is_whitespace),
        '[',
    )
        .value(StructuralKind::DataPoint)
        .parse_next(input)
}

/// Classify one trimmed line of a quadrant chart.
///
/// Returns `None` for free-form lines.
pub fn classify_quadrant_line(text: &str) -> Option<StructuralKind> {
    let mut input = text;
    alt((axis_or_quadrant, data_point))
        .parse_next(&mut input)
        .ok()
}

/// Structural lines of a block, in order, with their kinds.
pub fn structural_lines<'src>(
    block: &DiagramBlock<'src>,
) -> impl Iterator<Item = (Line<'src>, StructuralKind)> {
    block
        .lines()
        .filter_map(|line| classify_quadrant_line(line.text()).map(|kind| (line, kind)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn test_axis_lines() {
        assert_eq!(
            classify_quadrant_line("x-axis Low --> High"),
            Some(StructuralKind::XAxis)
        );
        assert_eq!(
            classify_quadrant_line("y-axis 低 --> 高"),
            Some(StructuralKind::YAxis)
        );
    }

    #[test]
    fn test_quadrant_lines() {
        assert_eq!(
            classify_quadrant_line("quadrant-1 Do first"),
            Some(StructuralKind::Quadrant(1))
        );
        assert_eq!(
            classify_quadrant_line("quadrant-4 後回し"),
            Some(StructuralKind::Quadrant(4))
        );
        assert_eq!(classify_quadrant_line("quadrant-x Nope"), None);
    }

    #[test]
    fn test_data_point_lines() {
        assert_eq!(
            classify_quadrant_line("Point A: [0.5, 0.5]"),
            Some(StructuralKind::DataPoint)
        );
        assert_eq!(
            classify_quadrant_line("api_gateway:[0.1, 0.9]"),
            Some(StructuralKind::DataPoint)
        );
        assert_eq!(
            classify_quadrant_line("認証 機能: [0.3, 0.6]"),
            Some(StructuralKind::DataPoint)
        );
    }

    #[test]
    fn test_free_form_lines() {
        assert_eq!(classify_quadrant_line("quadrantChart"), None);
        assert_eq!(classify_quadrant_line("title 優先度マップ"), None);
        assert_eq!(classify_quadrant_line("%% comment: [x]"), None);
        assert_eq!(classify_quadrant_line("Point-A: [0.5, 0.5]"), None);
        assert_eq!(classify_quadrant_line("classDef hot color: #f00"), None);
    }

    #[test]
    fn test_structural_lines_of_block() {
        let body = "quadrantChart\n  title Map\n  x-axis L --> R\n  quadrant-2 Q\n  P: [0.1, 0.2]";
        let block = DiagramBlock::new(1, body, Span::new(0..body.len()));
        let kinds: Vec<_> = structural_lines(&block).map(|(_, kind)| kind).collect();

        assert_eq!(
            kinds,
            vec![
                StructuralKind::XAxis,
                StructuralKind::Quadrant(2),
                StructuralKind::DataPoint
            ]
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(StructuralKind::Quadrant(3).to_string(), "quadrant-3 declaration");
        assert_eq!(StructuralKind::DataPoint.to_string(), "data point");
    }
}

//! Chart type classification.

use std::fmt;

/// The chart type of a diagram block, taken from the leading token of its
/// first non-empty line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType<'src> {
    /// A `gantt` timeline chart.
    Gantt,
    /// A `quadrantChart`.
    Quadrant,
    /// Any other chart, carrying its raw leading token.
    ///
    /// The token is empty when the body has no non-empty line.
    Other(&'src str),
}

impl<'src> ChartType<'src> {
    /// Marker token for timeline charts.
    pub const GANTT: &'static str = "gantt";
    /// Marker token for quadrant charts.
    pub const QUADRANT: &'static str = "quadrantChart";

    /// Classify a diagram body.
    ///
    /// Markers are matched case-sensitively against the first
    /// whitespace-delimited token of the first non-empty line.
    pub fn classify(body: &'src str) -> Self {
        let token = body
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .and_then(|line| line.split_whitespace().next())
            .unwrap_or("");

        match token {
            Self::GANTT => ChartType::Gantt,
            Self::QUADRANT => ChartType::Quadrant,
            other => ChartType::Other(other),
        }
    }

    /// The token this chart type is printed as.
    pub fn token(&self) -> &'src str {
        match self {
            ChartType::Gantt => Self::GANTT,
            ChartType::Quadrant => Self::QUADRANT,
            ChartType::Other(token) => token,
        }
    }
}

impl fmt::Display for ChartType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

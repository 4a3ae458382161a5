//! # Sextant Parser
//!
//! Source-level grammars for Mermaid diagrams embedded in a content source.
//! This crate finds the diagrams and understands just enough of their text
//! for static checks; it never renders anything and never fails.
//!
//! ## Usage
//!
//! ```
//! # use sextant_parser::{extract, ChartType, ExtractOptions, gantt::parse_tasks};
//! let source = r#"{ type: 'mermaid', diagram: `gantt
//!     Setup : s1, 00:00, 30m
//!     Build : b1, after s1, 2h` }"#;
//!
//! let blocks = extract(source, &ExtractOptions::default());
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].chart_type(), ChartType::Gantt);
//!
//! let tasks = parse_tasks(&blocks[0]);
//! assert_eq!(tasks[1].minutes(), 120);
//! ```

pub mod gantt;
pub mod quadrant;

mod chart;
mod extract;
mod lines;
mod span;

pub use chart::ChartType;
pub use extract::{DiagramBlock, ExtractOptions, extract};
pub use lines::{Line, lines};
pub use span::Span;

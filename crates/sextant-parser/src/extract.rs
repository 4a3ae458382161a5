//! Diagram block extraction.
//!
//! A content source embeds diagrams as tagged long-form string literals:
//!
//! ```text
//! field ':' WS* DELIM BODY DELIM        BODY = one or more non-DELIM chars
//! ```
//!
//! [`extract`] finds every such literal in document order and returns the
//! trimmed bodies as [`DiagramBlock`]s.

use std::ops::Range;

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{delimited, preceded},
    error::ModalResult,
    stream::{LocatingSlice, Location},
    token::{take_till, take_while},
};

use crate::{
    chart::ChartType,
    lines::{Line, lines},
    span::Span,
};

type Input<'a> = LocatingSlice<&'a str>;

/// Field tag and quoting character that introduce a diagram literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    field: String,
    delimiter: char,
}

impl ExtractOptions {
    /// Create options for literals introduced by `field` and quoted with
    /// `delimiter`.
    pub fn new(field: impl Into<String>, delimiter: char) -> Self {
        Self {
            field: field.into(),
            delimiter,
        }
    }

    /// The field tag, e.g. `diagram`.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The quoting character, e.g. a backtick.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::new("diagram", '`')
    }
}

/// One diagram definition found in the content source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramBlock<'src> {
    index: usize,
    body: &'src str,
    span: Span,
}

impl<'src> DiagramBlock<'src> {
    /// Create a block directly from a body, located at `span` in its source.
    pub fn new(index: usize, body: &'src str, span: Span) -> Self {
        Self { index, body, span }
    }

    /// 1-based position of the block in document order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The diagram text, trimmed.
    pub fn body(&self) -> &'src str {
        self.body
    }

    /// Location of the trimmed body in the content source.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Classify the block by its leading token.
    pub fn chart_type(&self) -> ChartType<'src> {
        ChartType::classify(self.body)
    }

    /// Non-empty trimmed lines of the body, with spans in the source.
    pub fn lines(&self) -> impl Iterator<Item = Line<'src>> {
        lines(self.body, self.span.start())
    }
}

/// Parse the part of a diagram literal that follows the field tag.
///
/// Returns the raw body and its range relative to the start of `input`.
fn literal_body<'a>(
    input: &mut Input<'a>,
    delimiter: char,
) -> ModalResult<(&'a str, Range<usize>)> {
    preceded(
        (':', take_while(0.., char::is_whitespace)),
        delimited(delimiter, take_till(1.., delimiter).with_span(), delimiter),
    )
    .parse_next(input)
}

/// Extract every diagram literal from `source`, in document order.
///
/// A tag occurrence that is not followed by a well-formed literal is
/// skipped and scanning resumes right after its first character. Finding no
/// literal at all yields an empty vector.
pub fn extract<'src>(source: &'src str, options: &ExtractOptions) -> Vec<DiagramBlock<'src>> {
    let mut blocks = Vec::new();

    let Some(tag_step) = options.field.chars().next().map(char::len_utf8) else {
        debug!("Empty field tag, nothing to extract");
        return blocks;
    };

    let mut cursor = 0;
    while let Some(found) = source[cursor..].find(options.field.as_str()) {
        let tag_start = cursor + found;
        let after_tag = tag_start + options.field.len();

        let mut input = LocatingSlice::new(&source[after_tag..]);
        match literal_body(&mut input, options.delimiter) {
            Ok((raw, range)) => {
                let leading = raw.len() - raw.trim_start().len();
                let body = raw.trim();
                let start = after_tag + range.start + leading;
                let block = DiagramBlock::new(
                    blocks.len() + 1,
                    body,
                    Span::new(start..start + body.len()),
                );
                trace!(index = block.index(), start = start; "Extracted diagram literal");
                blocks.push(block);

                cursor = after_tag + input.current_token_start();
            }
            Err(_) => {
                trace!(offset = tag_start; "Tag without diagram literal");
                cursor = tag_start + tag_step;
            }
        }
    }

    debug!(count = blocks.len(); "Extraction finished");
    blocks
}

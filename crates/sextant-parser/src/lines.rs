//! Line splitting for diagram bodies.
//!
//! Both chart grammars operate on trimmed, non-empty lines. [`lines`] yields
//! them together with their [`Span`] in the content source.

use crate::span::Span;

/// A trimmed, non-empty line of a diagram body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'src> {
    text: &'src str,
    span: Span,
}

impl<'src> Line<'src> {
    /// The line text with surrounding whitespace removed.
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Location of the trimmed text in the content source.
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Split `body` on `\n`, trim each line and drop the empty ones.
///
/// `base` is the byte offset of `body` within the content source; every
/// yielded span is rebased onto it.
pub fn lines(body: &str, base: usize) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    body.split('\n').filter_map(move |raw| {
        let line_start = offset;
        offset += raw.len() + 1;

        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let leading = raw.len() - raw.trim_start().len();
        let start = base + line_start + leading;
        Some(Line {
            text,
            span: Span::new(start..start + text.len()),
        })
    })
}

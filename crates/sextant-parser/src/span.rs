//! Byte ranges into the content source.

use std::ops::Range;

/// A half-open byte range `start..end` into the content source.
///
/// Spans are always expressed relative to the whole source text so that a
/// finding can point back at the exact line of the file it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span covering `range`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `range.start > range.end`.
    pub fn new(range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "span start after end");
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Byte offset of the first byte in the span.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last byte in the span.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift the span right by `offset` bytes.
    ///
    /// Used to rebase a span computed inside a block body onto the source.
    pub fn offset(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

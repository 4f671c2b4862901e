//! Line position information attached to values.
//!
//! TJA is line-oriented, so everything reported back to the caller is anchored to the source line
//! it came from: a 1-based line number and the byte range of that line in the source text.

use std::ops::Range;

/// A generic wrapper that attaches a source line (number and byte span) to a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSpan<T> {
    content: T,
    /// Line number, starts with 1.
    line: usize,
    /// Byte range of the trimmed line in the source.
    range: Range<usize>,
}

impl<T> LineSpan<T> {
    /// Instances a new `LineSpan`.
    pub const fn new(content: T, line: usize, range: Range<usize>) -> Self {
        Self {
            content,
            line,
            range,
        }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the line number, starts with 1.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the byte range of the line in the source text.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for LineSpan<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.content, self.line)
    }
}

impl<T: std::error::Error + 'static> std::error::Error for LineSpan<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods to attach a [`LineSpan`] to any value.
pub trait LineSpanExt: Sized {
    /// Wraps `self` with the position of `line`.
    fn at_line(self, line: &crate::tja::lex::SourceLine<'_>) -> LineSpan<Self> {
        LineSpan::new(self, line.number(), line.range())
    }
}

impl<T> LineSpanExt for T {}

//! Parsing [`ChartDocument`] from [`SourceLine`]s.
//!
//! Raw [str] == [`split_lines`](crate::tja::lex::split_lines) ==> [`SourceLine`]s == [parse]
//! ==> [`ChartDocument`] (in [`TjaOutput`])
//!
//! Nothing here fails hard. A malformed declaration leaves its field absent (or its directive
//! ignored) and is reported as a [`ParseWarning`].

pub mod criteria;
pub mod header;
pub mod next_song;

use thiserror::Error;

use super::{
    TjaOutput,
    lex::{Directive, SourceLine},
    mixin::{LineSpan, LineSpanExt},
    model::ChartDocument,
};

use self::header::HeaderProcessor;

/// A soft failure found while parsing. It never aborts the parse.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// The comma-separated value had not enough fields.
    #[error("expected at least {expected} comma-separated fields, but found {found}")]
    TooFewFields {
        /// Required number of the fields.
        expected: usize,
        /// Number of the fields found.
        found: usize,
    },
    /// The value was expected to be a number.
    #[error("expected number, but found `{0}`")]
    ExpectedNumber(String),
    /// The value was expected to be an integer.
    #[error("expected integer, but found `{0}`")]
    ExpectedInteger(String),
    /// `COURSE:` had a value out of the known courses.
    #[error("unknown course `{0}`")]
    UnknownCourse(String),
    /// A course-scoped declaration appeared while no course is selected.
    #[error("`{0}` appeared outside of any course")]
    OutsideCourse(String),
    /// `EXAMn:` appeared in a course other than dan or tower.
    #[error("`{0}` appeared outside of dan or tower course")]
    OutsideExamCourse(String),
}

/// Type alias of `core::result::Result<T, ParseWarning>`
pub(crate) type Result<T> = core::result::Result<T, ParseWarning>;

/// A parse warning with the line it was found at.
pub type ParseWarningWithLine = LineSpan<ParseWarning>;

/// Parses a finite decimal number, as `OFFSET:` and the exam fields are written.
///
/// `nan` and `inf` are rejected, they have no representation in the storage record.
pub(crate) fn parse_number(value: &str) -> Result<f64> {
    let value = value.trim();
    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| ParseWarning::ExpectedNumber(value.to_string()))
}

impl ChartDocument {
    /// Parses the lines of a TJA source in a single pass.
    ///
    /// `lines` must be the whole line list of the source, because `#NEXTSONG` looks ahead the
    /// lines following it.
    #[must_use]
    pub fn from_lines(lines: &[SourceLine<'_>]) -> TjaOutput {
        let mut document = Self::default();
        let mut processor = HeaderProcessor::default();
        let mut warnings = vec![];
        for line in lines {
            let Some(content) = line.content() else {
                continue;
            };
            let result = match Directive::classify(content) {
                Directive::NextSong(fields) => {
                    next_song::parse_next_song(fields, lines, line.index(), &mut warnings)
                        .map(|song| document.exam_songs.push(song))
                }
                Directive::Header { key, value } => {
                    processor.on_header(&key, value, &mut document)
                }
                Directive::Marker(marker) => {
                    processor.on_marker(marker, &mut document);
                    Ok(())
                }
            };
            if let Err(warning) = result {
                warnings.push(warning.at_line(line));
            }
        }
        TjaOutput { document, warnings }
    }
}

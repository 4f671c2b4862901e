//! The parser module of TJA (.tja) chart metadata.
//!
//! TJA is a line-oriented text format of taiko charts. A file has `KEY:value` headers, then one
//! or more courses, each with its own headers and `#START`..`#END` note data. This module reads
//! only what identifies a chart: titles, the music file, the declared courses with their star
//! ratings, and the pass conditions and song list of exam (dan) charts. Note data and the other
//! commands are skipped.
//!
//! `lex` module splits the source into lines, strips `//` comments and classifies each line as a
//! [`lex::Directive`].
//!
//! `parse` module resolves the directives into a [`ChartDocument`] in a single pass.
//!
//! `record` module derives the audio manifest and the [`record::StorageRecord`] from it.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `str` to input). Decode Shift_JIS files before parsing.
//! - Never fail on malformed input. A malformed declaration is left absent and reported as a
//!   warning.
//! - Do not interpret note data or branches, only flag that a course has branches.

pub mod command;
pub mod lex;
pub mod mixin;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod record;

use self::{model::ChartDocument, parse::ParseWarningWithLine};

/// Output of parsing a TJA file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct TjaOutput {
    /// The parsed chart metadata.
    pub document: ChartDocument,
    /// Warnings that occurred during parsing.
    pub warnings: Vec<ParseWarningWithLine>,
}

/// Parse a TJA file from source text.
///
/// # Example
///
/// ```
/// use tja_rs::tja::{TjaOutput, parse_tja};
///
/// let source = "TITLE:Test Song\nWAVE:test.ogg\nCOURSE:Oni\nLEVEL:9\n#START\n1011,\n#END";
/// let TjaOutput { document, warnings } = parse_tja(source);
/// assert_eq!(document.title.as_deref(), Some("Test Song"));
/// assert_eq!(document.audio_manifest(), vec!["test.ogg"]);
/// assert!(warnings.is_empty());
/// ```
pub fn parse_tja(source: &str) -> TjaOutput {
    let lines = lex::split_lines(source);
    ChartDocument::from_lines(&lines)
}

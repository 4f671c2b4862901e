//! This module handles `#NEXTSONG title,subtitle,genre,wave,scoreinit,scorediff`, which appends a
//! song to an exam course.
//!
//! The song's `#DELAY` and its own `EXAM4:` follow the directive, so the lines after it are
//! scanned, at most [`LOOKAHEAD_LINES`] of them. The scan stops at the next `#NEXTSONG` or at
//! the first line that looks like note data.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use super::{ParseWarning, ParseWarningWithLine, Result, criteria::parse_criteria, parse_number};
use crate::tja::{lex::SourceLine, mixin::LineSpanExt, model::ExamSong};

/// How many lines after `#NEXTSONG` are scanned for its `#DELAY` and `EXAM4:`.
pub const LOOKAHEAD_LINES: usize = 9;

/// `#NEXTSONG` needs the title, subtitle, genre and wave fields.
const SONG_FIELDS: usize = 4;

/// Parses the fields of `#NEXTSONG` at `lines[index]`, looking ahead the following lines.
///
/// A malformed score or `#DELAY` falls back to its default and is pushed into `warnings`.
///
/// # Errors
///
/// Returns a warning if there are fewer than four fields, then the directive is ignored.
pub fn parse_next_song(
    fields: &str,
    lines: &[SourceLine<'_>],
    index: usize,
    warnings: &mut Vec<ParseWarningWithLine>,
) -> Result<ExamSong> {
    let fields: Vec<&str> = fields.split(',').map(str::trim).collect();
    let [title, subtitle, genre, wave, scores @ ..] = fields.as_slice() else {
        return Err(ParseWarning::TooFewFields {
            expected: SONG_FIELDS,
            found: fields.len(),
        });
    };
    let mut score = |field: Option<&&str>| match field.filter(|value| !value.is_empty()) {
        None => 0.0,
        Some(value) => parse_number(value).unwrap_or_else(|warning| {
            warnings.push(warning.at_line(&lines[index]));
            0.0
        }),
    };
    let mut song = ExamSong {
        title: (*title).to_string(),
        subtitle: (*subtitle).to_string(),
        genre: (*genre).to_string(),
        audio_ref: (*wave).to_string(),
        score_init: score(scores.first()),
        score_diff: score(scores.get(1)),
        delay: 0.0,
        criteria: None,
    };

    let end = lines.len().min(index + 1 + LOOKAHEAD_LINES);
    for line in lines.get(index + 1..end).unwrap_or_default() {
        let text = line.raw();
        if text.starts_with("#DELAY") {
            match text.split_whitespace().nth(1).map(parse_number) {
                Some(Ok(delay)) => song.delay = delay,
                Some(Err(warning)) => warnings.push(warning.at_line(line)),
                None => warnings.push(ParseWarning::ExpectedNumber(String::new()).at_line(line)),
            }
        } else if text.to_uppercase().starts_with("EXAM4:") {
            // Malformed ones are reported when the line itself is processed.
            song.criteria = text
                .split_once(':')
                .and_then(|(_, value)| parse_criteria(value).ok());
        } else if text.starts_with('#') && text.to_uppercase().contains("NEXTSONG") {
            break;
        } else if text.contains(',') && text.chars().any(is_decimal_digit) {
            // note data
            break;
        }
    }
    Ok(song)
}

/// Whether `c` is a decimal digit of any script, such as `1` or full-width `１`.
///
/// Other numerals (`Ⅱ`, `½`, `〇`) are not digits.
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || c.general_category() == GeneralCategory::DecimalNumber
}

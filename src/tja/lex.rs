//! Line splitting, comment stripping and directive classification of TJA source text.
//!
//! Raw [str] == [`split_lines`] ==> [`SourceLine`]s == [`SourceLine::content`] ==> [`Directive`]
//!
//! TJA has no tokens spanning lines, so the lexer stays line based. The raw lines are kept as
//! they are for the bounded lookahead of `#NEXTSONG`, which reads the lines following the
//! directive before comment stripping.

/// The directive name whose value may contain `//` literally, such as URLs.
const MAKER_PREFIX: &str = "maker:";

/// One line of the source text, trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLine<'a> {
    /// Index in the line list, starts with 0.
    index: usize,
    /// Byte offset of `text` in the source.
    start: usize,
    /// The line without surrounding whitespace (so without `\r` either).
    text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Returns the index of the line in the line list, starts with 0.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the line number, starts with 1.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index + 1
    }

    /// Returns the byte range of the trimmed line in the source.
    #[must_use]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.text.len()
    }

    /// Returns the trimmed line, comments included.
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        self.text
    }

    /// Returns the meaningful content of the line, or `None` if it is blank or only a comment.
    #[must_use]
    pub fn content(&self) -> Option<&'a str> {
        let line = strip_comment(self.text);
        (!line.is_empty()).then_some(line)
    }
}

/// Splits the source text into lines, keeping the position of each one.
///
/// Both `\n` and `\r\n` line endings are accepted.
#[must_use]
pub fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut offset = 0;
    source
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            let leading = line.len() - line.trim_start().len();
            let source_line = SourceLine {
                index,
                start: offset + leading,
                text: line.trim(),
            };
            offset += line.len() + 1;
            source_line
        })
        .collect()
}

/// Removes a trailing `//` comment from the trimmed line.
///
/// `MAKER:` lines are returned untouched because the credit text may contain `//`.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    if is_maker_line(line) {
        return line;
    }
    line.split_once("//")
        .map_or(line, |(before, _)| before.trim())
}

fn is_maker_line(line: &str) -> bool {
    line.get(..MAKER_PREFIX.len())
        .is_some_and(|prefix| prefix.to_lowercase() == MAKER_PREFIX)
}

/// A classified line of TJA source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Directive<'a> {
    /// `#NEXTSONG title,subtitle,genre,wave,scoreinit,scorediff` - Inserts a song into an exam course.
    /// Holds the comma-separated field list.
    NextSong(&'a str),
    /// `KEY:value` - A header declaration. The key is upper-cased, the value is trimmed.
    Header {
        /// Upper-cased declaration name.
        key: String,
        /// Trimmed declaration value.
        value: &'a str,
    },
    /// A line without `:`, such as `#BRANCHSTART` or note data.
    Marker(&'a str),
}

impl<'a> Directive<'a> {
    /// Classifies the comment-stripped, non-blank line.
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if starts_with_ignore_case(line, "#NEXTSONG") {
            let fields = line
                .split_once(char::is_whitespace)
                .map_or("", |(_, rest)| rest.trim_start());
            return Self::NextSong(fields);
        }
        match line.split_once(':') {
            Some((key, value)) => Self::Header {
                key: key.trim().to_uppercase(),
                value: value.trim(),
            },
            None => Self::Marker(line),
        }
    }
}

/// Checks whether the upper-cased `line` starts with `prefix`, which must be upper case.
pub(crate) fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.to_uppercase().starts_with(prefix)
}

//! Fancy diagnostics support using `ariadne`.
//!
//! Parse warnings carry the byte range of the line they were found at, so they can be rendered
//! as `ariadne::Report`s without extra bookkeeping. Ariadne computes rows and columns from the
//! byte ranges.
//!
//! # Usage Example
//!
//! ```rust
//! use tja_rs::{diagnostics::emit_tja_warnings, tja::parse_tja};
//!
//! let source = "TITLE:Test\nOFFSET:soon\nCOURSE:Oni\n";
//! let output = parse_tja(source);
//!
//! emit_tja_warnings("test.tja", source, &output.warnings);
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::tja::parse::ParseWarningWithLine;

/// Simple source container that holds the filename and source text.
///
/// # Usage Example
///
/// ```rust
/// use tja_rs::diagnostics::SimpleSource;
///
/// let source_text = "TITLE:test\nWAVE:test.ogg\n";
/// let source = SimpleSource::new("test.tja", source_text);
///
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.name(), "test.tja");
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned warnings to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert the warning to ariadne Report.
    ///
    /// # Parameters
    /// * `src` - Source file container (used for filename, ariadne handles row/column calculation)
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` consistently.
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: std::ops::Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, std::ops::Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

impl ToAriadne for ParseWarningWithLine {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        build_report(
            src,
            ReportKind::Warning,
            self.range(),
            "Parse: ignored declaration",
            self.content(),
            Color::Yellow,
        )
    }
}

/// Convenience method: batch render warnings to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete TJA source text
/// * `warnings` - List of warnings to display
pub fn emit_tja_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarningWithLine>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for w in warnings {
        let report = w.to_report(&simple);
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}

/// Collect `ariadne::Report` instances for a list of warnings without printing.
///
/// This is useful in tests to verify diagnostics can be generated while keeping test output clean.
#[must_use]
pub fn collect_tja_reports<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarningWithLine>,
) -> Vec<Report<'a, (String, std::ops::Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    warnings.into_iter().map(|w| w.to_report(&simple)).collect()
}

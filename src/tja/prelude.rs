//! Prelude module for the TJA module.
//!
//! You can use `use tja_rs::tja::prelude::*;` to import all TJA types at once.

pub use super::{
    TjaOutput,
    command::CourseKind,
    lex::{Directive, SourceLine, split_lines, strip_comment},
    mixin::{LineSpan, LineSpanExt},
    model::{ChartDocument, CourseEntry, Courses, Criteria, ExamSong},
    parse::{
        ParseWarning, ParseWarningWithLine, criteria::parse_criteria, header::HeaderProcessor,
        next_song::{LOOKAHEAD_LINES, parse_next_song},
    },
    parse_tja,
    record::{
        CHART_TYPE, DEFAULT_MUSIC_TYPE, ExamRecord, LangSlots, RecordCourses, StorageRecord,
    },
};

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, collect_tja_reports, emit_tja_warnings};

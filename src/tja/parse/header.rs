//! This module handles the declarations:
//!
//! - `TITLE:title` - Title of the music.
//! - `TITLEJA:title` - Title in the secondary language.
//! - `SUBTITLE:subtitle` - Subtitle of the music.
//! - `SUBTITLEJA:subtitle` - Subtitle in the secondary language.
//! - `WAVE:path` - Path of the music file.
//! - `OFFSET:seconds` - Timing offset of the chart.
//! - `MAKER:name` - Author of the chart.
//! - `COURSE:name` - Starts a course, one of `Easy`, `Normal`, `Hard`, `Oni`, `Edit`/`Ura`,
//!   `Dan` or `Tower`.
//! - `LEVEL:stars` - Star rating of the current course.
//! - `EXAM1:` to `EXAM4:` - Pass conditions of a dan or tower course.
//! - `#BRANCHSTART` - Marks the current course as a branch chart.
//!
//! Other declarations are ignored.

use super::{ParseWarning, Result, criteria::parse_criteria, parse_number};
use crate::tja::{command::CourseKind, model::ChartDocument};

/// It processes the declarations, tracking which course is being read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderProcessor {
    /// The most recently declared known course.
    current_course: Option<CourseKind>,
    /// Whether the current course is dan or tower.
    in_exam_course: bool,
}

impl HeaderProcessor {
    /// Applies a `KEY:value` declaration. `key` must be upper-cased.
    ///
    /// # Errors
    ///
    /// Returns a warning when the declaration is malformed or out of place. The document is
    /// updated as far as possible anyway.
    pub fn on_header(
        &mut self,
        key: &str,
        value: &str,
        document: &mut ChartDocument,
    ) -> Result<()> {
        match key {
            "TITLE" => document.title = non_empty(value),
            "TITLEJA" => document.title_alt = non_empty(value),
            "SUBTITLE" => document.subtitle = non_empty(value),
            "SUBTITLEJA" => document.subtitle_alt = non_empty(value),
            "WAVE" => document.audio_ref = non_empty(value),
            "MAKER" => document.maker = non_empty(value),
            "OFFSET" => {
                match parse_number(value) {
                    Ok(offset) => document.offset = Some(offset),
                    Err(warning) => {
                        document.offset = None;
                        return Err(warning);
                    }
                }
            }
            "COURSE" => self.on_course(value, document)?,
            "LEVEL" => {
                let course = self
                    .current_course
                    .ok_or_else(|| ParseWarning::OutsideCourse(key.to_string()))?;
                let first = value.split_whitespace().next().unwrap_or_default();
                let stars = first.parse().ok();
                document.courses.declare(course).stars = stars;
                if stars.is_none() {
                    return Err(ParseWarning::ExpectedInteger(first.to_string()));
                }
            }
            "EXAM1" | "EXAM2" | "EXAM3" | "EXAM4" => {
                if !self.in_exam_course {
                    return Err(ParseWarning::OutsideExamCourse(key.to_string()));
                }
                let slot = key.as_bytes()[4] - b'0';
                let mut criteria = parse_criteria(value)?;
                criteria.slot_id = Some(slot);
                // EXAM4 belongs to the song declared by #NEXTSONG.
                if slot != 4 {
                    document.exam_criteria.push(criteria);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn on_course(&mut self, value: &str, document: &mut ChartDocument) -> Result<()> {
        let course = CourseKind::from_declaration(value);
        self.current_course = course;
        self.in_exam_course = course.is_some_and(CourseKind::is_exam);
        if self.in_exam_course {
            document.is_exam_chart = true;
        }
        let course = course.ok_or_else(|| ParseWarning::UnknownCourse(value.to_string()))?;
        document.courses.declare(course);
        Ok(())
    }

    /// Applies a line without `:`.
    pub fn on_marker(&self, marker: &str, document: &mut ChartDocument) {
        let Some(course) = self.current_course else {
            return;
        };
        if marker.starts_with("BRANCHSTART") || marker.starts_with("#BRANCHSTART") {
            document.courses.declare(course).has_branch = true;
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

//! The parsed TJA chart metadata.
//!
//! [`ChartDocument`] is built in one pass by [`crate::tja::parse_tja`] and is not modified
//! afterwards. Derived views, such as the audio manifest and the storage record, are in
//! [`crate::tja::record`].

pub mod course;
pub mod exam;

pub use self::{
    course::{CourseEntry, Courses},
    exam::{Criteria, ExamSong},
};

/// Metadata of a TJA chart.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartDocument {
    /// `TITLE:` - Title of the music.
    pub title: Option<String>,
    /// `SUBTITLE:` - Subtitle of the music, often the artist prefixed by `--` or `++`.
    pub subtitle: Option<String>,
    /// `TITLEJA:` - Title in the secondary language.
    pub title_alt: Option<String>,
    /// `SUBTITLEJA:` - Subtitle in the secondary language.
    pub subtitle_alt: Option<String>,
    /// `WAVE:` - Path of the music file.
    pub audio_ref: Option<String>,
    /// `OFFSET:` - Seconds from the start of the music to the first measure.
    /// `None` if it is absent or not a number.
    pub offset: Option<f64>,
    /// `MAKER:` - Who made the chart. It is kept verbatim, `//` included.
    pub maker: Option<String>,
    /// Declared courses in first-seen order.
    pub courses: Courses,
    /// Whether a `COURSE:Dan` or `COURSE:Tower` was declared.
    pub is_exam_chart: bool,
    /// `EXAM1:` to `EXAM3:` - Pass conditions over the whole exam.
    pub exam_criteria: Vec<Criteria>,
    /// `#NEXTSONG` - Songs played in the exam, in declaration order.
    pub exam_songs: Vec<ExamSong>,
}

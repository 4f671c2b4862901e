//! Views derived from a parsed [`ChartDocument`]: the audio manifest and the storage record.
//!
//! [`StorageRecord`] is the shape handed to the song database. Its key names and defaults are a
//! wire contract with existing consumers, so the serialized form must not drift.

use itertools::Itertools;

use super::{
    command::CourseKind,
    model::{ChartDocument, CourseEntry, Criteria, ExamSong},
};

/// Audio type used when `WAVE:` has no usable extension.
pub const DEFAULT_MUSIC_TYPE: &str = "mp3";

/// Chart type written to every record.
pub const CHART_TYPE: &str = "tja";

/// Returns the final component of a `/`-separated path.
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Returns the lowercased extension of the file name of `path`, without the dot.
///
/// Leading dots belong to the name, so `.ogg` has no extension.
#[must_use]
pub fn extension(path: &str) -> Option<String> {
    let name = file_name(path).trim_start_matches('.');
    let (_, extension) = name.rsplit_once('.')?;
    (!extension.is_empty()).then(|| extension.to_lowercase())
}

impl ChartDocument {
    /// Lists the file names of the audio files the chart needs: `WAVE:` first, then the songs
    /// of `#NEXTSONG` in order, without duplicates.
    #[must_use]
    pub fn audio_manifest(&self) -> Vec<String> {
        let songs = self
            .exam_songs
            .iter()
            .map(|song| song.audio_ref.as_str())
            .filter(|wave| !wave.is_empty());
        self.audio_ref
            .as_deref()
            .into_iter()
            .chain(songs)
            .map(file_name)
            .unique()
            .map(str::to_string)
            .collect()
    }

    /// Audio type of the music file, from the extension of `WAVE:`.
    #[must_use]
    pub fn music_type(&self) -> String {
        self.audio_ref
            .as_deref()
            .and_then(extension)
            .unwrap_or_else(|| DEFAULT_MUSIC_TYPE.to_string())
    }

    /// Builds the storage record of the chart.
    ///
    /// `OFFSET:` is not propagated: the record's offset is an extra shift on top of the one
    /// applied by the chart reader, so it is always 0.
    #[must_use]
    pub fn to_record(&self, song_id: &str, created_ns: u64) -> StorageRecord {
        let mut courses = RecordCourses::from_courses(self);
        let mut exam = None;
        if self.is_exam_chart {
            courses.dan = self.courses.get(CourseKind::Dan).copied();
            exam = Some(ExamRecord {
                is_dan: true,
                dan_exams: self.exam_criteria.clone(),
                dan_songs: self.exam_songs.clone(),
            });
        }
        StorageRecord {
            id: song_id.to_string(),
            chart_type: CHART_TYPE.to_string(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            title_lang: LangSlots::localized(self.title.as_deref(), self.title_alt.as_deref()),
            subtitle_lang: LangSlots::localized(
                self.subtitle.as_deref(),
                self.subtitle_alt.as_deref(),
            ),
            courses,
            enabled: false,
            category_id: None,
            music_type: self.music_type(),
            offset: 0,
            skin_id: None,
            preview: 0,
            volume: 1.0,
            maker_id: None,
            hash: None,
            order: song_id.to_string(),
            created_ns,
            exam,
        }
    }
}

/// The song record stored into the database.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StorageRecord {
    /// Song id given by the caller.
    pub id: String,
    /// Always `"tja"`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub chart_type: String,
    /// `TITLE:`.
    pub title: Option<String>,
    /// `SUBTITLE:`.
    pub subtitle: Option<String>,
    /// Title per language.
    pub title_lang: LangSlots,
    /// Subtitle per language.
    pub subtitle_lang: LangSlots,
    /// Courses by name.
    pub courses: RecordCourses,
    /// Whether the song is listed. New songs start hidden.
    pub enabled: bool,
    /// Category, assigned later.
    pub category_id: Option<String>,
    /// Audio type of the music file.
    pub music_type: String,
    /// Extra timing offset, always 0.
    pub offset: i32,
    /// Skin, assigned later.
    pub skin_id: Option<String>,
    /// Preview start position.
    pub preview: i32,
    /// Music volume.
    pub volume: f64,
    /// Maker account, assigned later.
    pub maker_id: Option<String>,
    /// Chart hash, computed later.
    pub hash: Option<String>,
    /// Sort key, the song id.
    pub order: String,
    /// Creation time in nanoseconds given by the caller.
    pub created_ns: u64,
    /// Fields only present for exam charts.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub exam: Option<ExamRecord>,
}

/// Localized text slots of a record.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LangSlots {
    /// Japanese.
    pub ja: Option<String>,
    /// English.
    pub en: Option<String>,
    /// Simplified Chinese.
    pub cn: Option<String>,
    /// Traditional Chinese.
    pub tw: Option<String>,
    /// Korean.
    pub ko: Option<String>,
}

impl LangSlots {
    /// `ja` prefers the secondary-language text and falls back to the primary one. `cn` mirrors
    /// the secondary-language text only.
    #[must_use]
    pub fn localized(primary: Option<&str>, alt: Option<&str>) -> Self {
        Self {
            ja: alt.or(primary).map(str::to_string),
            cn: alt.map(str::to_string),
            ..Self::default()
        }
    }
}

/// Courses of a record. Regular courses are always emitted, `null` if undeclared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RecordCourses {
    /// `COURSE:Easy`.
    pub easy: Option<CourseEntry>,
    /// `COURSE:Normal`.
    pub normal: Option<CourseEntry>,
    /// `COURSE:Hard`.
    pub hard: Option<CourseEntry>,
    /// `COURSE:Oni`.
    pub oni: Option<CourseEntry>,
    /// `COURSE:Edit` or `COURSE:Ura`.
    pub ura: Option<CourseEntry>,
    /// `COURSE:Dan`, only emitted for exam charts declaring it.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dan: Option<CourseEntry>,
}

impl RecordCourses {
    fn from_courses(document: &ChartDocument) -> Self {
        let entry = |kind| document.courses.get(kind).copied();
        Self {
            easy: entry(CourseKind::Easy),
            normal: entry(CourseKind::Normal),
            hard: entry(CourseKind::Hard),
            oni: entry(CourseKind::Oni),
            ura: entry(CourseKind::Ura),
            dan: None,
        }
    }
}

/// Exam part of a record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExamRecord {
    /// Always `true`.
    pub is_dan: bool,
    /// `EXAM1:` to `EXAM3:`.
    pub dan_exams: Vec<Criteria>,
    /// `#NEXTSONG` songs.
    pub dan_songs: Vec<ExamSong>,
}

#[cfg(feature = "serde")]
impl StorageRecord {
    /// Converts the record into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Converts the record into a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

//! Pass conditions and songs of an exam (dan) chart.

/// A pass condition, declared as `EXAMn:kind,low,high,scope`.
///
/// `EXAM1:g,97,100,m` means the gauge (`g`) must reach 97 to pass and 100 for the gold
/// pass, measured with `m` (more than) over the whole exam.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criteria {
    /// Lowercased kind of the condition, such as `g` (gauge) or `jp` (good count).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Threshold of the red (normal) pass.
    #[cfg_attr(feature = "serde", serde(rename = "red"))]
    pub threshold_low: f64,
    /// Threshold of the gold pass.
    #[cfg_attr(feature = "serde", serde(rename = "gold"))]
    pub threshold_high: f64,
    /// Lowercased comparison code, `m` (more than) or `l` (less than).
    pub scope: String,
    /// The `n` of `EXAMn`. `None` for conditions attached to a `#NEXTSONG`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "id", default, skip_serializing_if = "Option::is_none")
    )]
    pub slot_id: Option<u8>,
}

/// A song of an exam, declared by `#NEXTSONG`.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExamSong {
    /// Title of the song. May be empty.
    pub title: String,
    /// Subtitle of the song.
    pub subtitle: String,
    /// Genre of the song.
    pub genre: String,
    /// Path of the music file of the song.
    #[cfg_attr(feature = "serde", serde(rename = "wave"))]
    pub audio_ref: String,
    /// Initial score per note.
    #[cfg_attr(feature = "serde", serde(rename = "scoreinit"))]
    pub score_init: f64,
    /// Score increase per combo step.
    #[cfg_attr(feature = "serde", serde(rename = "scorediff"))]
    pub score_diff: f64,
    /// `#DELAY` - Wait before the song starts.
    pub delay: f64,
    /// `EXAM4:` following the `#NEXTSONG` - Condition of this song only.
    #[cfg_attr(feature = "serde", serde(rename = "exam"))]
    pub criteria: Option<Criteria>,
}

//! Definitions of the values declared by TJA commands.

/// A difficulty track of the chart, declared by `COURSE:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CourseKind {
    /// `COURSE:Easy`.
    Easy,
    /// `COURSE:Normal`.
    Normal,
    /// `COURSE:Hard`.
    Hard,
    /// `COURSE:Oni`.
    Oni,
    /// `COURSE:Edit` or `COURSE:Ura`, the hidden oni course.
    Ura,
    /// `COURSE:Dan`, a multi-song graded trial.
    Dan,
    /// `COURSE:Tower`, treated as an exam chart like [`CourseKind::Dan`].
    Tower,
}

impl CourseKind {
    /// Resolves the value of a `COURSE:` declaration. The value is matched case-insensitively.
    ///
    /// Numeric course values (`COURSE:3`) are not recognized.
    #[must_use]
    pub fn from_declaration(value: &str) -> Option<Self> {
        Some(match value.trim().to_uppercase().as_str() {
            "EASY" => Self::Easy,
            "NORMAL" => Self::Normal,
            "HARD" => Self::Hard,
            "ONI" => Self::Oni,
            "EDIT" | "URA" => Self::Ura,
            "DAN" => Self::Dan,
            "TOWER" => Self::Tower,
            _ => return None,
        })
    }

    /// Whether the course makes the chart an exam chart.
    #[must_use]
    pub const fn is_exam(self) -> bool {
        matches!(self, Self::Dan | Self::Tower)
    }
}

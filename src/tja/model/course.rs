//! Courses declared in a chart, keyed by [`CourseKind`].

use crate::tja::command::CourseKind;

/// The parsed state of one course.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseEntry {
    /// `LEVEL:` - Star rating, `None` if absent or not an integer.
    pub stars: Option<i32>,
    /// Whether the course contains `#BRANCHSTART`.
    #[cfg_attr(feature = "serde", serde(rename = "branch"))]
    pub has_branch: bool,
}

/// Courses in first-seen order. Each [`CourseKind`] appears at most once.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Courses(Vec<(CourseKind, CourseEntry)>);

impl Courses {
    /// Inserts a fresh entry for `kind` unless it is already declared.
    pub fn declare(&mut self, kind: CourseKind) -> &mut CourseEntry {
        let index = match self.0.iter().position(|(declared, _)| *declared == kind) {
            Some(index) => index,
            None => {
                self.0.push((kind, CourseEntry::default()));
                self.0.len() - 1
            }
        };
        &mut self.0[index].1
    }

    /// Gets the entry of `kind`.
    #[must_use]
    pub fn get(&self, kind: CourseKind) -> Option<&CourseEntry> {
        self.0
            .iter()
            .find_map(|(declared, entry)| (*declared == kind).then_some(entry))
    }

    /// Gets the entry of `kind` mutably.
    pub fn get_mut(&mut self, kind: CourseKind) -> Option<&mut CourseEntry> {
        self.0
            .iter_mut()
            .find_map(|(declared, entry)| (*declared == kind).then_some(entry))
    }

    /// Whether `kind` is declared.
    #[must_use]
    pub fn contains(&self, kind: CourseKind) -> bool {
        self.get(kind).is_some()
    }

    /// Iterates the courses in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (CourseKind, &CourseEntry)> {
        self.0.iter().map(|(kind, entry)| (*kind, entry))
    }

    /// Number of the declared courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no course is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

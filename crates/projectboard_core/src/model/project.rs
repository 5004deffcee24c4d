//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project proposal record and its lifecycle states.
//! - Provide the draft validation contract enforced at the presentation
//!   boundary.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - Projects are constructed only by the store's creation path; callers
//!   receive them through snapshots.
//! - Draft validation runs before the store is called, never inside it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Minimum number of characters for a draft description.
pub const DESCRIPTION_MIN_CHARS: usize = 5;
/// Inclusive lower bound for a draft people count.
pub const PEOPLE_MIN: u32 = 1;
/// Inclusive upper bound for a draft people count.
pub const PEOPLE_MAX: u32 = 5;

/// Stable identifier for every project tracked by a store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Lifecycle state of a project proposal.
///
/// Transitions are symmetric: a project may move `Active -> Finished` and
/// back. No other states exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Submitted and currently being worked on.
    Active,
    /// Work concluded; kept for reference.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase name used in diagnostic events and list headings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// Canonical project proposal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID, unique for the lifetime of the owning store.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned to the proposal.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a record with a generated stable ID and `Active` status.
    ///
    /// # Invariants
    /// - Crate-private: only the store's creation path builds projects.
    pub(crate) fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether the project belongs in the active list.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    /// Human-readable assignee count, singular-aware.
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.people)
        }
    }
}

/// User-submitted proposal input.
///
/// The store accepts whatever it is handed; callers run [`validate`] before
/// forwarding a draft so malformed form input never reaches the collection.
///
/// [`validate`]: ProjectDraft::validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people,
        }
    }

    /// Checks the form-input contract the store relies on callers to honor.
    ///
    /// # Contract
    /// - Title must be non-empty after trimming.
    /// - Description must be at least [`DESCRIPTION_MIN_CHARS`] characters.
    /// - People must fall within [`PEOPLE_MIN`]..=[`PEOPLE_MAX`].
    ///
    /// # Errors
    /// - Returns the first violated rule in field order.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle);
        }

        let description_chars = self.description.chars().count();
        if description_chars < DESCRIPTION_MIN_CHARS {
            return Err(ProjectValidationError::DescriptionTooShort {
                min: DESCRIPTION_MIN_CHARS,
                actual: description_chars,
            });
        }

        if !(PEOPLE_MIN..=PEOPLE_MAX).contains(&self.people) {
            return Err(ProjectValidationError::PeopleOutOfRange {
                min: PEOPLE_MIN,
                max: PEOPLE_MAX,
                actual: self.people,
            });
        }

        Ok(())
    }
}

/// Draft validation failure raised at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Description is shorter than the required minimum.
    DescriptionTooShort { min: usize, actual: usize },
    /// People count falls outside the allowed inclusive range.
    PeopleOutOfRange { min: u32, max: u32, actual: u32 },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::DescriptionTooShort { min, actual } => write!(
                f,
                "description must be at least {min} characters, got {actual}"
            ),
            Self::PeopleOutOfRange { min, max, actual } => {
                write!(f, "people must be between {min} and {max}, got {actual}")
            }
        }
    }
}

impl Error for ProjectValidationError {}

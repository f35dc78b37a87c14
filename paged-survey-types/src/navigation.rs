use std::collections::HashSet;

use crate::{QuestionId, SectionId};

/// Where the respondent currently is within a survey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationCursor {
    /// No section resolved yet; the first section by position applies.
    #[default]
    Unset,

    /// An active section is set and rendering.
    At(SectionId),

    /// Every section has been finished. Terminal.
    Complete,
}

impl NavigationCursor {
    /// The active section id, if one is set.
    pub fn section(&self) -> Option<SectionId> {
        match self {
            Self::At(id) => Some(*id),
            Self::Unset | Self::Complete => None,
        }
    }

    /// Check if the survey is finished.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Per-survey navigation state, persisted between requests.
///
/// `questions_shown` holds the ids rendered by the most recent pass; the
/// next submission reads it to detect freshly revealed subquestions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub cursor: NavigationCursor,
    pub questions_shown: HashSet<QuestionId>,
}

impl NavigationState {
    /// Create the initial state: no cursor, nothing shown.
    pub fn new() -> Self {
        Self::default()
    }
}

use crate::{QuestionId, SectionId, SurveyId};

/// Error type for survey navigation.
///
/// Navigation outcomes (back, advance, reveal, completion) are ordinary
/// classification values, not errors; only genuinely fatal conditions for a
/// request appear here.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The requested section does not belong to the survey.
    #[error("no section with id ({section}) in survey {survey}")]
    SectionNotFound {
        survey: SurveyId,
        section: SectionId,
    },

    /// The survey has no sections to resolve a current section from.
    #[error("survey {0} has no sections")]
    EmptySurvey(SurveyId),

    /// A store collaborator failed; passed through untouched.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors surfaced by storage collaborators.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("session error: {0}")]
    Session(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("unknown survey: {0}")]
    UnknownSurvey(SurveyId),
}

/// A survey definition that violates a structural invariant.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("survey {survey} has two sections at position {position}")]
    DuplicateSectionPosition { survey: SurveyId, position: u32 },

    #[error("duplicate section id {0}")]
    DuplicateSection(SectionId),

    #[error("duplicate question id {0}")]
    DuplicateQuestion(QuestionId),

    #[error("question {0} offers no answer options")]
    NoOptions(QuestionId),

    #[error("duplicate option value '{value}' in question {question}")]
    DuplicateOptionValue { question: QuestionId, value: String },

    #[error("question {question} references unknown parent ({parent})")]
    UnknownParent {
        question: QuestionId,
        parent: QuestionId,
    },

    #[error("parent chain of question {0} never reaches a top-level question")]
    ParentCycle(QuestionId),
}

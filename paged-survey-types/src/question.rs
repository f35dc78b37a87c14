use crate::QuestionId;

/// A single question in a survey section.
///
/// A question with a parent is a subquestion: it is only presented when the
/// parent's current answer equals the trigger value it was registered with.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The question's id, unique within the survey.
    id: QuestionId,

    /// The kind of input used to answer (determines rendering).
    kind: QuestionKind,

    /// The prompt text shown to the respondent.
    label: String,

    /// Parent question id; non-null marks this question a subquestion.
    parent_id: Option<QuestionId>,

    /// The parent answer value that makes this subquestion visible.
    parent_value: Option<String>,

    /// The answers offered, in display order.
    options: Vec<AnswerOption>,

    /// Whether an answer must be given before the section can be left.
    required: bool,
}

impl Question {
    fn new(id: impl Into<QuestionId>, label: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            parent_id: None,
            parent_value: None,
            options: Vec::new(),
            required: true,
        }
    }

    /// Create a dropdown-style question.
    pub fn select(id: impl Into<QuestionId>, label: impl Into<String>) -> Self {
        Self::new(id, label, QuestionKind::Select)
    }

    /// Create a radio-group question.
    pub fn radio(id: impl Into<QuestionId>, label: impl Into<String>) -> Self {
        Self::new(id, label, QuestionKind::Radio)
    }

    /// Add an answer option.
    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(AnswerOption {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Make this question a subquestion of `parent`, shown when the parent's
    /// answer equals `parent_value`.
    pub fn subquestion_of(
        mut self,
        parent: impl Into<QuestionId>,
        parent_value: impl Into<String>,
    ) -> Self {
        self.parent_id = Some(parent.into());
        self.parent_value = Some(parent_value.into());
        self
    }

    /// Allow leaving the section without answering this question.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the question kind.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Get the prompt text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the parent question id, if this is a subquestion.
    pub fn parent_id(&self) -> Option<QuestionId> {
        self.parent_id
    }

    /// Get the parent answer value that triggers visibility.
    pub fn parent_value(&self) -> Option<&str> {
        self.parent_value.as_deref()
    }

    /// Get the answer options.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Whether an answer is required to leave the section.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Check if this question has a parent.
    pub fn is_subquestion(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// The kind of question, determining the input element used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single-select dropdown.
    Select,

    /// Single-choice radio group.
    Radio,
}

/// One answer a question offers: the stored token and its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    /// The value stored when this answer is chosen.
    pub value: String,

    /// The text shown to the respondent.
    pub label: String,
}

impl AnswerOption {
    /// Create a new answer option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

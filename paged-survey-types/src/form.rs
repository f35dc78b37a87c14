use std::collections::BTreeMap;

use crate::{ResponseSnapshot, SectionId, SurveyId};

/// How a form field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-select dropdown.
    Select,

    /// Single-choice radio group.
    Radio,

    /// Navigation control (back, next, finish).
    Button,
}

/// One choice offered by a select or radio field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// A renderable form field, decoupled from any rendering toolkit.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// Field identifier, also the name submitted back.
    pub id: String,

    /// Prompt text, or the control's caption for buttons.
    pub label: String,

    pub kind: FieldKind,

    /// Offered choices; empty for buttons.
    pub options: Vec<FieldOption>,

    /// The value to preselect, if one is known.
    pub current_value: Option<String>,

    pub required: bool,
}

impl FormField {
    /// Create a navigation button field.
    pub fn button(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: FieldKind::Button,
            options: Vec::new(),
            current_value: None,
            required: false,
        }
    }
}

/// The renderable model of one section page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionForm {
    pub survey_id: SurveyId,
    pub survey_title: String,
    pub survey_description: Option<String>,

    pub section_id: SectionId,
    pub section_title: String,
    pub section_description: Option<String>,

    /// Question fields in presentation order, then navigation buttons.
    pub fields: Vec<FormField>,

    /// Validation messages keyed by field identifier.
    pub errors: BTreeMap<String, String>,
}

impl SectionForm {
    /// Look up a field by identifier.
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Check if a field with the identifier is present.
    pub fn has_field(&self, id: &str) -> bool {
        self.field(id).is_some()
    }
}

/// What one pass through a survey produces for rendering: either the active
/// section's form, or the aggregated answers once the survey is finished.
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyView {
    Form(SectionForm),
    Complete(ResponseSnapshot),
}

impl SurveyView {
    /// The section form, unless the survey is complete.
    pub fn as_form(&self) -> Option<&SectionForm> {
        match self {
            Self::Form(form) => Some(form),
            Self::Complete(_) => None,
        }
    }

    /// The aggregated answers, once the survey is complete.
    pub fn as_complete(&self) -> Option<&ResponseSnapshot> {
        match self {
            Self::Form(_) => None,
            Self::Complete(snapshot) => Some(snapshot),
        }
    }

    /// Check if the survey is finished.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

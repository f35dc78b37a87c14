use std::collections::BTreeMap;

use crate::{QuestionId, SectionId};

/// The field identifier of a question's input.
pub fn question_field_id(id: QuestionId) -> String {
    format!("question-{id}")
}

/// The field identifier of a section's back control.
pub fn back_field_id(id: SectionId) -> String {
    format!("back-{id}")
}

/// The field identifier of a section's submit control.
pub fn submit_field_id(id: SectionId) -> String {
    format!("submit-{id}")
}

/// Raw values of a submitted form, keyed by field identifier.
///
/// An empty submission stands for a plain render with no input to process.
/// Field identifiers that do not belong to the rendered section are ignored
/// during classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    values: BTreeMap<String, String>,
}

impl RawSubmission {
    /// Create a submission carrying no fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a field value.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Insert a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Get a field value.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Check if no fields were submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate all submitted fields.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }
}

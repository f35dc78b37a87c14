use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{QuestionId, SectionId};

/// Key of one stored answer: the section and the question it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResponseKey {
    pub section: SectionId,
    pub question: QuestionId,
}

impl ResponseKey {
    /// Create a new response key.
    pub fn new(section: impl Into<SectionId>, question: impl Into<QuestionId>) -> Self {
        Self {
            section: section.into(),
            question: question.into(),
        }
    }
}

/// All answers stored for one survey, keyed by section and question.
///
/// Answer values are plain strings regardless of the option value's origin,
/// so comparisons against subquestion trigger values are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSnapshot {
    sections: BTreeMap<SectionId, BTreeMap<QuestionId, String>>,
}

impl ResponseSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stored answer for a key.
    pub fn answer(&self, key: ResponseKey) -> Option<&str> {
        self.sections
            .get(&key.section)
            .and_then(|answers| answers.get(&key.question))
            .map(String::as_str)
    }

    /// Check if an answer is stored for a key.
    pub fn contains(&self, key: ResponseKey) -> bool {
        self.answer(key).is_some()
    }

    /// Store an answer, replacing any previous one.
    pub fn set(&mut self, key: ResponseKey, value: impl Into<String>) {
        self.sections
            .entry(key.section)
            .or_default()
            .insert(key.question, value.into());
    }

    /// Remove a stored answer, returning it if present.
    pub fn remove(&mut self, key: ResponseKey) -> Option<String> {
        let answers = self.sections.get_mut(&key.section)?;
        let removed = answers.remove(&key.question);
        if answers.is_empty() {
            self.sections.remove(&key.section);
        }
        removed
    }

    /// Iterate the answers of one section, ordered by question id.
    pub fn section_answers(&self, section: SectionId) -> impl Iterator<Item = (QuestionId, &str)> {
        self.sections
            .get(&section)
            .into_iter()
            .flat_map(|answers| answers.iter().map(|(id, value)| (*id, value.as_str())))
    }

    /// Iterate all answers, ordered by section then question id.
    pub fn iter(&self) -> impl Iterator<Item = (ResponseKey, &str)> {
        self.sections.iter().flat_map(|(section, answers)| {
            answers
                .iter()
                .map(|(question, value)| (ResponseKey::new(*section, *question), value.as_str()))
        })
    }

    /// The sections that hold at least one answer, in id order.
    pub fn sections(&self) -> impl Iterator<Item = SectionId> {
        self.sections.keys().copied()
    }

    /// Total number of stored answers.
    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    /// Check if no answers are stored.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

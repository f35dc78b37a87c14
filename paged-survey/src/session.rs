//! Session-backed store implementations.
//!
//! Answers and navigation state live in a plain key-value session, one key
//! namespace per survey id:
//!
//! - `survey.<id>.responses` - section id to question id to answer value
//! - `survey.<id>.active_section_id` - id of the section being rendered
//! - `survey.<id>.questions_shown` - question ids of the latest render
//! - `survey.<id>.complete` - present once the survey is finished
//!
//! Values are JSON, except `active_section_id` which is the bare number.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use paged_survey_types::{
    NavigationCursor, NavigationState, NavigationStore, ResponseKey, ResponseSnapshot,
    ResponseStore, SectionId, StorageError, SurveyId,
};

/// Minimal key-value session contract.
///
/// Implementations only need per-key read-after-write within one
/// respondent's session; cross-session guarantees are not required.
pub trait SessionStore {
    /// Get the value under a key.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set the value under a key.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key, if present.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process session store for tests, demos, and single-process use.
///
/// Clones share the same underlying map, so one session can back several
/// store adapters at once.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StorageError::Session(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Session(e.to_string()))?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Session(e.to_string()))?;
        values.remove(key);
        Ok(())
    }
}

fn responses_key(survey: SurveyId) -> String {
    format!("survey.{survey}.responses")
}

fn active_section_key(survey: SurveyId) -> String {
    format!("survey.{survey}.active_section_id")
}

fn questions_shown_key(survey: SurveyId) -> String {
    format!("survey.{survey}.questions_shown")
}

fn complete_key(survey: SurveyId) -> String {
    format!("survey.{survey}.complete")
}

fn bad_json(error: serde_json::Error) -> StorageError {
    StorageError::Serialization(error.to_string())
}

/// [`ResponseStore`] over a session key namespace.
#[derive(Debug, Clone)]
pub struct SessionResponseStore<S> {
    session: S,
}

impl<S: SessionStore> SessionResponseStore<S> {
    /// Create a store over the given session.
    pub fn new(session: S) -> Self {
        Self { session }
    }

    fn load(&self, survey: SurveyId) -> Result<ResponseSnapshot, StorageError> {
        match self.session.get(&responses_key(survey))? {
            Some(raw) => serde_json::from_str(&raw).map_err(bad_json),
            None => Ok(ResponseSnapshot::new()),
        }
    }

    fn store(&self, survey: SurveyId, snapshot: &ResponseSnapshot) -> Result<(), StorageError> {
        let raw = serde_json::to_string(snapshot).map_err(bad_json)?;
        self.session.set(&responses_key(survey), &raw)
    }
}

impl<S: SessionStore> ResponseStore for SessionResponseStore<S> {
    fn snapshot(&self, survey: SurveyId) -> Result<ResponseSnapshot, StorageError> {
        self.load(survey)
    }

    fn set(&self, survey: SurveyId, key: ResponseKey, value: &str) -> Result<(), StorageError> {
        let mut snapshot = self.load(survey)?;
        snapshot.set(key, value);
        self.store(survey, &snapshot)
    }

    fn delete(&self, survey: SurveyId, key: ResponseKey) -> Result<(), StorageError> {
        let mut snapshot = self.load(survey)?;
        if snapshot.remove(key).is_some() {
            self.store(survey, &snapshot)?;
        }
        Ok(())
    }
}

/// [`NavigationStore`] over a session key namespace.
#[derive(Debug, Clone)]
pub struct SessionNavigationStore<S> {
    session: S,
}

impl<S: SessionStore> SessionNavigationStore<S> {
    /// Create a store over the given session.
    pub fn new(session: S) -> Self {
        Self { session }
    }
}

impl<S: SessionStore> NavigationStore for SessionNavigationStore<S> {
    fn load(&self, survey: SurveyId) -> Result<NavigationState, StorageError> {
        let cursor = if self.session.get(&complete_key(survey))?.is_some() {
            NavigationCursor::Complete
        } else {
            match self.session.get(&active_section_key(survey))? {
                Some(raw) => {
                    let id: u64 = raw.parse().map_err(|_| {
                        StorageError::Serialization(format!("bad section id: {raw}"))
                    })?;
                    NavigationCursor::At(SectionId::new(id))
                }
                None => NavigationCursor::Unset,
            }
        };

        let questions_shown = match self.session.get(&questions_shown_key(survey))? {
            Some(raw) => serde_json::from_str(&raw).map_err(bad_json)?,
            None => HashSet::new(),
        };

        Ok(NavigationState {
            cursor,
            questions_shown,
        })
    }

    fn save(&self, survey: SurveyId, state: &NavigationState) -> Result<(), StorageError> {
        match state.cursor {
            NavigationCursor::Unset => {
                self.session.delete(&active_section_key(survey))?;
                self.session.delete(&complete_key(survey))?;
            }
            NavigationCursor::At(id) => {
                self.session
                    .set(&active_section_key(survey), &id.value().to_string())?;
                self.session.delete(&complete_key(survey))?;
            }
            NavigationCursor::Complete => {
                self.session.set(&complete_key(survey), "true")?;
                self.session.delete(&active_section_key(survey))?;
            }
        }

        let raw = serde_json::to_string(&state.questions_shown).map_err(bad_json)?;
        self.session.set(&questions_shown_key(survey), &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paged_survey_types::QuestionId;

    #[test]
    fn responses_live_under_the_survey_key() {
        let session = MemorySession::new();
        let store = SessionResponseStore::new(session.clone());
        let survey = SurveyId::new(7);

        store.set(survey, ResponseKey::new(1, 10), "yes").unwrap();

        let raw = session.get("survey.7.responses").unwrap().unwrap();
        assert_eq!(raw, r#"{"1":{"10":"yes"}}"#);
        assert_eq!(
            store.snapshot(survey).unwrap().answer(ResponseKey::new(1, 10)),
            Some("yes")
        );
    }

    #[test]
    fn delete_removes_the_answer() {
        let store = SessionResponseStore::new(MemorySession::new());
        let survey = SurveyId::new(7);

        store.set(survey, ResponseKey::new(1, 10), "yes").unwrap();
        store.delete(survey, ResponseKey::new(1, 10)).unwrap();

        assert!(store.snapshot(survey).unwrap().is_empty());
    }

    #[test]
    fn surveys_do_not_share_answers() {
        let session = MemorySession::new();
        let store = SessionResponseStore::new(session);

        store
            .set(SurveyId::new(1), ResponseKey::new(1, 10), "yes")
            .unwrap();

        assert!(store.snapshot(SurveyId::new(2)).unwrap().is_empty());
    }

    #[test]
    fn navigation_defaults_to_initial_state() {
        let store = SessionNavigationStore::new(MemorySession::new());
        let state = store.load(SurveyId::new(7)).unwrap();

        assert_eq!(state, NavigationState::new());
    }

    #[test]
    fn navigation_round_trip() {
        let session = MemorySession::new();
        let store = SessionNavigationStore::new(session.clone());
        let survey = SurveyId::new(7);

        let state = NavigationState {
            cursor: NavigationCursor::At(SectionId::new(3)),
            questions_shown: [QuestionId::new(10), QuestionId::new(11)].into(),
        };
        store.save(survey, &state).unwrap();

        assert_eq!(
            session.get("survey.7.active_section_id").unwrap().as_deref(),
            Some("3")
        );
        assert_eq!(store.load(survey).unwrap(), state);
    }

    #[test]
    fn complete_cursor_survives_reload() {
        let session = MemorySession::new();
        let store = SessionNavigationStore::new(session.clone());
        let survey = SurveyId::new(7);

        store
            .save(
                survey,
                &NavigationState {
                    cursor: NavigationCursor::At(SectionId::new(3)),
                    questions_shown: HashSet::new(),
                },
            )
            .unwrap();
        store
            .save(
                survey,
                &NavigationState {
                    cursor: NavigationCursor::Complete,
                    questions_shown: HashSet::new(),
                },
            )
            .unwrap();

        assert!(session.get("survey.7.active_section_id").unwrap().is_none());
        assert!(store.load(survey).unwrap().cursor.is_complete());
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use paged_survey_types::{DefinitionError, StorageError, Survey, SurveyCatalog, SurveyId};

/// In-process [`SurveyCatalog`] holding validated survey definitions.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    surveys: Arc<Mutex<HashMap<SurveyId, Survey>>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a survey definition and add it to the catalog.
    ///
    /// Replaces any previous definition with the same id.
    pub fn insert(&self, survey: Survey) -> Result<(), DefinitionError> {
        survey.validate()?;
        let mut surveys = self
            .surveys
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        surveys.insert(survey.id(), survey);
        Ok(())
    }
}

impl SurveyCatalog for InMemoryCatalog {
    fn survey(&self, id: SurveyId) -> Result<Survey, StorageError> {
        let surveys = self
            .surveys
            .lock()
            .map_err(|e| StorageError::Session(e.to_string()))?;
        surveys
            .get(&id)
            .cloned()
            .ok_or(StorageError::UnknownSurvey(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paged_survey_types::{Question, Section};

    #[test]
    fn insert_and_fetch() {
        let catalog = InMemoryCatalog::new();
        let survey = Survey::new(1, "Breakfast").with_section(
            Section::new(1, "Toast", 1).with_question(
                Question::select(1, "Butter?")
                    .with_option("yes", "Yes")
                    .with_option("no", "No"),
            ),
        );

        catalog.insert(survey).unwrap();

        assert_eq!(catalog.survey(SurveyId::new(1)).unwrap().title(), "Breakfast");
    }

    #[test]
    fn unknown_survey_is_an_error() {
        let catalog = InMemoryCatalog::new();
        assert!(matches!(
            catalog.survey(SurveyId::new(9)),
            Err(StorageError::UnknownSurvey(id)) if id == SurveyId::new(9)
        ));
    }

    #[test]
    fn invalid_definitions_are_rejected() {
        let catalog = InMemoryCatalog::new();
        let survey = Survey::new(1, "Broken")
            .with_section(Section::new(1, "Empty question", 1).with_question(
                // A select without options cannot be answered.
                Question::select(1, "Pick one"),
            ));

        assert!(matches!(
            catalog.insert(survey),
            Err(DefinitionError::NoOptions(id)) if id == paged_survey_types::QuestionId::new(1)
        ));
    }
}

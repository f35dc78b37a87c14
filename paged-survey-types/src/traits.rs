use crate::{
    NavigationState, ResponseKey, ResponseSnapshot, StorageError, Survey, SurveyId, SurveyView,
};

/// Answer persistence, scoped by survey id.
///
/// Implementations take `&self`; state lives behind interior mutability so a
/// store can be shared between collaborators of one request.
pub trait ResponseStore {
    /// Load every answer stored for the survey.
    fn snapshot(&self, survey: SurveyId) -> Result<ResponseSnapshot, StorageError>;

    /// Store one answer, replacing any previous value under the key.
    fn set(&self, survey: SurveyId, key: ResponseKey, value: &str) -> Result<(), StorageError>;

    /// Remove one stored answer, if present.
    fn delete(&self, survey: SurveyId, key: ResponseKey) -> Result<(), StorageError>;
}

/// Persistence for the navigation cursor and the shown-question set.
///
/// Writes from one request must be readable by the next request for the
/// same survey (per-key read-after-write); nothing stronger is assumed.
pub trait NavigationStore {
    /// Load the survey's navigation state, defaulting to the initial state.
    fn load(&self, survey: SurveyId) -> Result<NavigationState, StorageError>;

    /// Persist the survey's navigation state.
    fn save(&self, survey: SurveyId, state: &NavigationState) -> Result<(), StorageError>;
}

/// Read-only access to survey definitions.
pub trait SurveyCatalog {
    /// Look up a survey definition by id.
    fn survey(&self, id: SurveyId) -> Result<Survey, StorageError>;
}

/// Renders a survey view into presentable output.
///
/// Renderers decide the output format (HTML, plain text, etc.); the view
/// model they receive is already fully resolved.
pub trait FormRenderer {
    /// The error type for this renderer.
    type Error: Into<anyhow::Error>;

    /// Render the view.
    fn render(&self, view: &SurveyView) -> Result<String, Self::Error>;
}

//! Core types for the paged-survey crate.
//!
//! This crate provides the foundational types for sectioned surveys:
//! - `Survey`, `Section`, `Question` - The survey definition tree
//! - `ResponseSnapshot` and `ResponseKey` - Stored answers and their keys
//! - `NavigationState` - The per-survey cursor and shown-question set
//! - `RawSubmission` and `SectionForm` - Form input and the renderable view
//! - `ResponseStore`, `NavigationStore`, `SurveyCatalog`, `FormRenderer` traits

mod ids;
pub use ids::{QuestionId, SectionId, SurveyId};

mod question;
pub use question::{AnswerOption, Question, QuestionKind};

mod section;
pub use section::Section;

mod survey;
pub use survey::Survey;

mod snapshot;
pub use snapshot::{ResponseKey, ResponseSnapshot};

mod navigation;
pub use navigation::{NavigationCursor, NavigationState};

mod submission;
pub use submission::{RawSubmission, back_field_id, question_field_id, submit_field_id};

mod form;
pub use form::{FieldKind, FieldOption, FormField, SectionForm, SurveyView};

mod error;
pub use error::{DefinitionError, StorageError, SurveyError};

mod traits;
pub use traits::{FormRenderer, NavigationStore, ResponseStore, SurveyCatalog};

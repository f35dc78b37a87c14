//! # paged-survey
//!
//! Multi-page survey wizards over a key-value session. Renderer-agnostic.
//!
//! A survey is a set of ordered sections, each a page of select or radio
//! questions. Questions can declare a parent question and a triggering
//! answer; such subquestions stay hidden until the parent is answered with
//! the trigger, then appear on the same page before the respondent can move
//! on. The [`SurveyNavigator`] processes one request at a time: it decides
//! whether a submission reveals subquestions, steps back, re-renders with
//! errors, or advances, and persists answers and position after every pass.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paged_survey::{
//!     MemorySession, Question, Section, SessionNavigationStore,
//!     SessionResponseStore, Survey, SurveyNavigator, validate,
//! };
//!
//! let survey = Survey::new(1, "Checkup intake").with_section(
//!     Section::new(1, "About you", 1)
//!         .with_question(
//!             Question::radio(10, "Do you smoke?")
//!                 .with_option("yes", "Yes")
//!                 .with_option("no", "No"),
//!         )
//!         .with_question(
//!             Question::select(11, "How many per day?")
//!                 .with_option("few", "A few")
//!                 .with_option("pack", "A pack or more")
//!                 .subquestion_of(10, "yes"),
//!         ),
//! );
//!
//! let session = MemorySession::new();
//! let navigator = SurveyNavigator::new(
//!     survey,
//!     SessionResponseStore::new(session.clone()),
//!     SessionNavigationStore::new(session),
//! );
//!
//! // GET: render the current section.
//! let view = navigator.render()?;
//!
//! // POST: feed the submitted fields back in.
//! let view = navigator.handle(&submission, &validate::accept)?;
//! ```
//!
//! Each pass yields a [`SurveyView`]: either a [`SectionForm`] describing
//! the page to put in front of the respondent, or the collected answers
//! once the survey is complete. Turning a form into markup is a renderer's
//! job; `paged-survey-html` ships one for HTML.

// Re-export all types from paged-survey-types
pub use paged_survey_types::*;

// Section engine: which questions are visible, what a submission means
mod engine;
pub use engine::{
    Classification, SubmissionOutcome, VisiblePlan, VisibleQuestion, build_section_form,
    classify_submission, compute_visible_questions,
};

// Request-at-a-time navigation over the stores
mod navigator;
pub use navigator::SurveyNavigator;

// Survey definitions by id
mod catalog;
pub use catalog::InMemoryCatalog;

// Session-backed response and navigation stores
mod session;
pub use session::{MemorySession, SessionNavigationStore, SessionResponseStore, SessionStore};

// Answer validation hooks
pub mod validate;

// Failure posture at the render boundary
mod render;
pub use render::{Posture, render_survey};

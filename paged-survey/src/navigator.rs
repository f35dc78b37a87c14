//! Section-to-section drive of one survey.

use std::collections::{BTreeMap, HashSet};

use paged_survey_types::{
    NavigationCursor, NavigationState, NavigationStore, Question, RawSubmission, ResponseSnapshot,
    ResponseStore, Section, SectionId, Survey, SurveyError, SurveyView,
};

use crate::engine::{self, Classification, SubmissionOutcome, VisiblePlan};

type CompletionHook = Box<dyn Fn(&ResponseSnapshot)>;

/// Drives a respondent through the sections of one survey.
///
/// Each call to [`handle`](Self::handle) is one atomic request pass: load
/// the navigation state, compute the active section's question set,
/// classify the submission, apply the resulting mutations, persist the new
/// state, and return the view to render. Store failures pass through
/// untouched; no retries happen here.
pub struct SurveyNavigator<R, N> {
    survey: Survey,
    responses: R,
    navigation: N,
    on_complete: Option<CompletionHook>,
}

impl<R: ResponseStore, N: NavigationStore> SurveyNavigator<R, N> {
    /// Create a navigator over the given survey and stores.
    pub fn new(survey: Survey, responses: R, navigation: N) -> Self {
        Self {
            survey,
            responses,
            navigation,
            on_complete: None,
        }
    }

    /// Register a callback receiving the aggregated answers at the moment
    /// the last section is finished.
    pub fn with_on_complete(mut self, hook: impl Fn(&ResponseSnapshot) + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Get the survey being navigated.
    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    /// Render the current section without processing any input.
    pub fn render(&self) -> Result<SurveyView, SurveyError> {
        self.handle(&RawSubmission::empty(), &crate::validate::accept)
    }

    /// Process one request pass against the stored active section.
    pub fn handle(
        &self,
        submission: &RawSubmission,
        validate: &dyn Fn(&Question, &str) -> Result<(), String>,
    ) -> Result<SurveyView, SurveyError> {
        self.handle_section(None, submission, validate)
    }

    /// Process one request pass, overriding the active section.
    ///
    /// With `section` given, that section is processed instead of the
    /// stored one; an id not belonging to the survey is fatal for the
    /// request. A finished survey stays finished either way.
    pub fn handle_section(
        &self,
        section: Option<SectionId>,
        submission: &RawSubmission,
        validate: &dyn Fn(&Question, &str) -> Result<(), String>,
    ) -> Result<SurveyView, SurveyError> {
        let state = self.navigation.load(self.survey.id())?;

        if state.cursor.is_complete() {
            let snapshot = self.responses.snapshot(self.survey.id())?;
            return Ok(SurveyView::Complete(snapshot));
        }

        let active = match section.or(state.cursor.section()) {
            Some(id) => self
                .survey
                .section(id)
                .ok_or(SurveyError::SectionNotFound {
                    survey: self.survey.id(),
                    section: id,
                })?,
            None => self
                .survey
                .first_section()
                .ok_or(SurveyError::EmptySurvey(self.survey.id()))?,
        };

        let snapshot = self.responses.snapshot(self.survey.id())?;
        let plan = engine::compute_visible_questions(
            active,
            &snapshot,
            &state.questions_shown,
            submission,
        );
        let outcome = engine::classify_submission(active, &plan, submission, validate);

        tracing::debug!(
            "survey {} section {} classified as {:?}",
            self.survey.id(),
            active.id(),
            outcome.classification
        );

        match outcome.classification {
            Classification::None => {
                self.persist(active.id(), &plan)?;
                Ok(SurveyView::Form(engine::build_section_form(
                    &self.survey,
                    active,
                    &plan,
                    outcome.errors,
                )))
            }
            Classification::Back => match self.survey.section_before(active.position()) {
                Some(previous) => self.enter(previous),
                None => {
                    tracing::warn!(
                        "back requested on the first section of survey {}",
                        self.survey.id()
                    );
                    self.enter(active)
                }
            },
            Classification::SubquestionsRevealed => {
                self.apply(&outcome)?;
                self.persist(active.id(), &plan)?;
                Ok(SurveyView::Form(engine::build_section_form(
                    &self.survey,
                    active,
                    &plan,
                    BTreeMap::new(),
                )))
            }
            Classification::Advance => {
                self.apply(&outcome)?;
                match self.survey.section_after(active.position()) {
                    Some(next) => self.enter(next),
                    None => self.finish(),
                }
            }
        }
    }

    /// Enter a section fresh: recompute its question set from stored
    /// answers alone and persist the new cursor and shown-set.
    fn enter(&self, section: &Section) -> Result<SurveyView, SurveyError> {
        let snapshot = self.responses.snapshot(self.survey.id())?;
        let plan = engine::compute_visible_questions(
            section,
            &snapshot,
            &HashSet::new(),
            &RawSubmission::empty(),
        );
        self.persist(section.id(), &plan)?;
        Ok(SurveyView::Form(engine::build_section_form(
            &self.survey,
            section,
            &plan,
            BTreeMap::new(),
        )))
    }

    /// No further section: persist the terminal cursor, hand the aggregate
    /// to the completion hook, and return it.
    fn finish(&self) -> Result<SurveyView, SurveyError> {
        self.navigation.save(
            self.survey.id(),
            &NavigationState {
                cursor: NavigationCursor::Complete,
                questions_shown: HashSet::new(),
            },
        )?;

        let snapshot = self.responses.snapshot(self.survey.id())?;
        if let Some(hook) = &self.on_complete {
            hook(&snapshot);
        }
        Ok(SurveyView::Complete(snapshot))
    }

    fn apply(&self, outcome: &SubmissionOutcome) -> Result<(), SurveyError> {
        for (key, value) in &outcome.updates {
            self.responses.set(self.survey.id(), *key, value)?;
        }
        for key in &outcome.deletions {
            self.responses.delete(self.survey.id(), *key)?;
        }
        Ok(())
    }

    fn persist(&self, section: SectionId, plan: &VisiblePlan<'_>) -> Result<(), SurveyError> {
        self.navigation.save(
            self.survey.id(),
            &NavigationState {
                cursor: NavigationCursor::At(section),
                questions_shown: plan.question_ids().collect(),
            },
        )?;
        Ok(())
    }
}

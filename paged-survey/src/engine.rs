//! Visibility computation and submission classification for one section.
//!
//! Both operations are pure: they read a response snapshot and a raw
//! submission and return values describing what to present and what to
//! store. Applying the resulting mutations is the navigator's job, so
//! recomputing a plan for the same inputs never touches a store.

use std::collections::{BTreeMap, HashSet};

use paged_survey_types::{
    FieldKind, FieldOption, FormField, Question, QuestionId, QuestionKind, RawSubmission,
    ResponseKey, ResponseSnapshot, Section, SectionForm, Survey, back_field_id, question_field_id,
    submit_field_id,
};

/// Outcome category of one submitted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Nothing actionable: a plain render, or validation failed.
    None,

    /// The back control was pressed.
    Back,

    /// Submit was pressed and this pass brought new subquestions into view;
    /// answers persist but the section is rendered again.
    SubquestionsRevealed,

    /// Submit was pressed and the section is ready to leave.
    Advance,
}

/// One entry of the visible-question sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleQuestion<'a> {
    pub question: &'a Question,

    /// The current answer: a freshly submitted value wins over the stored one.
    pub answer: Option<String>,
}

/// The computed presentation of a section for one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePlan<'a> {
    /// Questions to present, in traversal order: top-level questions in
    /// definition order, each subquestion directly after its parent.
    pub questions: Vec<VisibleQuestion<'a>>,

    /// Stored answers whose visibility condition no longer holds.
    pub stale: Vec<ResponseKey>,

    /// Whether any included subquestion was absent from the previous render.
    pub revealed: bool,
}

impl VisiblePlan<'_> {
    /// Ids of all planned questions, the shown-set for the next pass.
    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> {
        self.questions.iter().map(|visible| visible.question.id())
    }
}

/// Everything a submission pass decided: the classification plus the store
/// mutations to apply if it persists.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub classification: Classification,

    /// Answer upserts; non-empty only for the persisting classifications.
    pub updates: Vec<(ResponseKey, String)>,

    /// Stale entries to remove; non-empty only for the persisting
    /// classifications.
    pub deletions: Vec<ResponseKey>,

    /// Validation messages keyed by field identifier.
    pub errors: BTreeMap<String, String>,
}

/// Compute the question sequence a section presents.
///
/// Walks top-level questions in definition order. A question's answered
/// value pulls in the subquestions registered for that value; their own
/// answers can pull in further subquestions. Subquestions registered for a
/// different value than the current answer get their stored answer
/// scheduled for deletion, so an answer changed away from a trigger value
/// does not leak the obsolete follow-up into the final results.
///
/// `previously_shown` is the shown-set persisted by the last render;
/// `revealed` flags any included subquestion missing from it.
pub fn compute_visible_questions<'a>(
    section: &'a Section,
    snapshot: &ResponseSnapshot,
    previously_shown: &HashSet<QuestionId>,
    submission: &RawSubmission,
) -> VisiblePlan<'a> {
    let mut plan = VisiblePlan {
        questions: Vec::new(),
        stale: Vec::new(),
        revealed: false,
    };
    let mut seen = HashSet::new();

    for question in section.top_level() {
        push_question(
            section,
            question,
            snapshot,
            previously_shown,
            submission,
            &mut plan,
            &mut seen,
        );
    }

    plan
}

fn push_question<'a>(
    section: &'a Section,
    question: &'a Question,
    snapshot: &ResponseSnapshot,
    previously_shown: &HashSet<QuestionId>,
    submission: &RawSubmission,
    plan: &mut VisiblePlan<'a>,
    seen: &mut HashSet<QuestionId>,
) {
    if !seen.insert(question.id()) {
        return;
    }

    let answer = current_answer(section, question, snapshot, submission);
    plan.questions.push(VisibleQuestion {
        question,
        answer: answer.clone(),
    });

    let Some(answer) = answer else {
        return;
    };

    for subquestion in section.subquestions_of(question.id()) {
        if subquestion.parent_value() == Some(answer.as_str()) {
            if !previously_shown.contains(&subquestion.id()) {
                plan.revealed = true;
            }
            push_question(
                section,
                subquestion,
                snapshot,
                previously_shown,
                submission,
                plan,
                seen,
            );
        } else {
            let key = ResponseKey::new(section.id(), subquestion.id());
            if snapshot.contains(key) {
                plan.stale.push(key);
            }
        }
    }
}

/// Resolve a question's current answer. A non-empty freshly submitted value
/// wins over the stored one, so a changed selection takes effect on the
/// same pass the respondent made it.
fn current_answer(
    section: &Section,
    question: &Question,
    snapshot: &ResponseSnapshot,
    submission: &RawSubmission,
) -> Option<String> {
    let mut answer = snapshot
        .answer(ResponseKey::new(section.id(), question.id()))
        .map(str::to_owned);

    if let Some(fresh) = submission.value(&question_field_id(question.id())) {
        let fresh = fresh.trim();
        if !fresh.is_empty() {
            answer = Some(fresh.to_owned());
        }
    }

    answer
}

/// Classify a submitted form against the computed plan.
///
/// The delegated `validate` hook runs over every freshly submitted value of
/// a planned question; any hook failure keeps the respondent on the section
/// with per-field messages. Field identifiers outside the plan and the two
/// navigation controls are ignored. Back outranks submit and is allowed on
/// a half-filled section; the answered-completely check guards only the
/// advance path, and a pass that revealed new subquestions re-renders
/// before that check applies.
pub fn classify_submission(
    section: &Section,
    plan: &VisiblePlan<'_>,
    submission: &RawSubmission,
    validate: &dyn Fn(&Question, &str) -> Result<(), String>,
) -> SubmissionOutcome {
    let mut outcome = SubmissionOutcome {
        classification: Classification::None,
        updates: Vec::new(),
        deletions: Vec::new(),
        errors: BTreeMap::new(),
    };

    if submission.is_empty() {
        return outcome;
    }

    for visible in &plan.questions {
        let field = question_field_id(visible.question.id());
        if let Some(value) = submission.value(&field) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if let Err(message) = validate(visible.question, value) {
                outcome.errors.insert(field, message);
            }
        }
    }
    if !outcome.errors.is_empty() {
        return outcome;
    }

    if has_control(submission, &back_field_id(section.id())) {
        outcome.classification = Classification::Back;
        return outcome;
    }

    if !has_control(submission, &submit_field_id(section.id())) {
        return outcome;
    }

    if plan.revealed {
        outcome.classification = Classification::SubquestionsRevealed;
        outcome.updates = collect_updates(section, plan, submission);
        outcome.deletions = plan.stale.clone();
        return outcome;
    }

    for visible in &plan.questions {
        let answered = visible
            .answer
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty());
        if visible.question.required() && !answered {
            outcome.errors.insert(
                question_field_id(visible.question.id()),
                "This question requires an answer".to_owned(),
            );
        }
    }
    if !outcome.errors.is_empty() {
        return outcome;
    }

    outcome.classification = Classification::Advance;
    outcome.updates = collect_updates(section, plan, submission);
    outcome.deletions = plan.stale.clone();
    outcome
}

fn has_control(submission: &RawSubmission, field: &str) -> bool {
    submission
        .value(field)
        .is_some_and(|value| !value.trim().is_empty())
}

fn collect_updates(
    section: &Section,
    plan: &VisiblePlan<'_>,
    submission: &RawSubmission,
) -> Vec<(ResponseKey, String)> {
    let mut updates = Vec::new();
    for visible in &plan.questions {
        if let Some(value) = submission.value(&question_field_id(visible.question.id())) {
            let value = value.trim();
            if !value.is_empty() {
                updates.push((
                    ResponseKey::new(section.id(), visible.question.id()),
                    value.to_owned(),
                ));
            }
        }
    }
    updates
}

/// Build the renderable form for a section from its computed plan.
///
/// Navigation controls are plain fields: a back button on every section but
/// the first, and a submit button labeled "Finish" on the last section and
/// "Next" before it.
pub fn build_section_form(
    survey: &Survey,
    section: &Section,
    plan: &VisiblePlan<'_>,
    errors: BTreeMap<String, String>,
) -> SectionForm {
    let mut fields: Vec<FormField> = plan.questions.iter().map(question_field).collect();

    if !survey.is_first(section) {
        fields.push(FormField::button(back_field_id(section.id()), "Back"));
    }

    let submit = if survey.is_last(section) {
        "Finish"
    } else {
        "Next"
    };
    fields.push(FormField::button(submit_field_id(section.id()), submit));

    SectionForm {
        survey_id: survey.id(),
        survey_title: survey.title().to_owned(),
        survey_description: survey.description().map(str::to_owned),
        section_id: section.id(),
        section_title: section.title().to_owned(),
        section_description: section.description().map(str::to_owned),
        fields,
        errors,
    }
}

fn question_field(visible: &VisibleQuestion<'_>) -> FormField {
    let question = visible.question;
    FormField {
        id: question_field_id(question.id()),
        label: question.label().to_owned(),
        kind: match question.kind() {
            QuestionKind::Select => FieldKind::Select,
            QuestionKind::Radio => FieldKind::Radio,
        },
        options: question
            .options()
            .iter()
            .map(|option| FieldOption {
                value: option.value.clone(),
                label: option.label.clone(),
            })
            .collect(),
        current_value: visible.answer.clone(),
        required: question.required(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;
    use paged_survey_types::SectionId;

    fn smoking_section() -> Section {
        Section::new(1, "About you", 1)
            .with_question(
                Question::select(10, "Do you smoke?")
                    .with_option("yes", "Yes")
                    .with_option("no", "No"),
            )
            .with_question(
                Question::radio(11, "How many per day?")
                    .with_option("few", "Fewer than 10")
                    .with_option("many", "10 or more")
                    .subquestion_of(10, "yes"),
            )
            .with_question(
                Question::radio(12, "Do you want to quit?")
                    .with_option("yes", "Yes")
                    .with_option("no", "No")
                    .subquestion_of(11, "many"),
            )
            .with_question(
                Question::select(13, "Age group")
                    .with_option("under-30", "Under 30")
                    .with_option("over-30", "30 or older"),
            )
    }

    fn shown(ids: &[u64]) -> HashSet<QuestionId> {
        ids.iter().map(|id| QuestionId::new(*id)).collect()
    }

    fn ids(plan: &VisiblePlan<'_>) -> Vec<u64> {
        plan.question_ids().map(|id| id.value()).collect()
    }

    #[test]
    fn unanswered_section_shows_top_level_only() {
        let section = smoking_section();
        let plan = compute_visible_questions(
            &section,
            &ResponseSnapshot::new(),
            &HashSet::new(),
            &RawSubmission::empty(),
        );

        assert_eq!(ids(&plan), vec![10, 13]);
        assert!(!plan.revealed);
        assert!(plan.stale.is_empty());
    }

    #[test]
    fn stored_answer_pulls_in_subquestion() {
        let section = smoking_section();
        let mut snapshot = ResponseSnapshot::new();
        snapshot.set(ResponseKey::new(1, 10), "yes");

        let plan = compute_visible_questions(
            &section,
            &snapshot,
            &shown(&[10, 13]),
            &RawSubmission::empty(),
        );

        assert_eq!(ids(&plan), vec![10, 11, 13]);
        assert!(plan.revealed);
    }

    #[test]
    fn fresh_submission_wins_over_stored() {
        let section = smoking_section();
        let mut snapshot = ResponseSnapshot::new();
        snapshot.set(ResponseKey::new(1, 10), "no");

        let submission = RawSubmission::empty().with("question-10", "yes");
        let plan = compute_visible_questions(&section, &snapshot, &shown(&[10, 13]), &submission);

        assert_eq!(plan.questions[0].answer.as_deref(), Some("yes"));
        assert_eq!(ids(&plan), vec![10, 11, 13]);
    }

    #[test]
    fn subquestion_chain_runs_to_grandchildren() {
        let section = smoking_section();
        let mut snapshot = ResponseSnapshot::new();
        snapshot.set(ResponseKey::new(1, 10), "yes");
        snapshot.set(ResponseKey::new(1, 11), "many");

        let plan = compute_visible_questions(
            &section,
            &snapshot,
            &shown(&[10, 11, 13]),
            &RawSubmission::empty(),
        );

        assert_eq!(ids(&plan), vec![10, 11, 12, 13]);
    }

    #[test]
    fn mismatched_subquestion_answer_goes_stale() {
        let section = smoking_section();
        let mut snapshot = ResponseSnapshot::new();
        snapshot.set(ResponseKey::new(1, 10), "no");
        snapshot.set(ResponseKey::new(1, 11), "many");

        let plan = compute_visible_questions(
            &section,
            &snapshot,
            &shown(&[10, 11, 13]),
            &RawSubmission::empty(),
        );

        assert_eq!(ids(&plan), vec![10, 13]);
        assert_eq!(plan.stale, vec![ResponseKey::new(1, 11)]);
    }

    #[test]
    fn reveal_not_flagged_when_already_shown() {
        let section = smoking_section();
        let mut snapshot = ResponseSnapshot::new();
        snapshot.set(ResponseKey::new(1, 10), "yes");

        let plan = compute_visible_questions(
            &section,
            &snapshot,
            &shown(&[10, 11, 13]),
            &RawSubmission::empty(),
        );

        assert!(!plan.revealed);
    }

    #[test]
    fn empty_submission_classifies_as_none() {
        let section = smoking_section();
        let plan = compute_visible_questions(
            &section,
            &ResponseSnapshot::new(),
            &HashSet::new(),
            &RawSubmission::empty(),
        );

        let outcome =
            classify_submission(&section, &plan, &RawSubmission::empty(), &validate::accept);
        assert_eq!(outcome.classification, Classification::None);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn hook_failure_keeps_section_with_errors() {
        let section = smoking_section();
        let submission = RawSubmission::empty()
            .with("question-10", "maybe")
            .with("submit-1", "Next");
        let plan = compute_visible_questions(
            &section,
            &ResponseSnapshot::new(),
            &HashSet::new(),
            &submission,
        );

        let outcome =
            classify_submission(&section, &plan, &submission, &validate::within_options);
        assert_eq!(outcome.classification, Classification::None);
        assert!(outcome.errors.contains_key("question-10"));
        assert!(outcome.updates.is_empty());
    }

    #[test]
    fn back_beats_submit_and_skips_required_check() {
        let section = smoking_section();
        let submission = RawSubmission::empty()
            .with("back-1", "Back")
            .with("submit-1", "Next");
        let plan = compute_visible_questions(
            &section,
            &ResponseSnapshot::new(),
            &HashSet::new(),
            &submission,
        );

        let outcome = classify_submission(&section, &plan, &submission, &validate::accept);
        assert_eq!(outcome.classification, Classification::Back);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn reveal_classifies_before_required_gate() {
        let section = smoking_section();
        let submission = RawSubmission::empty()
            .with("question-10", "yes")
            .with("question-13", "under-30")
            .with("submit-1", "Next");
        let plan = compute_visible_questions(
            &section,
            &ResponseSnapshot::new(),
            &shown(&[10, 13]),
            &submission,
        );

        let outcome = classify_submission(&section, &plan, &submission, &validate::accept);
        assert_eq!(outcome.classification, Classification::SubquestionsRevealed);
        assert_eq!(
            outcome.updates,
            vec![
                (ResponseKey::new(1, 10), "yes".to_owned()),
                (ResponseKey::new(1, 13), "under-30".to_owned()),
            ]
        );
    }

    #[test]
    fn unanswered_required_question_blocks_advance() {
        let section = smoking_section();
        let submission = RawSubmission::empty()
            .with("question-10", "no")
            .with("submit-1", "Next");
        let plan = compute_visible_questions(
            &section,
            &ResponseSnapshot::new(),
            &shown(&[10, 13]),
            &submission,
        );

        let outcome = classify_submission(&section, &plan, &submission, &validate::accept);
        assert_eq!(outcome.classification, Classification::None);
        assert!(outcome.errors.contains_key("question-13"));
    }

    #[test]
    fn complete_submission_advances_with_updates() {
        let section = smoking_section();
        let submission = RawSubmission::empty()
            .with("question-10", "no")
            .with("question-13", "over-30")
            .with("submit-1", "Next");
        let plan = compute_visible_questions(
            &section,
            &ResponseSnapshot::new(),
            &shown(&[10, 13]),
            &submission,
        );

        let outcome = classify_submission(&section, &plan, &submission, &validate::accept);
        assert_eq!(outcome.classification, Classification::Advance);
        assert_eq!(outcome.updates.len(), 2);
        assert!(outcome.deletions.is_empty());
    }

    #[test]
    fn advance_carries_stale_deletions() {
        let section = smoking_section();
        let mut snapshot = ResponseSnapshot::new();
        snapshot.set(ResponseKey::new(1, 10), "yes");
        snapshot.set(ResponseKey::new(1, 11), "few");
        snapshot.set(ResponseKey::new(1, 13), "over-30");

        let submission = RawSubmission::empty()
            .with("question-10", "no")
            .with("submit-1", "Next");
        let plan =
            compute_visible_questions(&section, &snapshot, &shown(&[10, 11, 13]), &submission);

        let outcome = classify_submission(&section, &plan, &submission, &validate::accept);
        assert_eq!(outcome.classification, Classification::Advance);
        assert_eq!(outcome.deletions, vec![ResponseKey::new(1, 11)]);
    }

    #[test]
    fn form_carries_options_and_current_values() {
        let survey = Survey::new(1, "Intake").with_section(smoking_section());
        let section = survey.section(SectionId::new(1)).unwrap();
        let mut snapshot = ResponseSnapshot::new();
        snapshot.set(ResponseKey::new(1, 10), "yes");

        let plan = compute_visible_questions(
            section,
            &snapshot,
            &HashSet::new(),
            &RawSubmission::empty(),
        );
        let form = build_section_form(&survey, section, &plan, BTreeMap::new());

        let field = form.field("question-10").unwrap();
        assert_eq!(field.kind, FieldKind::Select);
        assert_eq!(field.options.len(), 2);
        assert_eq!(field.current_value.as_deref(), Some("yes"));
        assert!(field.required);
    }

    #[test]
    fn navigation_buttons_follow_position() {
        let survey = Survey::new(1, "Intake")
            .with_section(smoking_section())
            .with_section(
                Section::new(2, "Your visit", 2).with_question(
                    Question::select(20, "Reason for visit")
                        .with_option("checkup", "Checkup")
                        .with_option("other", "Other"),
                ),
            );

        let first = survey.section(SectionId::new(1)).unwrap();
        let plan = compute_visible_questions(
            first,
            &ResponseSnapshot::new(),
            &HashSet::new(),
            &RawSubmission::empty(),
        );
        let form = build_section_form(&survey, first, &plan, BTreeMap::new());
        assert!(!form.has_field("back-1"));
        assert_eq!(form.field("submit-1").unwrap().label, "Next");

        let last = survey.section(SectionId::new(2)).unwrap();
        let plan = compute_visible_questions(
            last,
            &ResponseSnapshot::new(),
            &HashSet::new(),
            &RawSubmission::empty(),
        );
        let form = build_section_form(&survey, last, &plan, BTreeMap::new());
        assert!(form.has_field("back-2"));
        assert_eq!(form.field("submit-2").unwrap().label, "Finish");
    }
}

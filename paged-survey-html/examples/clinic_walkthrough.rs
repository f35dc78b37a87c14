//! Walk a scripted respondent through the clinic intake survey and print
//! every page the wizard renders.
//!
//! Run with: cargo run -p paged-survey-html --example clinic_walkthrough

use example_surveys::clinic_intake;
use paged_survey::{
    MemorySession, Posture, RawSubmission, SessionNavigationStore, SessionResponseStore,
    SurveyNavigator, render_survey, validate,
};
use paged_survey_html::{HtmlForm, HtmlOptions};

fn main() {
    let session = MemorySession::new();
    let navigator = SurveyNavigator::new(
        clinic_intake(),
        SessionResponseStore::new(session.clone()),
        SessionNavigationStore::new(session),
    )
    .with_on_complete(|answers| {
        eprintln!("survey finished with {} answers", answers.len());
    });

    let renderer = HtmlForm::with_options(HtmlOptions::new().full_document(false));
    let posture = Posture::detect();

    // Each entry is one POST a browser would send.
    let submissions = [
        RawSubmission::empty()
            .with("question-10", "yes")
            .with("question-13", "30-to-60")
            .with("submit-1", "Next"),
        // The smoking follow-up appeared; answer it and move on.
        RawSubmission::empty()
            .with("question-10", "yes")
            .with("question-11", "few")
            .with("question-13", "30-to-60")
            .with("submit-1", "Next"),
        RawSubmission::empty()
            .with("question-20", "checkup")
            .with("question-21", "no")
            .with("submit-2", "Next"),
        RawSubmission::empty()
            .with("question-31", "no")
            .with("submit-3", "Finish"),
    ];

    let view = navigator.render().expect("first render failed");
    println!("{}", render_survey(&renderer, &view, posture));

    for submission in &submissions {
        let view = navigator
            .handle(submission, &validate::within_options)
            .expect("request pass failed");
        println!("{}", render_survey(&renderer, &view, posture));
    }
}

//! Generate the opening page of the forest expedition survey as a
//! standalone HTML document.
//!
//! Run with: cargo run -p paged-survey-html --example forest_form

use example_surveys::forest_expedition;
use paged_survey::{MemorySession, SessionNavigationStore, SessionResponseStore, SurveyNavigator};
use paged_survey_html::to_html;

fn main() {
    let session = MemorySession::new();
    let navigator = SurveyNavigator::new(
        forest_expedition(),
        SessionResponseStore::new(session.clone()),
        SessionNavigationStore::new(session),
    );

    let view = navigator.render().expect("render failed");
    let html = to_html(&view);

    // Write to file
    std::fs::write("forest_expedition.html", &html).expect("Failed to write HTML file");

    println!("Generated forest_expedition.html");
}

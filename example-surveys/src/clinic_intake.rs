use paged_survey::{Question, Section, Survey};

/// A mundane three-section intake questionnaire.
///
/// Exercises a two-level subquestion chain in the first section (smoking
/// habits) and a single-level one in the second (insurance provider); the
/// feedback section carries an optional question.
pub fn clinic_intake() -> Survey {
    Survey::new(1, "Clinic intake")
        .with_description("A few questions before your appointment.")
        .with_section(
            Section::new(1, "About you", 1)
                .with_question(
                    Question::select(10, "Do you smoke?")
                        .with_option("yes", "Yes")
                        .with_option("no", "No"),
                )
                .with_question(
                    Question::radio(11, "How many cigarettes per day?")
                        .with_option("few", "Fewer than 10")
                        .with_option("many", "10 or more")
                        .subquestion_of(10, "yes"),
                )
                .with_question(
                    Question::radio(12, "Have you tried quitting?")
                        .with_option("yes", "Yes")
                        .with_option("no", "No")
                        .subquestion_of(11, "many"),
                )
                .with_question(
                    Question::select(13, "Age group")
                        .with_option("under-30", "Under 30")
                        .with_option("30-to-60", "30 to 60")
                        .with_option("over-60", "Over 60"),
                ),
        )
        .with_section(
            Section::new(2, "Your visit", 2)
                .with_question(
                    Question::select(20, "Reason for today's visit")
                        .with_option("checkup", "Checkup")
                        .with_option("complaint", "A complaint")
                        .with_option("follow-up", "Follow-up"),
                )
                .with_question(
                    Question::radio(21, "Are you insured?")
                        .with_option("yes", "Yes")
                        .with_option("no", "No"),
                )
                .with_question(
                    Question::select(22, "Who is your provider?")
                        .with_option("north-health", "North Health")
                        .with_option("coastal-mutual", "Coastal Mutual")
                        .with_option("other", "Other")
                        .subquestion_of(21, "yes"),
                ),
        )
        .with_section(
            Section::new(3, "Feedback", 3)
                .with_question(
                    Question::radio(30, "How did you hear about us?")
                        .with_option("friend", "A friend")
                        .with_option("online", "Online")
                        .with_option("referral", "A referral")
                        .optional(),
                )
                .with_question(
                    Question::radio(31, "May we contact you afterwards?")
                        .with_option("yes", "Yes")
                        .with_option("no", "No"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use paged_survey::SectionId;

    #[test]
    fn definition_is_valid() {
        clinic_intake().validate().unwrap();
    }

    #[test]
    fn sections_run_in_order() {
        let survey = clinic_intake();
        assert_eq!(survey.first_section().unwrap().id(), SectionId::new(1));
        assert_eq!(survey.last_section().unwrap().id(), SectionId::new(3));
    }
}

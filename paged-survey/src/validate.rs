//! Answer validation hooks.
//!
//! [`classify_submission`](crate::classify_submission) takes a hook that is
//! called once per answered question before anything else happens. A hook
//! returns `Err` with a respondent-facing message to reject the value.

use paged_survey_types::Question;

/// Accept every answer. The default hook.
pub fn accept(_question: &Question, _value: &str) -> Result<(), String> {
    Ok(())
}

/// Reject values that do not match one of the question's offered options.
///
/// Useful against hand-crafted submissions; the rendered form can only
/// produce offered values.
pub fn within_options(question: &Question, value: &str) -> Result<(), String> {
    if question.options().iter().any(|o| o.value == value) {
        Ok(())
    } else {
        Err(format!("'{value}' is not one of the offered answers"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> Question {
        Question::select(1, "Favourite colour?")
            .with_option("red", "Red")
            .with_option("blue", "Blue")
    }

    #[test]
    fn accept_accepts() {
        assert!(accept(&color(), "anything").is_ok());
    }

    #[test]
    fn within_options_checks_values() {
        assert!(within_options(&color(), "red").is_ok());
        let err = within_options(&color(), "green").unwrap_err();
        assert_eq!(err, "'green' is not one of the offered answers");
    }
}

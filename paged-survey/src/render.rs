use paged_survey_types::{FormRenderer, SurveyView};

/// How renderer failures surface to the respondent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Posture {
    /// Log the failure and return an empty page.
    Production,

    /// Return the failure inline where the page would be.
    #[default]
    Development,
}

impl Posture {
    /// Read the posture from the `SURVEY_ENV` environment variable.
    ///
    /// `production` (any casing) selects [`Posture::Production`]; anything
    /// else, including an unset variable, selects [`Posture::Development`].
    pub fn detect() -> Self {
        match std::env::var("SURVEY_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Render a view, degrading renderer failures according to the posture.
///
/// A failed render never takes the surrounding page down: in production the
/// error is logged and an empty string returned, in development the error
/// text itself is returned so it shows up where the form would be.
pub fn render_survey<B: FormRenderer>(renderer: &B, view: &SurveyView, posture: Posture) -> String {
    match renderer.render(view) {
        Ok(page) => page,
        Err(error) => {
            let error: anyhow::Error = error.into();
            match posture {
                Posture::Production => {
                    tracing::error!("survey render failed: {:#}", error);
                    String::new()
                }
                Posture::Development => format!("{error:?}"),
            }
        }
    }
}

//! HTML form generator implementation.

use std::convert::Infallible;

use paged_survey::{FieldKind, FormField, FormRenderer, ResponseSnapshot, SectionForm, SurveyView};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// Target URL of the form. Posts back to the current URL when unset.
    pub action: Option<String>,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            full_document: true,
            include_styles: true,
            class_prefix: "survey".to_string(),
            action: None,
        }
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the form target URL.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// HTML renderer for survey views.
///
/// Renders a section form as a postable HTML form whose field names follow
/// the identifier scheme the navigator expects, and a completed survey as a
/// read-only answer listing.
#[derive(Debug, Clone)]
pub struct HtmlForm {
    options: HtmlOptions,
}

impl HtmlForm {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self {
            options: HtmlOptions::new(),
        }
    }

    /// Create a renderer with custom options.
    pub fn with_options(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Default for HtmlForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormRenderer for HtmlForm {
    type Error = Infallible;

    fn render(&self, view: &SurveyView) -> Result<String, Self::Error> {
        Ok(generate_html(view, &self.options))
    }
}

/// Generate HTML for a survey view with default options.
pub fn to_html(view: &SurveyView) -> String {
    generate_html(view, &HtmlOptions::new())
}

/// Generate HTML for a survey view with custom options.
pub fn to_html_with_options(view: &SurveyView, options: &HtmlOptions) -> String {
    generate_html(view, options)
}

fn generate_html(view: &SurveyView, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        let title = match view {
            SurveyView::Form(form) => form.survey_title.as_str(),
            SurveyView::Complete(_) => "Survey complete",
        };
        html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    match view {
        SurveyView::Form(form) => html.push_str(&generate_form(form, options)),
        SurveyView::Complete(responses) => html.push_str(&generate_complete(responses, prefix)),
    }

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate the postable form for one section.
fn generate_form(form: &SectionForm, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    let action_attr = options
        .action
        .as_deref()
        .map(|action| format!(" action=\"{}\"", escape_html(action)))
        .unwrap_or_default();
    html.push_str(&format!(
        "<form method=\"post\"{action_attr} class=\"{prefix}-form\">\n"
    ));

    // Survey heading
    html.push_str(&format!(
        "  <h1 class=\"{prefix}-title\">{}</h1>\n",
        escape_html(&form.survey_title)
    ));
    if let Some(description) = &form.survey_description {
        html.push_str(&format!(
            "  <div class=\"{prefix}-description\">{}</div>\n",
            escape_html(description)
        ));
    }

    // Section
    html.push_str(&format!("  <fieldset class=\"{prefix}-section\">\n"));
    html.push_str(&format!(
        "    <legend>{}</legend>\n",
        escape_html(&form.section_title)
    ));
    if let Some(description) = &form.section_description {
        html.push_str(&format!(
            "    <div class=\"{prefix}-description\">{}</div>\n",
            escape_html(description)
        ));
    }

    // Questions
    for field in &form.fields {
        if field.kind != FieldKind::Button {
            html.push_str(&generate_question(field, form.errors.get(&field.id), prefix));
        }
    }

    html.push_str("  </fieldset>\n");

    // Navigation controls
    html.push_str(&format!("  <div class=\"{prefix}-controls\">\n"));
    for field in &form.fields {
        if field.kind == FieldKind::Button {
            let id = &field.id;
            let label = escape_html(&field.label);
            html.push_str(&format!(
                "    <button type=\"submit\" name=\"{id}\" value=\"{label}\" class=\"{prefix}-button\">{label}</button>\n"
            ));
        }
    }
    html.push_str("  </div>\n");

    html.push_str("</form>\n");
    html
}

/// Generate HTML for a single question field.
fn generate_question(field: &FormField, error: Option<&String>, prefix: &str) -> String {
    let mut html = String::new();

    let error_class = if error.is_some() {
        format!(" {prefix}-question-error")
    } else {
        String::new()
    };
    html.push_str(&format!(
        "    <div class=\"{prefix}-question{error_class}\">\n"
    ));

    let marker = if field.required {
        format!(" <span class=\"{prefix}-required\">*</span>")
    } else {
        String::new()
    };
    html.push_str(&format!(
        "      <div class=\"{prefix}-question-title\">{}{marker}</div>\n",
        escape_html(&field.label)
    ));

    if let Some(message) = error {
        html.push_str(&format!(
            "      <div class=\"{prefix}-error\">{}</div>\n",
            escape_html(message)
        ));
    }

    html.push_str(&format!("      <div class=\"{prefix}-answer\">\n"));
    match field.kind {
        FieldKind::Select => html.push_str(&generate_select(field, prefix)),
        FieldKind::Radio => html.push_str(&generate_radio(field, prefix)),
        FieldKind::Button => {}
    }
    html.push_str("      </div>\n");

    html.push_str("    </div>\n");
    html
}

fn generate_select(field: &FormField, prefix: &str) -> String {
    let mut html = String::new();
    let id = &field.id;

    html.push_str(&format!(
        "        <select id=\"{id}\" name=\"{id}\" class=\"{prefix}-input\">\n"
    ));
    html.push_str("          <option value=\"\">Choose an answer</option>\n");
    for option in &field.options {
        let selected = if field.current_value.as_deref() == Some(option.value.as_str()) {
            " selected"
        } else {
            ""
        };
        let value = escape_html(&option.value);
        let label = escape_html(&option.label);
        html.push_str(&format!(
            "          <option value=\"{value}\"{selected}>{label}</option>\n"
        ));
    }
    html.push_str("        </select>\n");
    html
}

fn generate_radio(field: &FormField, prefix: &str) -> String {
    let mut html = String::new();
    let name = &field.id;

    for option in &field.options {
        let option_id = format!("{}-{}", field.id, option.value);
        let checked = if field.current_value.as_deref() == Some(option.value.as_str()) {
            " checked"
        } else {
            ""
        };
        let value = escape_html(&option.value);
        let label = escape_html(&option.label);

        html.push_str(&format!("        <div class=\"{prefix}-radio-option\">\n"));
        html.push_str(&format!(
            "          <input type=\"radio\" id=\"{option_id}\" name=\"{name}\" value=\"{value}\"{checked}>\n"
        ));
        html.push_str(&format!(
            "          <label for=\"{option_id}\">{label}</label>\n"
        ));
        html.push_str("        </div>\n");
    }
    html
}

/// Generate the read-only listing of a completed survey.
fn generate_complete(responses: &ResponseSnapshot, prefix: &str) -> String {
    let mut html = String::new();

    html.push_str(&format!("<div class=\"{prefix}-complete\">\n"));
    html.push_str(&format!(
        "  <h1 class=\"{prefix}-title\">Survey complete</h1>\n"
    ));
    html.push_str(&format!(
        "  <p class=\"{prefix}-complete-note\">Every section has been answered. Thank you.</p>\n"
    ));

    for section in responses.sections() {
        html.push_str(&format!(
            "  <h2 class=\"{prefix}-section-title\">Section {section}</h2>\n"
        ));
        html.push_str(&format!("  <dl class=\"{prefix}-responses\">\n"));
        for (question, value) in responses.section_answers(section) {
            html.push_str(&format!("    <dt>Question {question}</dt>\n"));
            html.push_str(&format!("    <dd>{}</dd>\n", escape_html(value)));
        }
        html.push_str("  </dl>\n");
    }

    html.push_str("</div>\n");
    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-form, .{prefix}-complete {{
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-description {{
      margin: 1rem 0;
      padding: 0.5rem;
      background: #f5f5f5;
      white-space: pre-wrap;
    }}
    .{prefix}-section {{
      margin: 1rem 0;
      padding: 1rem;
    }}
    .{prefix}-question {{
      margin: 0.75rem 0;
    }}
    .{prefix}-question-error {{
      border-left: 3px solid #c00;
      padding-left: 0.5rem;
    }}
    .{prefix}-question-title {{
      margin-bottom: 0.25rem;
    }}
    .{prefix}-required {{
      color: #c00;
    }}
    .{prefix}-error {{
      color: #c00;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-input {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-radio-option {{
      margin: 0.25rem 0;
    }}
    .{prefix}-controls {{
      margin-top: 1rem;
      display: flex;
      gap: 0.5rem;
    }}
    .{prefix}-button {{
      padding: 0.5rem 1rem;
    }}
    .{prefix}-responses dt {{
      font-weight: bold;
      margin-top: 0.5rem;
    }}
  </style>
"#
    )
}

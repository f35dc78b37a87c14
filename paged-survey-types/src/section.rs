use crate::{Question, QuestionId, SectionId};

/// One ordered page of a survey, holding its questions in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: SectionId,

    /// Heading shown above the section's questions.
    title: String,

    /// Optional explanatory text under the heading.
    description: Option<String>,

    /// Position within the survey; ordering is total and unique per survey.
    position: u32,

    questions: Vec<Question>,
}

impl Section {
    /// Create a new section at the given position.
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>, position: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            position,
            questions: Vec::new(),
        }
    }

    /// Set the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a question. Subquestions may be added in any order relative to
    /// their parent; presentation order is derived from the parent.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Get the section id.
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the position within the survey.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Get all questions, including subquestions, in definition order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Iterate the questions without a parent, in definition order.
    pub fn top_level(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| !q.is_subquestion())
    }

    /// Iterate the direct subquestions of `parent`, in definition order.
    pub fn subquestions_of(&self, parent: QuestionId) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.parent_id() == Some(parent))
    }

    /// Look up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> Section {
        Section::new(1, "About you", 1)
            .with_question(
                Question::select(10, "Do you smoke?")
                    .with_option("yes", "Yes")
                    .with_option("no", "No"),
            )
            .with_question(Question::radio(11, "How many per day?").subquestion_of(10, "yes"))
            .with_question(Question::select(12, "Age group"))
    }

    #[test]
    fn top_level_skips_subquestions() {
        let ids: Vec<_> = section().top_level().map(Question::id).collect();
        assert_eq!(ids, vec![QuestionId::new(10), QuestionId::new(12)]);
    }

    #[test]
    fn subquestions_of_parent() {
        let section = section();
        let subs: Vec<_> = section
            .subquestions_of(QuestionId::new(10))
            .map(Question::id)
            .collect();
        assert_eq!(subs, vec![QuestionId::new(11)]);
        assert_eq!(section.subquestions_of(QuestionId::new(12)).count(), 0);
    }

    #[test]
    fn question_lookup() {
        let section = section();
        assert!(section.question(QuestionId::new(11)).is_some());
        assert!(section.question(QuestionId::new(99)).is_none());
    }
}

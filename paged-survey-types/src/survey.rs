use std::collections::{HashMap, HashSet};

use crate::{DefinitionError, Question, Section, SectionId, SurveyId};

/// A complete survey definition: metadata plus its ordered sections.
///
/// Sections are ordered by their `position` field, not by insertion order.
/// All lookups below resolve through positions, so a survey built with
/// out-of-order `with_section` calls still pages correctly.
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    id: SurveyId,
    title: String,
    description: Option<String>,
    sections: Vec<Section>,
}

impl Survey {
    /// Create a new survey.
    pub fn new(id: impl Into<SurveyId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            sections: Vec::new(),
        }
    }

    /// Set the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Get the survey id.
    pub fn id(&self) -> SurveyId {
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

    /// Get all sections, in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by id.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// The section with the lowest position.
    pub fn first_section(&self) -> Option<&Section> {
        self.sections.iter().min_by_key(|s| s.position())
    }

    /// The section with the highest position.
    pub fn last_section(&self) -> Option<&Section> {
        self.sections.iter().max_by_key(|s| s.position())
    }

    /// The next section after the given position, if any.
    pub fn section_after(&self, position: u32) -> Option<&Section> {
        self.sections
            .iter()
            .filter(|s| s.position() > position)
            .min_by_key(|s| s.position())
    }

    /// The previous section before the given position, if any.
    pub fn section_before(&self, position: u32) -> Option<&Section> {
        self.sections
            .iter()
            .filter(|s| s.position() < position)
            .max_by_key(|s| s.position())
    }

    /// Check if the section is first by position.
    pub fn is_first(&self, section: &Section) -> bool {
        self.first_section().map(Section::id) == Some(section.id())
    }

    /// Check if the section is last by position.
    pub fn is_last(&self, section: &Section) -> bool {
        self.last_section().map(Section::id) == Some(section.id())
    }

    /// Check the definition's structural invariants.
    ///
    /// Rejects duplicate section positions or ids, duplicate question ids,
    /// questions without answer options, duplicate option values, and
    /// subquestions whose parent is missing from their section or forms a
    /// cycle.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut positions = HashSet::new();
        let mut section_ids = HashSet::new();
        let mut question_ids = HashSet::new();

        for section in &self.sections {
            if !positions.insert(section.position()) {
                return Err(DefinitionError::DuplicateSectionPosition {
                    survey: self.id,
                    position: section.position(),
                });
            }
            if !section_ids.insert(section.id()) {
                return Err(DefinitionError::DuplicateSection(section.id()));
            }

            for question in section.questions() {
                if !question_ids.insert(question.id()) {
                    return Err(DefinitionError::DuplicateQuestion(question.id()));
                }
                validate_question(question)?;
            }

            validate_parents(section)?;
        }

        Ok(())
    }
}

fn validate_question(question: &Question) -> Result<(), DefinitionError> {
    if question.options().is_empty() {
        return Err(DefinitionError::NoOptions(question.id()));
    }

    let mut values = HashSet::new();
    for option in question.options() {
        if !values.insert(option.value.as_str()) {
            return Err(DefinitionError::DuplicateOptionValue {
                question: question.id(),
                value: option.value.clone(),
            });
        }
    }

    Ok(())
}

/// Every parent must exist in the same section, and following parent links
/// must terminate at a top-level question.
fn validate_parents(section: &Section) -> Result<(), DefinitionError> {
    let parents: HashMap<_, _> = section
        .questions()
        .iter()
        .filter_map(|q| q.parent_id().map(|parent| (q.id(), parent)))
        .collect();

    for question in section.questions() {
        let Some(parent) = question.parent_id() else {
            continue;
        };
        if section.question(parent).is_none() {
            return Err(DefinitionError::UnknownParent {
                question: question.id(),
                parent,
            });
        }

        let mut visited = HashSet::new();
        let mut current = question.id();
        while let Some(&next) = parents.get(&current) {
            if !visited.insert(current) {
                return Err(DefinitionError::ParentCycle(question.id()));
            }
            current = next;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionId;

    fn question(id: u64) -> Question {
        Question::select(id, format!("Question {id}"))
            .with_option("yes", "Yes")
            .with_option("no", "No")
    }

    fn survey() -> Survey {
        Survey::new(1, "Intake")
            .with_section(Section::new(1, "First", 1).with_question(question(10)))
            .with_section(Section::new(2, "Second", 2).with_question(question(20)))
            .with_section(Section::new(3, "Third", 3).with_question(question(30)))
    }

    #[test]
    fn ordering_by_position() {
        let survey = survey();
        assert_eq!(survey.first_section().map(Section::id), Some(SectionId::new(1)));
        assert_eq!(survey.last_section().map(Section::id), Some(SectionId::new(3)));
        assert_eq!(survey.section_after(1).map(Section::id), Some(SectionId::new(2)));
        assert_eq!(survey.section_after(3).map(Section::id), None);
        assert_eq!(survey.section_before(2).map(Section::id), Some(SectionId::new(1)));
        assert_eq!(survey.section_before(1).map(Section::id), None);
    }

    #[test]
    fn first_and_last_ignore_insertion_order() {
        let survey = Survey::new(1, "Reversed")
            .with_section(Section::new(2, "Second", 2).with_question(question(20)))
            .with_section(Section::new(1, "First", 1).with_question(question(10)));

        assert_eq!(survey.first_section().map(Section::id), Some(SectionId::new(1)));
        assert!(survey.is_last(survey.section(SectionId::new(2)).unwrap()));
    }

    #[test]
    fn validate_accepts_well_formed() {
        assert!(survey().validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_position() {
        let survey = Survey::new(1, "Bad")
            .with_section(Section::new(1, "A", 1).with_question(question(10)))
            .with_section(Section::new(2, "B", 1).with_question(question(20)));

        assert!(matches!(
            survey.validate(),
            Err(DefinitionError::DuplicateSectionPosition { position: 1, .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_question() {
        let survey = Survey::new(1, "Bad").with_section(
            Section::new(1, "A", 1)
                .with_question(question(10))
                .with_question(question(10)),
        );

        assert!(matches!(
            survey.validate(),
            Err(DefinitionError::DuplicateQuestion(id)) if id == QuestionId::new(10)
        ));
    }

    #[test]
    fn validate_rejects_missing_parent() {
        let survey = Survey::new(1, "Bad").with_section(
            Section::new(1, "A", 1).with_question(question(10).subquestion_of(99, "yes")),
        );

        assert!(matches!(
            survey.validate(),
            Err(DefinitionError::UnknownParent { .. })
        ));
    }

    #[test]
    fn validate_rejects_parent_cycle() {
        let survey = Survey::new(1, "Bad").with_section(
            Section::new(1, "A", 1)
                .with_question(question(10).subquestion_of(11, "yes"))
                .with_question(question(11).subquestion_of(10, "yes")),
        );

        assert!(matches!(
            survey.validate(),
            Err(DefinitionError::ParentCycle(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_option_value() {
        let survey = Survey::new(1, "Bad").with_section(
            Section::new(1, "A", 1).with_question(
                Question::select(10, "Pick one")
                    .with_option("a", "First")
                    .with_option("a", "Second"),
            ),
        );

        assert!(matches!(
            survey.validate(),
            Err(DefinitionError::DuplicateOptionValue { .. })
        ));
    }
}

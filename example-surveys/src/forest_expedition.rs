use paged_survey::{Question, Section, Survey};

/// Outfitting questionnaire for an expedition into the whispering woods.
///
/// Every section hides at least one follow-up question; the companion
/// section chains down to a grandchild (companion, species, dragon colour).
pub fn forest_expedition() -> Survey {
    Survey::new(2, "Forest expedition")
        .with_description("Tell the quartermaster what to pack before you set out.")
        .with_section(
            Section::new(1, "Your role", 1)
                .with_question(
                    Question::select(10, "Which role do you take?")
                        .with_option("wizard", "Wizard")
                        .with_option("ranger", "Ranger")
                        .with_option("cook", "Cook"),
                )
                .with_question(
                    Question::select(11, "Which wand wood?")
                        .with_option("oak", "Oak")
                        .with_option("willow", "Willow")
                        .with_option("elder", "Elder (if you dare)")
                        .subquestion_of(10, "wizard"),
                )
                .with_question(
                    Question::radio(12, "Preferred campfire style?")
                        .with_option("teepee", "Teepee")
                        .with_option("log-cabin", "Log cabin")
                        .subquestion_of(10, "cook"),
                ),
        )
        .with_section(
            Section::new(2, "Companions", 2)
                .with_question(
                    Question::radio(20, "Do you bring a companion?")
                        .with_option("yes", "Yes")
                        .with_option("no", "I travel alone"),
                )
                .with_question(
                    Question::select(21, "Which species?")
                        .with_option("owl", "Owl")
                        .with_option("wolf", "Wolf")
                        .with_option("dragon", "Dragon")
                        .subquestion_of(20, "yes"),
                )
                .with_question(
                    Question::radio(22, "What colour is the dragon?")
                        .with_option("green", "Green")
                        .with_option("black", "Black")
                        .with_option("gold", "Gold")
                        .subquestion_of(21, "dragon"),
                ),
        )
        .with_section(
            Section::new(3, "Provisions", 3)
                .with_question(
                    Question::select(30, "Rations preference")
                        .with_option("dried-fruit", "Dried fruit")
                        .with_option("hardtack", "Hardtack")
                        .with_option("mystery-stew", "Mystery stew"),
                )
                .with_question(
                    Question::radio(31, "Any allergies the cook should know about?")
                        .with_option("yes", "Yes")
                        .with_option("no", "No")
                        .optional(),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use paged_survey::QuestionId;

    #[test]
    fn definition_is_valid() {
        forest_expedition().validate().unwrap();
    }

    #[test]
    fn companion_chain_reaches_the_dragon() {
        let survey = forest_expedition();
        let companions = survey
            .sections()
            .iter()
            .find(|section| section.title() == "Companions")
            .unwrap();

        let colour = companions.question(QuestionId::new(22)).unwrap();
        assert_eq!(colour.parent_id(), Some(QuestionId::new(21)));
        assert_eq!(colour.parent_value(), Some("dragon"));
    }
}

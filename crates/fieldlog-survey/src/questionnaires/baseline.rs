use crate::Questionnaire;
use crate::question::{QuestionDefinition, QuestionKind, SelectOptions};

/// One-time profile captured before daily tracking begins.
pub struct Baseline;

pub mod field {
    pub const AGE_RANGE: &str = "age_range";
    pub const SEX: &str = "sex";
    pub const MOSQUITO_ATTRACTION: &str = "typical_mosquito_attraction";
    pub const SKIN_TYPE: &str = "skin_type";
    pub const PREVIOUS_REPELLENT_USE: &str = "previous_repellent_use";
}

impl Questionnaire for Baseline {
    fn id(&self) -> &str {
        "baseline"
    }

    fn name(&self) -> &str {
        "Baseline Information"
    }

    fn questions(&self) -> &[QuestionDefinition] {
        static QUESTIONS: std::sync::LazyLock<Vec<QuestionDefinition>> =
            std::sync::LazyLock::new(|| {
                vec![
                    select(
                        field::AGE_RANGE,
                        "Age range",
                        &["18-25", "26-35", "36-45", "46-55", "56+"],
                    ),
                    select(field::SEX, "Sex", &["Male", "Female", "Prefer not to say"]),
                    select(
                        field::MOSQUITO_ATTRACTION,
                        "Do you typically attract mosquitoes?",
                        &["Rarely", "Sometimes", "Often", "Very Often"],
                    ),
                    select(
                        field::SKIN_TYPE,
                        "Skin type",
                        &["Dry", "Normal", "Oily", "Combination", "Sensitive"],
                    ),
                    QuestionDefinition::new(
                        field::PREVIOUS_REPELLENT_USE,
                        "What repellents have you used before? (e.g., DEET, Picaridin, natural oils)",
                        QuestionKind::FreeText,
                    ),
                ]
            });
        &QUESTIONS
    }
}

fn select(id: &str, label: &str, options: &[&str]) -> QuestionDefinition {
    QuestionDefinition::new(id, label, QuestionKind::SingleSelect(SelectOptions::new(options)))
        .required()
}

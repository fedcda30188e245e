//! fieldlog-survey
//!
//! Question schemas and the pure functions over them. Defines the baseline
//! and daily questionnaires, decides which questions are active for a draft,
//! and validates answers per question type. No storage or UI dependency.

pub mod error;
pub mod question;
pub mod questionnaires;
pub mod validation;
pub mod visibility;

use std::collections::HashSet;

use fieldlog_core::models::answer::Draft;

use error::SurveyError;
use question::{QuestionDefinition, QuestionKind};
use validation::ValidationError;

/// Trait implemented by each questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "baseline", "daily").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Questions in canonical render and validation order.
    fn questions(&self) -> &[QuestionDefinition];

    fn question(&self, question_id: &str) -> Option<&QuestionDefinition> {
        self.questions().iter().find(|q| q.id == question_id)
    }

    /// Look up a question, failing with the questionnaire named in the error.
    fn require_question(&self, question_id: &str) -> Result<&QuestionDefinition, SurveyError> {
        self.question(question_id)
            .ok_or_else(|| SurveyError::UnknownQuestion {
                questionnaire_id: self.id().to_string(),
                question_id: question_id.to_string(),
            })
    }

    /// Questions currently active for `draft`, in order.
    fn active_questions(&self, draft: &Draft) -> Vec<&QuestionDefinition> {
        visibility::active_questions(self.questions(), draft)
    }

    /// First invalid active question, if any.
    fn first_invalid(&self, draft: &Draft) -> Result<(), ValidationError> {
        validation::first_invalid(self.questions(), draft)
    }

    /// Every invalid active question.
    fn validate(&self, draft: &Draft) -> Vec<ValidationError> {
        validation::validate_draft(self.questions(), draft)
    }

    /// Structural self-check: unique ids, visibility conditions that only
    /// read earlier questions, and well-formed type constraints.
    fn check(&self) -> Result<(), SurveyError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for question in self.questions() {
            if let Some(condition) = &question.visibility {
                for dependency in condition.dependencies() {
                    if !seen.contains(dependency) {
                        return Err(SurveyError::ForwardReference {
                            question_id: question.id.clone(),
                            depends_on: dependency.to_string(),
                        });
                    }
                }
            }
            check_kind(question)?;
            if !seen.insert(question.id.as_str()) {
                return Err(SurveyError::DuplicateQuestion(question.id.clone()));
            }
        }
        Ok(())
    }
}

fn check_kind(question: &QuestionDefinition) -> Result<(), SurveyError> {
    let malformed = |reason: &str| SurveyError::MalformedQuestion {
        question_id: question.id.clone(),
        reason: reason.to_string(),
    };
    match &question.kind {
        QuestionKind::SingleSelect(select)
        | QuestionKind::SelectWithText(select)
        | QuestionKind::BinarySelect(select) => {
            if select.options.is_empty() {
                return Err(malformed("no options"));
            }
        }
        QuestionKind::MultiNumeric(slots) => {
            if slots.is_empty() || slots.labels.len() != slots.units.len() {
                return Err(malformed("labels and units must be non-empty and aligned"));
            }
        }
        QuestionKind::Scale(scale) => {
            if scale.min > scale.max {
                return Err(malformed("scale minimum exceeds maximum"));
            }
        }
        QuestionKind::Numeric(bounds) => {
            if let (Some(min), Some(max)) = (bounds.min, bounds.max)
                && min > max
            {
                return Err(malformed("minimum exceeds maximum"));
            }
        }
        QuestionKind::Date | QuestionKind::Time | QuestionKind::FreeText => {}
    }
    Ok(())
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::baseline::Baseline),
        Box::new(questionnaires::daily::DailyLog),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Result<Box<dyn Questionnaire>, SurveyError> {
    all_questionnaires()
        .into_iter()
        .find(|q| q.id() == id)
        .ok_or_else(|| SurveyError::UnknownQuestionnaire(id.to_string()))
}

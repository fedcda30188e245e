use fieldlog_core::models::answer::{Answer, Draft};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::question::{NumericBounds, NumericSlots, QuestionDefinition, QuestionKind, ScaleBounds};
use crate::visibility::active_questions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InvalidReason {
    /// Required, active and not answered.
    Missing,
    /// Answered, but the value does not fit the question type.
    Malformed,
}

/// Why a single question's answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub label: String,
    pub reason: InvalidReason,
    /// User-facing text, shown next to the offending question.
    pub message: String,
}

impl ValidationError {
    fn missing(question: &QuestionDefinition) -> Self {
        Self {
            question_id: question.id.clone(),
            label: question.label.clone(),
            reason: InvalidReason::Missing,
            message: format!("Please complete: {}", question.label),
        }
    }

    fn malformed(question: &QuestionDefinition, detail: &str) -> Self {
        Self {
            question_id: question.id.clone(),
            label: question.label.clone(),
            reason: InvalidReason::Malformed,
            message: format!("{}: {detail}", question.label),
        }
    }
}

/// Check one answer against its question.
///
/// Inactive questions always pass. Absent or blank answers fail only when
/// the question is required; anything present must fit the question type.
pub fn validate_answer(
    question: &QuestionDefinition,
    value: Option<&Answer>,
    active: bool,
) -> Result<(), ValidationError> {
    if !active {
        return Ok(());
    }

    let answer = match value {
        Some(answer) if !is_unanswered(&question.kind, answer, question.required) => answer,
        _ if question.required => return Err(ValidationError::missing(question)),
        _ => return Ok(()),
    };

    check_shape(&question.kind, answer).map_err(|detail| ValidationError::malformed(question, &detail))
}

/// Every failing active question, in schema order.
pub fn validate_draft(questions: &[QuestionDefinition], draft: &Draft) -> Vec<ValidationError> {
    active_questions(questions, draft)
        .into_iter()
        .filter_map(|q| validate_answer(q, draft.get(&q.id), true).err())
        .collect()
}

/// Stop at the first failing active question in schema order.
pub fn first_invalid(questions: &[QuestionDefinition], draft: &Draft) -> Result<(), ValidationError> {
    for question in active_questions(questions, draft) {
        validate_answer(question, draft.get(&question.id), true)?;
    }
    Ok(())
}

/// A required composite answer counts as unanswered when any of its slots is
/// empty; everything else only when it is blank as a whole.
fn is_unanswered(kind: &QuestionKind, answer: &Answer, required: bool) -> bool {
    match (kind, answer) {
        (QuestionKind::MultiNumeric(slots), Answer::Slots(values)) if required => {
            values.len() < slots.len() || values.iter().any(|v| v.trim().is_empty())
        }
        _ => answer.is_blank(),
    }
}

fn check_shape(kind: &QuestionKind, answer: &Answer) -> Result<(), String> {
    match kind {
        QuestionKind::MultiNumeric(slots) => {
            let values = answer
                .as_slots()
                .ok_or_else(|| format!("expected {} values", slots.len()))?;
            check_slots(slots, values)
        }
        _ => {
            // Checked as stored: visibility conditions compare the exact text.
            let text = answer
                .as_text()
                .ok_or_else(|| "expected a single value".to_string())?;
            check_text(kind, text)
        }
    }
}

fn check_text(kind: &QuestionKind, text: &str) -> Result<(), String> {
    match kind {
        QuestionKind::Date => text
            .parse::<jiff::civil::Date>()
            .map(|_| ())
            .map_err(|_| "expected a date (YYYY-MM-DD)".to_string()),
        QuestionKind::Time => jiff::civil::Time::strptime("%H:%M", text)
            .or_else(|_| text.parse::<jiff::civil::Time>())
            .map(|_| ())
            .map_err(|_| "expected a time (HH:MM)".to_string()),
        QuestionKind::SingleSelect(select) | QuestionKind::BinarySelect(select) => {
            if select.contains(text) {
                Ok(())
            } else {
                Err(format!("\"{text}\" is not one of the listed options"))
            }
        }
        // Any non-empty text is accepted once the "Other" path is taken.
        QuestionKind::SelectWithText(_) => Ok(()),
        QuestionKind::Numeric(bounds) => check_number(bounds, text),
        QuestionKind::Scale(scale) => check_scale(scale, text),
        QuestionKind::FreeText => Ok(()),
        QuestionKind::MultiNumeric(slots) => Err(format!("expected {} values", slots.len())),
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn check_number(bounds: &NumericBounds, text: &str) -> Result<(), String> {
    let value = parse_number(text).ok_or_else(|| "must be a number".to_string())?;
    if let Some(min) = bounds.min
        && value < min
    {
        return Err(format!("must be at least {min}"));
    }
    if let Some(max) = bounds.max
        && value > max
    {
        return Err(format!("must be at most {max}"));
    }
    Ok(())
}

fn check_slots(slots: &NumericSlots, values: &[String]) -> Result<(), String> {
    if values.len() > slots.len() {
        return Err(format!("expected {} values", slots.len()));
    }
    for (label, value) in slots.labels.iter().zip(values) {
        let value = value.trim();
        if !value.is_empty() && parse_number(value).is_none() {
            return Err(format!("{label} must be a number"));
        }
    }
    Ok(())
}

fn check_scale(scale: &ScaleBounds, text: &str) -> Result<(), String> {
    match text.parse::<i64>() {
        Ok(point) if scale.contains(point) && point.to_string() == text => Ok(()),
        _ => Err(format!(
            "choose a whole number from {} to {}",
            scale.min, scale.max
        )),
    }
}

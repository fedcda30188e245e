//! Turning `--answer id=value` arguments into typed answers.

use fieldlog_core::models::answer::{Answer, Draft};
use fieldlog_survey::Questionnaire;
use fieldlog_survey::question::{QuestionDefinition, QuestionKind};

/// Split `id=value` at the first `=`. The value may be empty.
pub fn parse_assignment(raw: &str) -> eyre::Result<(&str, &str)> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| eyre::eyre!("expected ID=VALUE, got \"{raw}\""))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(eyre::eyre!("missing question id in \"{raw}\""));
    }
    Ok((id, value))
}

/// Build the answer shape the question expects. Multi-value questions take
/// comma-separated values, positionally.
pub fn answer_for(question: &QuestionDefinition, value: &str) -> Answer {
    match &question.kind {
        QuestionKind::MultiNumeric(_) => Answer::slots(value.split(',').map(str::trim)),
        _ => Answer::text(value.trim()),
    }
}

/// Parse every assignment against `questionnaire`. Unknown ids are an error;
/// a later assignment to the same id wins.
pub fn parse_answers(questionnaire: &dyn Questionnaire, raw: &[String]) -> eyre::Result<Draft> {
    let mut draft = Draft::new();
    for assignment in raw {
        let (id, value) = parse_assignment(assignment)?;
        let question = questionnaire.require_question(id)?;
        draft.set(id, answer_for(question, value));
    }
    Ok(draft)
}

/// One-line description of what a question accepts.
pub fn describe_kind(kind: &QuestionKind) -> String {
    match kind {
        QuestionKind::Date => "date (YYYY-MM-DD)".to_string(),
        QuestionKind::Time => "time (HH:MM)".to_string(),
        QuestionKind::SingleSelect(select) | QuestionKind::BinarySelect(select) => {
            format!("one of: {}", select.options.join(" | "))
        }
        QuestionKind::SelectWithText(select) => {
            format!("one of: {} (or your own text)", select.options.join(" | "))
        }
        QuestionKind::Numeric(bounds) => {
            let mut out = "number".to_string();
            if let Some(min) = bounds.min {
                out.push_str(&format!(" >= {min}"));
            }
            if let Some(max) = bounds.max {
                out.push_str(&format!(" <= {max}"));
            }
            if let Some(unit) = &bounds.unit {
                out.push_str(&format!(" ({unit})"));
            }
            out
        }
        QuestionKind::MultiNumeric(slots) => {
            let parts: Vec<String> = slots
                .labels
                .iter()
                .zip(&slots.units)
                .map(|(label, unit)| format!("{label} {unit}"))
                .collect();
            format!("numbers, comma separated: {}", parts.join(", "))
        }
        QuestionKind::Scale(scale) => format!(
            "{} to {} ({} / {})",
            scale.min, scale.max, scale.min_label, scale.max_label
        ),
        QuestionKind::FreeText => "text".to_string(),
    }
}

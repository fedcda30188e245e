use fieldlog_cli::input::{answer_for, describe_kind, parse_answers, parse_assignment};
use fieldlog_core::models::answer::Answer;
use fieldlog_session::session::{BASELINE, DAILY};
use fieldlog_survey::Questionnaire;
use fieldlog_survey::questionnaires::daily::field;

#[test]
fn assignment_splits_at_first_equals() {
    assert_eq!(parse_assignment("daily_notes=a=b").unwrap(), ("daily_notes", "a=b"));
    assert_eq!(parse_assignment("scent_type=").unwrap(), ("scent_type", ""));
    assert!(parse_assignment("no-equals").is_err());
    assert!(parse_assignment("=value").is_err());
}

#[test]
fn multi_numeric_answers_split_on_commas() {
    let question = DAILY.question(field::TEMPERATURE_HUMIDITY).unwrap();
    assert_eq!(
        answer_for(question, "82, 70"),
        Answer::slots(["82", "70"])
    );
    assert_eq!(answer_for(question, "82,"), Answer::slots(["82", ""]));

    let notes = DAILY.question(field::DAILY_NOTES).unwrap();
    assert_eq!(answer_for(notes, " a, b "), Answer::text("a, b"));
}

#[test]
fn parse_answers_rejects_unknown_questions() {
    let raw = vec!["age_range=26-35".to_string(), "date=2025-06-03".to_string()];
    let err = parse_answers(&BASELINE, &raw).unwrap_err();
    assert!(err.to_string().contains("date"));
}

#[test]
fn later_assignment_wins() {
    let raw = vec![
        "sex=Male".to_string(),
        "sex=Female".to_string(),
    ];
    let draft = parse_answers(&BASELINE, &raw).unwrap();
    assert_eq!(draft.text("sex"), Some("Female"));
    assert_eq!(draft.len(), 1);
}

#[test]
fn kind_descriptions_carry_constraints() {
    let amount = DAILY.question(field::AMOUNT_APPLIED).unwrap();
    assert_eq!(
        describe_kind(&amount.kind),
        "number >= 0.5 (pea-sized amounts)"
    );
    let ease = DAILY.question(field::EASE_OF_APPLICATION).unwrap();
    assert_eq!(
        describe_kind(&ease.kind),
        "1 to 5 (1 - Strongly Disagree / 5 - Strongly Agree)"
    );
}

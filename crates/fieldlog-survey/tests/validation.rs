mod common;

use common::{complete_daily_draft, text};
use fieldlog_core::models::answer::Answer;
use fieldlog_survey::Questionnaire;
use fieldlog_survey::question::{
    NumericBounds, NumericSlots, QuestionDefinition, QuestionKind, ScaleBounds, SelectOptions,
};
use fieldlog_survey::questionnaires::baseline::{self, Baseline};
use fieldlog_survey::questionnaires::daily::{DailyLog, field};
use fieldlog_survey::validation::{InvalidReason, validate_answer};

fn reason(question: &QuestionDefinition, value: Option<&Answer>) -> Option<InvalidReason> {
    validate_answer(question, value, true).err().map(|e| e.reason)
}

#[test]
fn complete_draft_passes() {
    let daily = DailyLog;
    assert_eq!(daily.first_invalid(&complete_daily_draft()), Ok(()));
    assert!(daily.validate(&complete_daily_draft()).is_empty());
}

#[test]
fn every_unconditioned_required_question_is_reported_alone() {
    let daily = DailyLog;
    for question in daily.questions() {
        if !question.required || question.visibility.is_some() {
            continue;
        }
        let mut draft = complete_daily_draft();
        draft.remove(&question.id);

        let err = daily.first_invalid(&draft).unwrap_err();
        assert_eq!(err.question_id, question.id);
        assert_eq!(err.reason, InvalidReason::Missing);
        assert_eq!(err.message, format!("Please complete: {}", question.label));
    }
}

#[test]
fn hidden_scent_type_does_not_block() {
    let daily = DailyLog;
    let draft = complete_daily_draft().with(field::SCENTED_PRODUCTS, "No");
    assert!(draft.get(field::SCENT_TYPE).is_none());
    assert_eq!(daily.first_invalid(&draft), Ok(()));

    let shown = draft.with(field::SCENTED_PRODUCTS, "Yes");
    let err = daily.first_invalid(&shown).unwrap_err();
    assert_eq!(err.question_id, field::SCENT_TYPE);
}

#[test]
fn first_bite_time_is_required_only_when_bitten() {
    let daily = DailyLog;

    let bitten = complete_daily_draft().with(field::GOT_BITTEN_TREATED, "Yes");
    let err = daily.first_invalid(&bitten).unwrap_err();
    assert_eq!(err.question_id, field::FIRST_BITE_TIME);
    assert_eq!(err.reason, InvalidReason::Missing);

    let protected = complete_daily_draft().with(field::GOT_BITTEN_TREATED, "No");
    assert_eq!(daily.first_invalid(&protected), Ok(()));

    let answered = bitten.with(field::FIRST_BITE_TIME, "19:40");
    assert_eq!(daily.first_invalid(&answered), Ok(()));
}

#[test]
fn stale_hidden_answers_are_not_checked() {
    let daily = DailyLog;
    let draft = complete_daily_draft()
        .with(field::GOT_BITTEN_TREATED, "No")
        .with(field::FIRST_BITE_TIME, "not a time");
    assert_eq!(daily.first_invalid(&draft), Ok(()));
}

#[test]
fn fail_fast_reports_the_earliest_question() {
    let daily = DailyLog;
    let mut draft = complete_daily_draft();
    draft.remove(field::CLOTHING);
    draft.remove(field::DATE);
    draft.set(field::ALCOHOL_DRINKS, "lots");

    let first = daily.first_invalid(&draft).unwrap_err();
    assert_eq!(first.question_id, field::DATE);

    let all: Vec<String> = daily
        .validate(&draft)
        .into_iter()
        .map(|e| e.question_id)
        .collect();
    assert_eq!(all, [field::DATE, field::ALCOHOL_DRINKS, field::CLOTHING]);
}

#[test]
fn numeric_answers_parse_and_respect_minimum() {
    let q = QuestionDefinition::new(
        "amount",
        "Amount",
        QuestionKind::Numeric(NumericBounds::at_least(0.5).step(0.5)),
    )
    .required();

    assert_eq!(reason(&q, Some(&text("1.5"))), None);
    assert_eq!(reason(&q, Some(&text("0.5"))), None);
    // Step is a widget hint only.
    assert_eq!(reason(&q, Some(&text("0.7"))), None);
    assert_eq!(reason(&q, Some(&text("0.25"))), Some(InvalidReason::Malformed));
    assert_eq!(reason(&q, Some(&text("abc"))), Some(InvalidReason::Malformed));
    assert_eq!(reason(&q, Some(&text("NaN"))), Some(InvalidReason::Malformed));
    assert_eq!(reason(&q, Some(&text(""))), Some(InvalidReason::Missing));
    assert_eq!(reason(&q, None), Some(InvalidReason::Missing));
}

#[test]
fn optional_fields_are_shape_checked_when_present() {
    let q = QuestionDefinition::new(
        "duration",
        "Duration",
        QuestionKind::Numeric(NumericBounds::at_least(0.0)),
    );

    assert_eq!(reason(&q, None), None);
    assert_eq!(reason(&q, Some(&text("   "))), None);
    assert_eq!(reason(&q, Some(&text("90"))), None);

    let err = validate_answer(&q, Some(&text("ninety")), true).unwrap_err();
    assert_eq!(err.reason, InvalidReason::Malformed);
    assert_eq!(err.message, "Duration: must be a number");
}

#[test]
fn inactive_questions_always_pass() {
    let q = QuestionDefinition::new("t", "T", QuestionKind::Time).required();
    assert!(validate_answer(&q, None, false).is_ok());
    assert!(validate_answer(&q, Some(&text("garbage")), false).is_ok());
    assert!(validate_answer(&q, None, true).is_err());
}

#[test]
fn selects_must_match_an_option() {
    let q = QuestionDefinition::new(
        "sex",
        "Sex",
        QuestionKind::SingleSelect(SelectOptions::new(&["Male", "Female", "Prefer not to say"])),
    )
    .required();
    assert_eq!(reason(&q, Some(&text("Female"))), None);
    assert_eq!(reason(&q, Some(&text("female"))), Some(InvalidReason::Malformed));

    let binary = QuestionDefinition::new(
        "yn",
        "YN",
        QuestionKind::BinarySelect(SelectOptions::yes_no()),
    )
    .required();
    assert_eq!(reason(&binary, Some(&text("Maybe"))), Some(InvalidReason::Malformed));
    assert_eq!(
        reason(&binary, Some(&Answer::slots(["Yes"]))),
        Some(InvalidReason::Malformed)
    );
}

#[test]
fn select_with_text_accepts_free_text() {
    let q = QuestionDefinition::new(
        "scent",
        "Scent",
        QuestionKind::SelectWithText(SelectOptions::new(&["Citrus/Lemon", "Other"])),
    )
    .required();
    assert_eq!(reason(&q, Some(&text("Citrus/Lemon"))), None);
    assert_eq!(reason(&q, Some(&text("Sandalwood"))), None);
    assert_eq!(reason(&q, Some(&text(""))), Some(InvalidReason::Missing));
}

#[test]
fn scales_take_integers_in_range() {
    let q = QuestionDefinition::new("s", "S", QuestionKind::Scale(ScaleBounds::agreement())).required();
    assert_eq!(reason(&q, Some(&text("1"))), None);
    assert_eq!(reason(&q, Some(&text("5"))), None);
    assert_eq!(reason(&q, Some(&text("0"))), Some(InvalidReason::Malformed));
    assert_eq!(reason(&q, Some(&text("6"))), Some(InvalidReason::Malformed));
    assert_eq!(reason(&q, Some(&text("3.5"))), Some(InvalidReason::Malformed));
}

#[test]
fn dates_and_times_must_parse() {
    let date = QuestionDefinition::new("d", "D", QuestionKind::Date).required();
    assert_eq!(reason(&date, Some(&text("2025-06-03"))), None);
    assert_eq!(reason(&date, Some(&text("2025-02-30"))), Some(InvalidReason::Malformed));
    assert_eq!(reason(&date, Some(&text("June 3rd"))), Some(InvalidReason::Malformed));

    let time = QuestionDefinition::new("t", "T", QuestionKind::Time).required();
    assert_eq!(reason(&time, Some(&text("07:05"))), None);
    assert_eq!(reason(&time, Some(&text("19:30:15"))), None);
    assert_eq!(reason(&time, Some(&text("25:00"))), Some(InvalidReason::Malformed));
}

#[test]
fn required_composite_needs_every_slot() {
    let slots = NumericSlots::new(&["Temperature", "Humidity"], &["°F", "%"]);
    let required = QuestionDefinition::new("th", "TH", QuestionKind::MultiNumeric(slots.clone())).required();
    let optional = QuestionDefinition::new("th", "TH", QuestionKind::MultiNumeric(slots));

    assert_eq!(reason(&required, Some(&Answer::slots(["80", "65"]))), None);
    assert_eq!(reason(&required, Some(&Answer::slots(["80", ""]))), Some(InvalidReason::Missing));
    assert_eq!(reason(&required, Some(&Answer::slots(["80"]))), Some(InvalidReason::Missing));

    assert_eq!(reason(&optional, Some(&Answer::slots(["80", ""]))), None);
    assert_eq!(reason(&optional, Some(&Answer::slots(["", ""]))), None);
    assert_eq!(
        reason(&optional, Some(&Answer::slots(["warm", ""]))),
        Some(InvalidReason::Malformed)
    );
    assert_eq!(
        reason(&optional, Some(&Answer::slots(["80", "65", "3"]))),
        Some(InvalidReason::Malformed)
    );
    assert_eq!(reason(&optional, Some(&text("80"))), Some(InvalidReason::Malformed));
}

#[test]
fn baseline_requires_every_select() {
    let baseline = Baseline;
    let draft = fieldlog_core::models::answer::Draft::new()
        .with(baseline::field::AGE_RANGE, "26-35")
        .with(baseline::field::SEX, "Male")
        .with(baseline::field::MOSQUITO_ATTRACTION, "Often");

    let err = baseline.first_invalid(&draft).unwrap_err();
    assert_eq!(err.question_id, baseline::field::SKIN_TYPE);

    let complete = draft.with(baseline::field::SKIN_TYPE, "Dry");
    assert_eq!(baseline.first_invalid(&complete), Ok(()));
}

#[test]
fn padded_select_values_are_not_options() {
    let daily = DailyLog;
    let draft = complete_daily_draft().with(field::GOT_BITTEN_TREATED, " Yes");

    // " Yes" would otherwise pass as a member while keeping first_bite_time hidden.
    assert!(!daily
        .active_questions(&draft)
        .iter()
        .any(|q| q.id == field::FIRST_BITE_TIME));
    let err = daily.first_invalid(&draft).unwrap_err();
    assert_eq!(err.question_id, field::GOT_BITTEN_TREATED);
    assert_eq!(err.reason, InvalidReason::Malformed);

    let binary = QuestionDefinition::new(
        "yn",
        "YN",
        QuestionKind::BinarySelect(SelectOptions::yes_no()),
    )
    .required();
    assert_eq!(reason(&binary, Some(&text("No "))), Some(InvalidReason::Malformed));
}

#[test]
fn scale_answers_must_be_canonical_integers() {
    let q = QuestionDefinition::new("s", "S", QuestionKind::Scale(ScaleBounds::agreement())).required();
    assert_eq!(reason(&q, Some(&text("3"))), None);
    assert_eq!(reason(&q, Some(&text("+3"))), Some(InvalidReason::Malformed));
    assert_eq!(reason(&q, Some(&text("03"))), Some(InvalidReason::Malformed));
    assert_eq!(reason(&q, Some(&text(" 3"))), Some(InvalidReason::Malformed));
}

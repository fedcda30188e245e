#![allow(dead_code)]

use fieldlog_core::models::answer::{Answer, Draft};
use fieldlog_survey::questionnaires::daily::field;

/// A daily draft that passes validation with no conditional questions shown
/// beyond what `got_bitten_treated = "No"` opens.
pub fn complete_daily_draft() -> Draft {
    Draft::new()
        .with(field::DATE, "2025-06-03")
        .with(field::ENVIRONMENT, "Backyard/Patio")
        .with(field::ALCOHOL_DRINKS, "0")
        .with(field::METABOLISM_FOODS, "None")
        .with(field::SCENTED_PRODUCTS, "No")
        .with(field::TIME_APPLIED, "18:45")
        .with(field::BODY_AREA, "Full Arm (1 side)")
        .with(field::AMOUNT_APPLIED, "1.5")
        .with(field::CLOTHING, "Short Sleeves/Shorts")
        .with(field::EXPOSURE_START, "19:00")
        .with(field::GOT_BITTEN_TREATED, "No")
        .with(field::TOTAL_BITES_ALL, "2")
        .with(field::TOTAL_BITES_UNTREATED, "2")
        .with(field::REAPPLIED_PRODUCTS, "No")
        .with(field::EASE_OF_APPLICATION, "5")
        .with(field::TEXTURE_FEEL, "4")
        .with(field::SCENT_SATISFACTION, "4")
        .with(field::GREASY_STICKY, "2")
        .with(field::PROTECTION_SATISFACTION, "5")
        .with(field::PURCHASE_INTENT, "4")
}

pub fn text(value: &str) -> Answer {
    Answer::text(value)
}

use crate::Questionnaire;
use crate::question::{
    Condition, NumericBounds, NumericSlots, QuestionDefinition, QuestionKind, ScaleBounds,
    SelectOptions,
};

/// The form submitted once per trial day.
pub struct DailyLog;

pub mod field {
    pub const DATE: &str = "date";
    pub const ENVIRONMENT: &str = "environment";
    pub const TEMPERATURE_HUMIDITY: &str = "temperature_humidity";
    pub const ALCOHOL_DRINKS: &str = "alcohol_drinks";
    pub const METABOLISM_FOODS: &str = "metabolism_foods";
    pub const SCENTED_PRODUCTS: &str = "scented_products";
    pub const SCENT_TYPE: &str = "scent_type";
    pub const TIME_APPLIED: &str = "time_applied";
    pub const BODY_AREA: &str = "body_area";
    pub const AMOUNT_APPLIED: &str = "amount_applied";
    pub const CLOTHING: &str = "clothing";
    pub const EXPOSURE_START: &str = "exposure_start";
    pub const GOT_BITTEN_TREATED: &str = "got_bitten_treated";
    pub const FIRST_BITE_TIME: &str = "first_bite_time";
    pub const EXPOSURE_DURATION: &str = "exposure_duration";
    pub const TOTAL_BITES_ALL: &str = "total_bites_all";
    pub const TOTAL_BITES_UNTREATED: &str = "total_bites_untreated";
    pub const BITE_SEVERITY: &str = "bite_severity";
    pub const REAPPLIED_PRODUCTS: &str = "reapplied_products";
    pub const EASE_OF_APPLICATION: &str = "ease_of_application";
    pub const TEXTURE_FEEL: &str = "texture_feel";
    pub const SCENT_SATISFACTION: &str = "scent_satisfaction";
    pub const GREASY_STICKY: &str = "greasy_sticky";
    pub const PROTECTION_SATISFACTION: &str = "protection_satisfaction";
    pub const PURCHASE_INTENT: &str = "purchase_intent";
    pub const DAILY_NOTES: &str = "daily_notes";
}

impl Questionnaire for DailyLog {
    fn id(&self) -> &str {
        "daily"
    }

    fn name(&self) -> &str {
        "Daily Application Log"
    }

    fn questions(&self) -> &[QuestionDefinition] {
        static QUESTIONS: std::sync::LazyLock<Vec<QuestionDefinition>> =
            std::sync::LazyLock::new(build);
        &QUESTIONS
    }
}

fn build() -> Vec<QuestionDefinition> {
    use QuestionKind as K;

    vec![
        QuestionDefinition::new(field::DATE, "Date of application", K::Date).required(),
        select(
            field::ENVIRONMENT,
            "What type of environment were you in during the trial?",
            &[
                "Backyard/Patio",
                "Park/Open Field",
                "Wooded/Forest Area",
                "Near Water/Swamp",
                "Other",
            ],
        )
        .required(),
        QuestionDefinition::new(
            field::TEMPERATURE_HUMIDITY,
            "Temperature (°F) and Humidity (%)",
            K::MultiNumeric(NumericSlots::new(&["Temperature", "Humidity"], &["°F", "%"])),
        )
        .help("Optional but helpful - check weather.com if unsure"),
        number(
            field::ALCOHOL_DRINKS,
            "How many alcoholic drinks did you consume in the 6 hours before applying the product?",
            NumericBounds::at_least(0.0).unit("drinks"),
        )
        .required()
        .help("1 drink = 12oz beer, 5oz wine, or 1.5oz spirits"),
        select(
            field::METABOLISM_FOODS,
            "In the 3 hours before application, did you consume caffeine, high-sugar foods/drinks, or spicy food?",
            &["None", "Moderate Amount", "Heavy Amount"],
        )
        .required(),
        yes_no(
            field::SCENTED_PRODUCTS,
            "Did you apply any scented products (soap, lotion, perfume, etc.) in the 3 hours before application?",
        ),
        QuestionDefinition::new(
            field::SCENT_TYPE,
            "What was the primary scent of the product you used?",
            K::SelectWithText(SelectOptions::new(&[
                "Unscented",
                "Citrus/Lemon",
                "Floral/Jasmine",
                "Coconut/Vanilla",
                "Earthy/Herbal",
                "Other",
            ])),
        )
        .required()
        .visible_when(Condition::equals(field::SCENTED_PRODUCTS, "Yes")),
        QuestionDefinition::new(
            field::TIME_APPLIED,
            "What time did you apply Mosquito Butter?",
            K::Time,
        )
        .required(),
        select(
            field::BODY_AREA,
            "Which body area did you treat?",
            &[
                "Full Arm (1 side)",
                "Full Leg (1 side)",
                "Neck/Face",
                "Torso/Back",
                "Other",
            ],
        )
        .required(),
        number(
            field::AMOUNT_APPLIED,
            "Approximately how many pea-sized amounts did you apply?",
            NumericBounds::at_least(0.5).step(0.5).unit("pea-sized amounts"),
        )
        .required()
        .help("A pea-sized amount is about the size of a green pea (roughly 0.5 inches in diameter)"),
        select(
            field::CLOTHING,
            "What clothing were you wearing on the treated area?",
            &[
                "Fully Exposed (no clothing)",
                "Short Sleeves/Shorts",
                "Long Sleeves/Pants (thin fabric)",
                "Long Sleeves/Pants (thick fabric)",
            ],
        )
        .required(),
        QuestionDefinition::new(
            field::EXPOSURE_START,
            "What time did you START your outdoor mosquito exposure?",
            K::Time,
        )
        .required(),
        yes_no(
            field::GOT_BITTEN_TREATED,
            "Did you get bitten on the TREATED area?",
        )
        .help("Only count confirmed bites on the area where you applied Mosquito Butter"),
        QuestionDefinition::new(
            field::FIRST_BITE_TIME,
            "What time did you get your FIRST bite on the treated area?",
            K::Time,
        )
        .required()
        .visible_when(Condition::equals(field::GOT_BITTEN_TREATED, "Yes")),
        number(
            field::EXPOSURE_DURATION,
            "How long were you exposed to mosquitoes before ending the trial (without getting bitten on treated area)?",
            NumericBounds::at_least(0.0).unit("minutes"),
        )
        .visible_when(Condition::equals(field::GOT_BITTEN_TREATED, "No"))
        .help("For example: if you were outside from 7:00pm to 8:30pm, enter 90 minutes"),
        number(
            field::TOTAL_BITES_ALL,
            "Total number of confirmed mosquito bites (treated + untreated areas combined)?",
            NumericBounds::at_least(0.0).unit("bites"),
        )
        .required(),
        number(
            field::TOTAL_BITES_UNTREATED,
            "How many bites were on UNTREATED areas of your body?",
            NumericBounds::at_least(0.0).unit("bites"),
        )
        .required()
        .help("This helps us understand mosquito activity level"),
        QuestionDefinition::new(
            field::BITE_SEVERITY,
            "If you got bitten, rate the worst bite reaction:",
            K::Scale(ScaleBounds::new(
                1,
                5,
                "1 - Barely noticeable",
                "5 - Required medical attention",
            )),
        )
        .help("Skip this if you didn't get any bites"),
        yes_no(
            field::REAPPLIED_PRODUCTS,
            "Did you reapply ANY repellent products during the trial?",
        ),
        agreement(
            field::EASE_OF_APPLICATION,
            "The product was easy to apply to my skin",
        ),
        agreement(
            field::TEXTURE_FEEL,
            "The texture/feel on my skin was pleasant",
        ),
        agreement(field::SCENT_SATISFACTION, "I liked the natural scent"),
        agreement(
            field::GREASY_STICKY,
            "The product felt greasy or sticky after 10 minutes",
        )
        .help("1 = Not greasy at all, 5 = Very greasy"),
        agreement(
            field::PROTECTION_SATISFACTION,
            "I'm satisfied with the bite protection provided",
        ),
        agreement(
            field::PURCHASE_INTENT,
            "I would purchase Mosquito Butter based on this trial",
        ),
        QuestionDefinition::new(
            field::DAILY_NOTES,
            "Additional comments or observations:",
            K::FreeText,
        ),
    ]
}

fn select(id: &str, label: &str, options: &[&str]) -> QuestionDefinition {
    QuestionDefinition::new(id, label, QuestionKind::SingleSelect(SelectOptions::new(options)))
}

fn yes_no(id: &str, label: &str) -> QuestionDefinition {
    QuestionDefinition::new(id, label, QuestionKind::BinarySelect(SelectOptions::yes_no()))
        .required()
}

fn number(id: &str, label: &str, bounds: NumericBounds) -> QuestionDefinition {
    QuestionDefinition::new(id, label, QuestionKind::Numeric(bounds))
}

fn agreement(id: &str, label: &str) -> QuestionDefinition {
    QuestionDefinition::new(id, label, QuestionKind::Scale(ScaleBounds::agreement())).required()
}

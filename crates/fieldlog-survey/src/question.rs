use fieldlog_core::models::answer::Answer;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sentinel option that switches a select-with-text question to free text.
pub const OTHER_OPTION: &str = "Other";

/// Static description of a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionDefinition {
    pub id: String,
    pub label: String,
    pub kind: QuestionKind,
    pub required: bool,
    /// When set, the question is shown (and its requiredness enforced) only
    /// while the condition holds for the current draft.
    pub visibility: Option<Condition>,
    pub help: Option<String>,
}

impl QuestionDefinition {
    pub fn new(id: &str, label: &str, kind: QuestionKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            visibility: None,
            help: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn help(mut self, text: &str) -> Self {
        self.help = Some(text.to_string());
        self
    }

    pub fn visible_when(mut self, condition: Condition) -> Self {
        self.visibility = Some(condition);
        self
    }
}

/// Question type plus its type-specific constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// Exactly one of the listed options.
    SingleSelect(SelectOptions),
    /// One of the listed options, or free text once "Other" is chosen.
    SelectWithText(SelectOptions),
    /// Two-option select (Yes/No).
    BinarySelect(SelectOptions),
    /// A single number.
    Numeric(NumericBounds),
    /// Several positional numbers, one per label.
    MultiNumeric(NumericSlots),
    /// Wall-clock time, `HH:MM`.
    Time,
    /// Integer rating between two bounds.
    Scale(ScaleBounds),
    /// Unconstrained text.
    FreeText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectOptions {
    pub options: Vec<String>,
}

impl SelectOptions {
    pub fn new(options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn yes_no() -> Self {
        Self::new(&["Yes", "No"])
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Input granularity hint for the widget. Not enforced.
    pub step: Option<f64>,
    pub unit: Option<String>,
}

impl NumericBounds {
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            ..Self::default()
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }
}

/// Positional numeric slots. `labels[i]` is measured in `units[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericSlots {
    pub labels: Vec<String>,
    pub units: Vec<String>,
}

impl NumericSlots {
    pub fn new(labels: &[&str], units: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            units: units.iter().map(|u| u.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleBounds {
    pub min: i32,
    pub max: i32,
    pub min_label: String,
    pub max_label: String,
}

impl ScaleBounds {
    pub fn new(min: i32, max: i32, min_label: &str, max_label: &str) -> Self {
        Self {
            min,
            max,
            min_label: min_label.to_string(),
            max_label: max_label.to_string(),
        }
    }

    /// 5-point agreement scale.
    pub fn agreement() -> Self {
        Self::new(1, 5, "1 - Strongly Disagree", "5 - Strongly Agree")
    }

    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }

    pub fn points(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }
}

/// Predicate over the answers of other questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    /// The question's text answer is exactly `value`.
    Equals { question_id: String, value: String },
    /// The question's text answer is one of `values`.
    OneOf {
        question_id: String,
        values: Vec<String>,
    },
    All { conditions: Vec<Condition> },
    Any { conditions: Vec<Condition> },
    Not { condition: Box<Condition> },
}

impl Condition {
    pub fn equals(question_id: &str, value: &str) -> Self {
        Self::Equals {
            question_id: question_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Evaluate against `lookup`, which returns the answer a question
    /// currently has, or `None` when it counts as absent.
    pub fn evaluate<'a, F>(&self, lookup: &F) -> bool
    where
        F: Fn(&str) -> Option<&'a Answer>,
    {
        match self {
            Self::Equals { question_id, value } => {
                lookup(question_id.as_str()).and_then(Answer::as_text) == Some(value.as_str())
            }
            Self::OneOf { question_id, values } => lookup(question_id.as_str())
                .and_then(Answer::as_text)
                .is_some_and(|text| values.iter().any(|v| v == text)),
            Self::All { conditions } => conditions.iter().all(|c| c.evaluate(lookup)),
            Self::Any { conditions } => conditions.iter().any(|c| c.evaluate(lookup)),
            Self::Not { condition } => !condition.evaluate(lookup),
        }
    }

    /// Ids of every question this condition reads.
    pub fn dependencies(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_dependencies(&mut out);
        out
    }

    fn collect_dependencies<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Equals { question_id, .. } | Self::OneOf { question_id, .. } => {
                out.push(question_id.as_str())
            }
            Self::All { conditions } | Self::Any { conditions } => {
                for c in conditions {
                    c.collect_dependencies(out);
                }
            }
            Self::Not { condition } => condition.collect_dependencies(out),
        }
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A raw answer as captured from the rendering layer.
///
/// Every question type encodes its answer as text, except composite
/// numeric questions which keep one string per positional slot. An empty
/// string in a slot means the slot has not been filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Answer {
    Text(String),
    Slots(Vec<String>),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn slots<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Slots(values.into_iter().map(Into::into).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Slots(_) => None,
        }
    }

    pub fn as_slots(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::Slots(slots) => Some(slots),
        }
    }

    /// True when nothing usable was entered. Whitespace counts as nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Slots(slots) => slots.iter().all(|s| s.trim().is_empty()),
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// An in-progress, not yet validated set of answers keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft {
    answers: BTreeMap<String, Answer>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy when assembling a draft in one expression.
    pub fn with(mut self, question_id: impl Into<String>, answer: impl Into<Answer>) -> Self {
        self.set(question_id, answer);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn text(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).and_then(Answer::as_text)
    }

    pub fn set(&mut self, question_id: impl Into<String>, answer: impl Into<Answer>) {
        self.answers.insert(question_id.into(), answer.into());
    }

    pub fn remove(&mut self, question_id: &str) -> Option<Answer> {
        self.answers.remove(question_id)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn answers(&self) -> &BTreeMap<String, Answer> {
        &self.answers
    }

    pub fn into_answers(self) -> BTreeMap<String, Answer> {
        self.answers
    }
}

impl From<BTreeMap<String, Answer>> for Draft {
    fn from(answers: BTreeMap<String, Answer>) -> Self {
        Self { answers }
    }
}

impl<K: Into<String>> FromIterator<(K, Answer)> for Draft {
    fn from_iter<T: IntoIterator<Item = (K, Answer)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

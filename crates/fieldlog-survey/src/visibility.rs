//! Visibility resolution.
//!
//! A question is active when it has no visibility condition, or when its
//! condition holds over the answers of questions that are themselves active.
//! Questions are decided in schema order, so a chain of dependencies of any
//! depth resolves in one pass: by the time a question is reached every
//! question it may depend on has already been decided. An answer left behind
//! on a hidden question never counts, and a reference to a question that is
//! unknown or comes later reads as absent.

use std::collections::HashSet;

use fieldlog_core::models::answer::Draft;

use crate::question::QuestionDefinition;

/// The questions currently active for `draft`, in schema order.
pub fn active_questions<'q>(
    questions: &'q [QuestionDefinition],
    draft: &Draft,
) -> Vec<&'q QuestionDefinition> {
    let mut active: HashSet<&str> = HashSet::with_capacity(questions.len());
    let mut out = Vec::with_capacity(questions.len());

    for question in questions {
        let shown = match &question.visibility {
            None => true,
            Some(condition) => {
                let lookup = |id: &str| {
                    if active.contains(id) {
                        draft.get(id)
                    } else {
                        None
                    }
                };
                condition.evaluate(&lookup)
            }
        };
        if shown {
            active.insert(question.id.as_str());
            out.push(question);
        }
    }
    out
}

/// Whether the question with `question_id` is active for `draft`.
pub fn is_active(questions: &[QuestionDefinition], draft: &Draft, question_id: &str) -> bool {
    active_questions(questions, draft)
        .iter()
        .any(|q| q.id == question_id)
}

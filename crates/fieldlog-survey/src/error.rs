use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error("unknown question '{question_id}' in questionnaire '{questionnaire_id}'")]
    UnknownQuestion {
        questionnaire_id: String,
        question_id: String,
    },

    #[error("duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("question '{question_id}' depends on '{depends_on}', which does not precede it")]
    ForwardReference {
        question_id: String,
        depends_on: String,
    },

    #[error("question '{question_id}' is malformed: {reason}")]
    MalformedQuestion { question_id: String, reason: String },
}

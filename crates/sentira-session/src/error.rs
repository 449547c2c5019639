use thiserror::Error;

/// Validation and transition errors of the collection state machine.
/// All recoverable: the session stays usable after every variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("respondent contact is required before answering")]
    MissingIdentity,

    #[error("required question '{question_id}' (item {index}) is unanswered")]
    RequiredUnanswered { question_id: String, index: usize },

    #[error("unknown question '{0}'")]
    UnknownQuestion(String),

    #[error("value does not fit question '{question_id}': {reason}")]
    InvalidValue { question_id: String, reason: String },

    #[error("operation not permitted in state {state}")]
    InvalidTransition { state: String },
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::FinalizedAnswerList;
use super::result::ScoringResult;

/// Contact details captured at the start of a collection session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Respondent {
    pub name: String,
    pub contact: String,
}

/// A stored response record, identified by an opaque generated code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub code: String,
    pub questionnaire_id: String,
    pub respondent: Respondent,
    pub answers: FinalizedAnswerList,
    /// Absent until scoring succeeded; a response is never marked scored
    /// while classification is unresolved.
    pub result: Option<ScoringResult>,
    pub submitted_at: jiff::Timestamp,
}

/// Opaque unique code for a stored response. Collision probability is
/// treated as negligible.
pub fn generate_response_code() -> String {
    Uuid::new_v4().simple().to_string()
}

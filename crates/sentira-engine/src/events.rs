use serde::Serialize;
use tracing::info;

use sentira_core::models::config::RiskTag;

/// A structured scoring event for the audit trail.
///
/// Emitted via `tracing` so the hosting service's log pipeline picks it up.
/// The engine never formats or sends notifications itself; flagged
/// responses reach reviewers through the notification collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringEvent {
    pub action: String,
    pub response_code: String,
    pub questionnaire_id: String,
    pub score: f64,
    pub tag: RiskTag,
    pub flagged: bool,
}

impl ScoringEvent {
    pub fn new(
        action: impl Into<String>,
        response_code: impl Into<String>,
        questionnaire_id: impl Into<String>,
        score: f64,
        tag: RiskTag,
        flagged: bool,
    ) -> Self {
        Self {
            action: action.into(),
            response_code: response_code.into(),
            questionnaire_id: questionnaire_id.into(),
            score,
            tag,
            flagged,
        }
    }

    /// Emit this scoring event via tracing.
    pub fn emit(&self) {
        info!(
            scoring.action = %self.action,
            scoring.response = %self.response_code,
            scoring.questionnaire = %self.questionnaire_id,
            scoring.score = self.score,
            scoring.tag = %self.tag.as_str(),
            scoring.flagged = self.flagged,
            "scoring event"
        );
    }
}

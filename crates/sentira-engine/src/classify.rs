use sentira_core::models::config::{RiskRange, ScoringConfig};

use crate::error::EngineError;

/// Map a score to its risk band: first range, scanning in the table's
/// ascending order, whose inclusive bounds contain the score. A score
/// outside every band fails classification; callers must treat that as a
/// data-integrity error, not fall back to the lowest band.
pub fn classify(config: &ScoringConfig, score: f64) -> Result<&RiskRange, EngineError> {
    config
        .ranges
        .iter()
        .find(|range| range.contains(score))
        .ok_or_else(|| EngineError::ScoreOutOfRange {
            score,
            config: config.id.clone(),
        })
}

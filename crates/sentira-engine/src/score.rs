use std::collections::BTreeMap;

use sentira_core::models::answer::FinalizedAnswerList;
use sentira_core::models::config::{ScoringConfig, ScoringMethod};
use sentira_core::models::question::QuestionDefinition;

use crate::error::EngineError;

/// Questionnaire-specific scoring hook for the `Custom` method. The engine
/// supplies the full answer/question context and takes the returned number
/// unmodified.
pub trait CustomRule: Send + Sync {
    fn evaluate(&self, questions: &[QuestionDefinition], answers: &FinalizedAnswerList) -> f64;
}

/// Aggregate per-answer contributions into the questionnaire score.
///
/// Returns the score and the per-question breakdown (raw contributions,
/// 0 for answers that never score). Averages only count answers from
/// scorable question kinds in their denominator; a submission with zero
/// scorable answers scores 0 under every method. Scores are not clamped
/// to the configured maximum; an under-covering range table is a
/// configuration bug surfaced by classification, not corrected here.
pub fn score(
    config: &ScoringConfig,
    questions: &[QuestionDefinition],
    answers: &FinalizedAnswerList,
    custom: Option<&dyn CustomRule>,
) -> Result<(f64, BTreeMap<String, f64>), EngineError> {
    let breakdown: BTreeMap<String, f64> = answers
        .answers()
        .iter()
        .map(|a| (a.question_id.clone(), a.contribution.unwrap_or(0.0)))
        .collect();

    let weight_of = |question_id: &str| -> f64 {
        questions
            .iter()
            .find(|q| q.id == question_id)
            .map(|q| q.weight)
            .unwrap_or(1.0)
    };

    // (contribution, weight) for every answered, scorable question.
    let scored: Vec<(f64, f64)> = answers
        .answers()
        .iter()
        .filter_map(|a| a.contribution.map(|c| (c, weight_of(&a.question_id))))
        .collect();

    let value = match config.method {
        ScoringMethod::Sum => scored.iter().map(|(c, w)| c * w).sum(),
        ScoringMethod::Average => {
            if scored.is_empty() {
                0.0
            } else {
                round_half_up(scored.iter().map(|(c, _)| c).sum::<f64>() / scored.len() as f64)
            }
        }
        ScoringMethod::WeightedAverage => {
            let total_weight: f64 = scored.iter().map(|(_, w)| w).sum();
            if total_weight == 0.0 {
                0.0
            } else {
                round_half_up(scored.iter().map(|(c, w)| c * w).sum::<f64>() / total_weight)
            }
        }
        ScoringMethod::Custom => match custom {
            Some(rule) => rule.evaluate(questions, answers),
            None => return Err(EngineError::MissingCustomRule(config.id.clone())),
        },
    };

    Ok((value, breakdown))
}

/// Round to the nearest integer, half upward.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

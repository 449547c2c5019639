use std::sync::LazyLock;

use sentira_core::models::config::{RiskTag, ScoringConfig, ScoringMethod};
use sentira_core::models::question::{QuestionDefinition, QuestionKind};

use super::{band, options};
use crate::Instrument;

/// PSS-10: Perceived Stress Scale. 10 items, each rated 0–4. Total 0–40.
pub struct Pss10;

impl Instrument for Pss10 {
    fn id(&self) -> &str {
        "pss10"
    }

    fn name(&self) -> &str {
        "PSS-10"
    }

    fn questions(&self) -> &[QuestionDefinition] {
        static QUESTIONS: LazyLock<Vec<QuestionDefinition>> = LazyLock::new(|| {
            let items = [
                (
                    "pss10_upset",
                    "How often have you been upset because of something that happened unexpectedly?",
                ),
                (
                    "pss10_control",
                    "How often have you felt that you were unable to control the important things in your life?",
                ),
                (
                    "pss10_nervous",
                    "How often have you felt nervous and stressed?",
                ),
                (
                    "pss10_confident",
                    "How often have you felt confident about your ability to handle your personal problems?",
                ),
                (
                    "pss10_going_your_way",
                    "How often have you felt that things were going your way?",
                ),
                (
                    "pss10_cope",
                    "How often have you found that you could not cope with all the things that you had to do?",
                ),
                (
                    "pss10_irritations",
                    "How often have you been able to control irritations in your life?",
                ),
                (
                    "pss10_on_top",
                    "How often have you felt that you were on top of things?",
                ),
                (
                    "pss10_angered",
                    "How often have you been angered because of things that happened that were outside of your control?",
                ),
                (
                    "pss10_piling_up",
                    "How often have you felt difficulties were piling up so high that you could not overcome them?",
                ),
            ];

            items
                .iter()
                .enumerate()
                .map(|(index, (id, text))| QuestionDefinition {
                    id: (*id).to_string(),
                    index,
                    text: (*text).to_string(),
                    kind: QuestionKind::SingleSelect,
                    required: true,
                    options: options(&[
                        (0.0, "Never"),
                        (1.0, "Almost never"),
                        (2.0, "Sometimes"),
                        (3.0, "Fairly often"),
                        (4.0, "Very often"),
                    ]),
                    weight: 1.0,
                })
                .collect()
        });
        &QUESTIONS
    }

    fn config(&self) -> &ScoringConfig {
        static CONFIG: LazyLock<ScoringConfig> = LazyLock::new(|| ScoringConfig {
            id: "pss10".to_string(),
            method: ScoringMethod::Sum,
            max_score: 40.0,
            ranges: vec![
                band(0.0, 13.0, "Low perceived stress", RiskTag::Low),
                band(14.0, 26.0, "Moderate perceived stress", RiskTag::Moderate),
                band(27.0, 40.0, "High perceived stress", RiskTag::High),
            ],
        });
        &CONFIG
    }
}

use std::sync::LazyLock;

use sentira_core::models::config::{RiskTag, ScoringConfig, ScoringMethod};
use sentira_core::models::question::{QuestionDefinition, QuestionKind};

use super::{band, options};
use crate::Instrument;

/// WHO-5 Well-Being Index, raw scoring. 5 items, each rated 0–5. Total 0–25.
/// Direction is inverted relative to the symptom scales: a low total means
/// poor wellbeing, so the high-risk band sits at the bottom of the range.
pub struct Who5;

impl Instrument for Who5 {
    fn id(&self) -> &str {
        "who5"
    }

    fn name(&self) -> &str {
        "WHO-5"
    }

    fn questions(&self) -> &[QuestionDefinition] {
        static QUESTIONS: LazyLock<Vec<QuestionDefinition>> = LazyLock::new(|| {
            let items = [
                ("who5_cheerful", "I have felt cheerful and in good spirits"),
                ("who5_calm", "I have felt calm and relaxed"),
                ("who5_active", "I have felt active and vigorous"),
                ("who5_rested", "I woke up feeling fresh and rested"),
                (
                    "who5_interest",
                    "My daily life has been filled with things that interest me",
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
                        (0.0, "At no time"),
                        (1.0, "Some of the time"),
                        (2.0, "Less than half of the time"),
                        (3.0, "More than half of the time"),
                        (4.0, "Most of the time"),
                        (5.0, "All of the time"),
                    ]),
                    weight: 1.0,
                })
                .collect()
        });
        &QUESTIONS
    }

    fn config(&self) -> &ScoringConfig {
        static CONFIG: LazyLock<ScoringConfig> = LazyLock::new(|| ScoringConfig {
            id: "who5".to_string(),
            method: ScoringMethod::Sum,
            max_score: 25.0,
            ranges: vec![
                band(0.0, 12.0, "Poor wellbeing", RiskTag::High),
                band(13.0, 18.0, "Reduced wellbeing", RiskTag::Moderate),
                band(19.0, 25.0, "Good wellbeing", RiskTag::Minimal),
            ],
        });
        &CONFIG
    }
}

use std::sync::LazyLock;

use sentira_core::models::config::{RiskTag, ScoringConfig, ScoringMethod};
use sentira_core::models::question::{QuestionDefinition, QuestionKind, QuestionOption};

use super::{band, options};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, nine-item depression module.
/// 9 items, each rated 0–3. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn questions(&self) -> &[QuestionDefinition] {
        static QUESTIONS: LazyLock<Vec<QuestionDefinition>> = LazyLock::new(|| {
            let items = [
                ("phq9_interest", "Little interest or pleasure in doing things"),
                ("phq9_down", "Feeling down, depressed, or hopeless"),
                (
                    "phq9_sleep",
                    "Trouble falling or staying asleep, or sleeping too much",
                ),
                ("phq9_tired", "Feeling tired or having little energy"),
                ("phq9_appetite", "Poor appetite or overeating"),
                (
                    "phq9_failure",
                    "Feeling bad about yourself, or that you are a failure",
                ),
                (
                    "phq9_concentration",
                    "Trouble concentrating on things, such as reading or watching television",
                ),
                (
                    "phq9_movement",
                    "Moving or speaking noticeably slowly, or being fidgety or restless",
                ),
                (
                    "phq9_self_harm",
                    "Thoughts that you would be better off dead or of hurting yourself",
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
                    options: frequency_options(),
                    weight: 1.0,
                })
                .collect()
        });
        &QUESTIONS
    }

    fn config(&self) -> &ScoringConfig {
        static CONFIG: LazyLock<ScoringConfig> = LazyLock::new(|| ScoringConfig {
            id: "phq9".to_string(),
            method: ScoringMethod::Sum,
            max_score: 27.0,
            ranges: vec![
                band(0.0, 4.0, "Minimal depression", RiskTag::Minimal),
                band(5.0, 9.0, "Mild depression", RiskTag::Mild),
                band(10.0, 14.0, "Moderate depression", RiskTag::Moderate),
                band(
                    15.0,
                    19.0,
                    "Moderately severe depression",
                    RiskTag::ModeratelySevere,
                ),
                band(20.0, 27.0, "Severe depression", RiskTag::Severe),
            ],
        });
        &CONFIG
    }
}

fn frequency_options() -> Vec<QuestionOption> {
    options(&[
        (0.0, "Not at all"),
        (1.0, "Several days"),
        (2.0, "More than half the days"),
        (3.0, "Nearly every day"),
    ])
}

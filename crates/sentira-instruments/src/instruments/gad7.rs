use std::sync::LazyLock;

use sentira_core::models::config::{RiskTag, ScoringConfig, ScoringMethod};
use sentira_core::models::question::{QuestionDefinition, QuestionKind};

use super::{band, options};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder seven-item scale.
/// 7 items, each rated 0–3. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn questions(&self) -> &[QuestionDefinition] {
        static QUESTIONS: LazyLock<Vec<QuestionDefinition>> = LazyLock::new(|| {
            let items = [
                ("gad7_nervous", "Feeling nervous, anxious, or on edge"),
                ("gad7_control", "Not being able to stop or control worrying"),
                ("gad7_worry", "Worrying too much about different things"),
                ("gad7_relax", "Trouble relaxing"),
                ("gad7_restless", "Being so restless that it is hard to sit still"),
                ("gad7_irritable", "Becoming easily annoyed or irritable"),
                (
                    "gad7_afraid",
                    "Feeling afraid, as if something awful might happen",
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
                        (0.0, "Not at all"),
                        (1.0, "Several days"),
                        (2.0, "More than half the days"),
                        (3.0, "Nearly every day"),
                    ]),
                    weight: 1.0,
                })
                .collect()
        });
        &QUESTIONS
    }

    fn config(&self) -> &ScoringConfig {
        static CONFIG: LazyLock<ScoringConfig> = LazyLock::new(|| ScoringConfig {
            id: "gad7".to_string(),
            method: ScoringMethod::Sum,
            max_score: 21.0,
            ranges: vec![
                band(0.0, 4.0, "Minimal anxiety", RiskTag::Minimal),
                band(5.0, 9.0, "Mild anxiety", RiskTag::Mild),
                band(10.0, 14.0, "Moderate anxiety", RiskTag::Moderate),
                band(15.0, 21.0, "Severe anxiety", RiskTag::Severe),
            ],
        });
        &CONFIG
    }
}

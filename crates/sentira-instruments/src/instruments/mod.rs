pub mod gad7;
pub mod phq9;
pub mod pss10;
pub mod who5;

use sentira_core::models::config::{RiskRange, RiskTag};
use sentira_core::models::question::QuestionOption;

pub(crate) fn band(min: f64, max: f64, label: &str, tag: RiskTag) -> RiskRange {
    RiskRange {
        min,
        max,
        label: label.to_string(),
        tag,
    }
}

pub(crate) fn options(pairs: &[(f64, &str)]) -> Vec<QuestionOption> {
    pairs
        .iter()
        .map(|(value, label)| QuestionOption {
            value: *value,
            label: (*label).to_string(),
        })
        .collect()
}

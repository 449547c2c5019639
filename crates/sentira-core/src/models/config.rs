use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The aggregation rule turning per-answer contributions into one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringMethod {
    Sum,
    Average,
    WeightedAverage,
    /// Delegated to a questionnaire-specific rule supplied by the caller.
    Custom,
}

/// Shared severity vocabulary for risk bands. Declaration order is the
/// severity total order, so two questionnaires with differently named top
/// bands still compare.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTag {
    Minimal,
    Low,
    Mild,
    Moderate,
    ModeratelySevere,
    High,
    Severe,
    VeryHigh,
}

impl RiskTag {
    /// Rank in the severity total order, 0 = least severe.
    pub fn severity_rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTag::Minimal => "minimal",
            RiskTag::Low => "low",
            RiskTag::Mild => "mild",
            RiskTag::Moderate => "moderate",
            RiskTag::ModeratelySevere => "moderately_severe",
            RiskTag::High => "high",
            RiskTag::Severe => "severe",
            RiskTag::VeryHigh => "very_high",
        }
    }

    /// All tags, in severity order.
    pub fn all() -> &'static [RiskTag] {
        &[
            RiskTag::Minimal,
            RiskTag::Low,
            RiskTag::Mild,
            RiskTag::Moderate,
            RiskTag::ModeratelySevere,
            RiskTag::High,
            RiskTag::Severe,
            RiskTag::VeryHigh,
        ]
    }
}

/// A contiguous band of scores mapped to a named risk level. Bounds are
/// inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskRange {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub tag: RiskTag,
}

impl RiskRange {
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }
}

/// How one questionnaire's answers become a score and a risk band.
/// Read-only for the duration of a scoring operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringConfig {
    pub id: String,
    pub method: ScoringMethod,
    /// Maximum score the range table must cover. Scores are never clamped
    /// to it; an under-covering table is a configuration bug.
    pub max_score: f64,
    /// Ascending, contiguous, non-overlapping bands covering [0, max_score].
    pub ranges: Vec<RiskRange>,
}

impl ScoringConfig {
    /// Check the range-table invariant: non-empty, ascending, starting at 0,
    /// ending at `max_score`, with adjacent bands meeting at `max + 1`.
    pub fn validate(&self) -> Result<(), CoreError> {
        let invalid = |reason: String| CoreError::InvalidConfig {
            id: self.id.clone(),
            reason,
        };

        let mut prev: Option<&RiskRange> = None;
        for range in &self.ranges {
            if range.max < range.min {
                return Err(invalid(format!(
                    "band '{}' has max {} below min {}",
                    range.label, range.max, range.min
                )));
            }
            match prev {
                None if range.min != 0.0 => {
                    return Err(invalid(format!(
                        "first band starts at {} instead of 0",
                        range.min
                    )));
                }
                Some(p) if range.min != p.max + 1.0 => {
                    return Err(invalid(format!(
                        "gap or overlap between {} and {}",
                        p.max, range.min
                    )));
                }
                _ => {}
            }
            prev = Some(range);
        }

        match prev {
            None => Err(invalid("empty range table".to_string())),
            Some(last) if last.max != self.max_score => Err(invalid(format!(
                "last band ends at {} instead of max score {}",
                last.max, self.max_score
            ))),
            Some(_) => Ok(()),
        }
    }
}

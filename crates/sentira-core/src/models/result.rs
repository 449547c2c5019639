use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::config::RiskTag;

/// The outcome of scoring one finalized submission. Produced once per
/// answer list; immutable. The breakdown uses a BTreeMap so serialization
/// is byte-stable across recalculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    pub score: f64,
    /// Display label of the matched risk band.
    pub label: String,
    pub tag: RiskTag,
    /// Per-question raw contribution, 0 for kinds that never score.
    pub breakdown: BTreeMap<String, f64>,
    pub needs_review: bool,
}

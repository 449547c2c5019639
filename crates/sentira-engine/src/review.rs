use sentira_core::models::config::RiskTag;

/// Fixed, questionnaire-independent allow-list of tags that require human
/// clinical review. Evaluated on the resolved tag, not the raw score, so
/// questionnaires with inverted scales (WHO-5) still flag correctly.
pub fn should_flag(tag: RiskTag) -> bool {
    matches!(
        tag,
        RiskTag::ModeratelySevere | RiskTag::High | RiskTag::Severe | RiskTag::VeryHigh
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagging_is_monotonic_in_severity() {
        let tags = RiskTag::all();
        for &a in tags {
            for &b in tags {
                if a.severity_rank() >= b.severity_rank() && should_flag(b) {
                    assert!(should_flag(a), "{a:?} must flag when {b:?} does");
                }
            }
        }
    }
}

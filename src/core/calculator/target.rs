/// Weekly objective, in hours.
pub const WEEKLY_TARGET_HOURS: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetComparison {
    pub target: f64,
    pub difference: f64,
    pub percentage: f64,
}

/// Difference and completion percentage of a weekly net total against the
/// 40h objective. Values are unrounded; display formatting decides.
pub fn compare_to_target(total_net: f64) -> TargetComparison {
    TargetComparison {
        target: WEEKLY_TARGET_HOURS,
        difference: total_net - WEEKLY_TARGET_HOURS,
        percentage: total_net / WEEKLY_TARGET_HOURS * 100.0,
    }
}

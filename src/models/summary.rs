use std::collections::BTreeMap;

/// Hours figures for a single complete day, as rendered in summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct DayHours {
    pub entry: String,
    pub exit: String,
    pub net: f64,
    pub gross: f64,
    pub notes: String,
    /// Whether the 30-minute break deduction applied to this day.
    pub has_break: bool,
}

/// Aggregated hours over a set of dates (a week, a year, or any filtered
/// history). Recomputed on every query, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Complete days only, keyed by "YYYY-MM-DD".
    pub days: BTreeMap<String, DayHours>,
    pub total_net: f64,
    pub total_gross: f64,
    pub days_worked: usize,
    /// Zero when no day produced hours; never a division error.
    pub average_per_day: f64,
}

impl Summary {
    /// Total break time deducted over the window, in hours.
    pub fn total_deducted(&self) -> f64 {
        self.total_gross - self.total_net
    }
}

//! Net/gross worked hours for a single record.

use crate::models::record::Record;
use crate::utils::time::parse_time;

/// Unpaid break deducted from shifts longer than the threshold.
pub const BREAK_DEDUCTION_HOURS: f64 = 0.5;
/// Threshold is strict: a shift of exactly 5 hours keeps its full time.
pub const BREAK_THRESHOLD_HOURS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkedHours {
    pub net: f64,
    pub gross: f64,
}

impl WorkedHours {
    pub fn has_break(&self) -> bool {
        self.gross > BREAK_THRESHOLD_HOURS
    }
}

/// Turn a record's entry/exit pair into worked hours.
///
/// Returns None when either time is absent or fails to parse as HH:MM.
/// An exit earlier than the entry is read as a shift crossing midnight,
/// so the exit gets pushed to the next day before differencing.
///
/// Net and gross are rounded to 2 decimals independently, after the
/// deduction. The rounded pair is not guaranteed to differ by exactly
/// the deduction; downstream code must not rely on it.
pub fn calculate(record: &Record, apply_break: bool) -> Option<WorkedHours> {
    let entry = parse_time(record.entry.as_deref()?)?;
    let exit = parse_time(record.exit.as_deref()?)?;

    let mut seconds = (exit - entry).num_seconds();
    if seconds < 0 {
        seconds += 24 * 3600;
    }

    let gross = seconds as f64 / 3600.0;

    let net = if apply_break && gross > BREAK_THRESHOLD_HOURS {
        gross - BREAK_DEDUCTION_HOURS
    } else {
        gross
    };

    Some(WorkedHours {
        net: round2(net),
        gross: round2(gross),
    })
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

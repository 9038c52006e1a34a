//! Aggregation of per-day calculator results into weekly/yearly rollups.

use chrono::{Datelike, NaiveDate};

use crate::core::calculator::hours::{self, round2};
use crate::models::summary::{DayHours, Summary};
use crate::store::RecordStore;
use crate::utils::date;

/// Fold calculator output over a set of dates.
///
/// Dates with no record, an incomplete record, or unparsable times are
/// silently skipped: missing data is not an error and does not count
/// toward days_worked. Totals are rounded once at the end.
pub fn aggregate_dates(store: &dyn RecordStore, dates: &[NaiveDate]) -> Summary {
    let mut summary = Summary::default();
    let mut total_net = 0.0;
    let mut total_gross = 0.0;

    for d in dates {
        let key = date::to_key(d);

        let Some(record) = store.get(&key) else {
            continue;
        };
        let Some(worked) = hours::calculate(record, true) else {
            continue;
        };

        total_net += worked.net;
        total_gross += worked.gross;

        summary.days.insert(
            key,
            DayHours {
                entry: record.entry.clone().unwrap_or_default(),
                exit: record.exit.clone().unwrap_or_default(),
                net: worked.net,
                gross: worked.gross,
                notes: record.notes.clone(),
                has_break: worked.has_break(),
            },
        );
    }

    summary.days_worked = summary.days.len();
    summary.total_net = round2(total_net);
    summary.total_gross = round2(total_gross);
    summary.average_per_day = if summary.days_worked > 0 {
        round2(total_net / summary.days_worked as f64)
    } else {
        0.0
    };

    summary
}

/// Seven consecutive days starting at `week_start`. The window is opaque:
/// any weekday is accepted as a start, Monday is only the caller's default.
pub fn week_summary(store: &dyn RecordStore, week_start: NaiveDate) -> Summary {
    aggregate_dates(store, &date::week_dates(week_start))
}

/// Every stored record whose date key falls within `year`. Keys that do
/// not parse as YYYY-MM-DD are malformed data and get skipped.
pub fn year_summary(store: &dyn RecordStore, year: i32) -> Summary {
    let dates: Vec<NaiveDate> = store
        .get_all()
        .keys()
        .filter_map(|k| date::parse_date(k))
        .filter(|d| d.year() == year)
        .collect();

    aggregate_dates(store, &dates)
}

use chrono::Datelike;

use crate::cli::parser::Commands;
use crate::core::calculator::summary::year_summary;
use crate::errors::AppResult;
use crate::store::json::JsonStore;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::format_hours;

/// Yearly rollup: totals, days worked and the daily average.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Year { year } = cmd {
        let y = year.unwrap_or_else(|| date::today().year());

        let store = JsonStore::open(&cfg.data_file);
        let summary = year_summary(&store, y);

        header(format!("Year {}", y));
        println!("⏱️  Total net:   {}", format_hours(summary.total_net));
        println!("🕒 Total gross: {}", format_hours(summary.total_gross));
        println!("📅 Days worked: {}", summary.days_worked);
        println!("📊 Average/day: {}", format_hours(summary.average_per_day));
    }

    Ok(())
}

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::cli::parser::Commands;
use crate::core::calculator::hours::{self, round2};
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::store::json::JsonStore;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::{format_hours, truncate_notes};
use crate::utils::table::{Column, Table};

/// Full history view: one row per stored record, with computed hours and
/// running totals at the bottom.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let store = JsonStore::open(&cfg.data_file);

        if store.get_all().is_empty() {
            info("No records yet. Start registering your hours!");
            return Ok(());
        }

        let keys = selected_keys(&store, period, *now)?;

        if keys.is_empty() {
            info("No records for the selected period.");
            return Ok(());
        }

        let mut table = build_table(cfg.show_weekday);
        let mut total_net = 0.0;
        let mut total_gross = 0.0;
        let mut days_worked = 0;

        for key in &keys {
            let Some(record) = store.get(key) else {
                continue;
            };

            let worked = hours::calculate(record, true);
            if let Some(w) = &worked {
                total_net += w.net;
                total_gross += w.gross;
                days_worked += 1;
            }

            let mut row = vec![key.clone()];
            if cfg.show_weekday {
                let day = date::parse_date(key)
                    .map(|d| date::weekday_name(&d).to_string())
                    .unwrap_or_else(|| "-".to_string());
                row.push(colorize_optional(&day));
            }
            row.push(colorize_optional(record.entry.as_deref().unwrap_or("-")));
            row.push(colorize_optional(record.exit.as_deref().unwrap_or("-")));

            match &worked {
                Some(w) => {
                    row.push(format_hours(w.gross));
                    row.push(format_hours(w.net));
                    row.push(if w.has_break() {
                        "✓".to_string()
                    } else {
                        "✗".to_string()
                    });
                }
                None => {
                    row.push(colorize_optional("-"));
                    row.push(colorize_optional("-"));
                    row.push(colorize_optional("-"));
                }
            }
            row.push(truncate_notes(&record.notes, 30));

            table.add_row(row);
        }

        println!("{}", table.render());
        println!("📅 Days worked: {}", days_worked);
        println!("⏱️  Total net:   {}", format_hours(round2(total_net)));
        println!("🕒 Total gross: {}", format_hours(round2(total_gross)));
        println!(
            "💤 Break time deducted: {}",
            format_hours(round2(total_gross - total_net))
        );
    }

    Ok(())
}

fn build_table(show_weekday: bool) -> Table {
    let mut columns = vec![Column::new("Date", 10)];
    if show_weekday {
        columns.push(Column::new("Day", 9));
    }
    columns.extend([
        Column::new("In", 5),
        Column::new("Out", 5),
        Column::new("Gross", 6),
        Column::new("Net", 6),
        Column::new("Break", 5),
        Column::new("Notes", 30),
    ]);
    Table::new(columns)
}

/// The record keys to display, in stored (sorted) order.
fn selected_keys(store: &JsonStore, period: &Option<String>, now: bool) -> AppResult<Vec<String>> {
    if now {
        let key = date::to_key(&date::today());
        return Ok(if store.get(&key).is_some() {
            vec![key]
        } else {
            Vec::new()
        });
    }

    let Some(p) = period else {
        return Ok(store.get_all().keys().cloned().collect());
    };

    let dates = resolve_period(p)?;
    let wanted: HashSet<String> = dates.iter().map(date::to_key).collect();

    Ok(store
        .get_all()
        .keys()
        .filter(|k| wanted.contains(k.as_str()))
        .cloned()
        .collect())
}

fn resolve_period(p: &str) -> AppResult<Vec<NaiveDate>> {
    if p.contains(':') {
        let parts: Vec<&str> = p.split(':').collect();
        if parts.len() == 2 {
            return date::generate_range(parts[0], parts[1]).map_err(AppError::InvalidDate);
        }
    }

    date::generate_from_period(p).map_err(AppError::InvalidDate)
}

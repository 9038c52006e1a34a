use ansi_term::Colour;
use chrono::Duration;

use crate::cli::parser::Commands;
use crate::core::calculator::hours::round2;
use crate::core::calculator::summary::week_summary;
use crate::core::calculator::target::compare_to_target;
use crate::errors::{AppError, AppResult};
use crate::store::json::JsonStore;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_difference, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::{format_hours, format_signed_hours, truncate_notes};
use crate::utils::table::{Column, Table};

/// Weekly summary over an opaque 7-day window, with the 40h target
/// comparison. All seven days are rendered, empty ones as dashes.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Week { start } = cmd {
        let week_start = match start {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::week_start_of(date::today()),
        };
        let week_end = week_start + Duration::days(6);

        let store = JsonStore::open(&cfg.data_file);
        let summary = week_summary(&store, week_start);

        header(format!("Week {} → {}", week_start, week_end));

        let mut columns = vec![Column::new("Date", 10)];
        if cfg.show_weekday {
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
        let mut table = Table::new(columns);

        for d in date::week_dates(week_start) {
            let key = date::to_key(&d);

            let mut row = vec![key.clone()];
            if cfg.show_weekday {
                row.push(date::weekday_name(&d).to_string());
            }

            match summary.days.get(&key) {
                Some(day) => {
                    row.push(day.entry.clone());
                    row.push(day.exit.clone());
                    row.push(format_hours(day.gross));
                    row.push(format_hours(day.net));
                    row.push(if day.has_break {
                        "✓".to_string()
                    } else {
                        "✗".to_string()
                    });
                    row.push(truncate_notes(&day.notes, 30));
                }
                None => {
                    for _ in 0..6 {
                        row.push(colorize_optional("-"));
                    }
                }
            }

            table.add_row(row);
        }

        println!("{}", table.render());

        println!("⏱️  Total net:   {}", format_hours(summary.total_net));
        println!("🕒 Total gross: {}", format_hours(summary.total_gross));
        println!("📅 Days worked: {}", summary.days_worked);
        println!("📊 Average/day: {}", format_hours(summary.average_per_day));
        println!(
            "💤 Break time deducted: {}",
            format_hours(round2(summary.total_deducted()))
        );
        println!();

        // ---- Weekly target ----
        let cmp = compare_to_target(summary.total_net);
        let diff_color = color_for_difference(cmp.difference);

        println!(
            "🎯 Weekly target: {:.0}h | Difference: {}{}{} | Completion: {:.1}%",
            cmp.target,
            diff_color,
            format_signed_hours(cmp.difference),
            RESET,
            cmp.percentage
        );

        let status = if cmp.difference > 0.0 {
            Colour::Green.paint("Target exceeded").to_string()
        } else if cmp.difference == 0.0 {
            Colour::Cyan.paint("Target met").to_string()
        } else {
            Colour::Yellow.paint("Hours still missing").to_string()
        };
        println!("   {}", status);
    }

    Ok(())
}

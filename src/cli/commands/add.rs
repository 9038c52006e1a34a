use crate::cli::parser::Commands;
use crate::core::calculator::hours;
use crate::core::register::RegisterLogic;
use crate::errors::{AppError, AppResult};
use crate::store::json::JsonStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::formatting::format_hours;
use crate::utils::time::parse_optional_time;

/// Register entry/exit times and notes for a date.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        entry,
        exit,
        notes,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse IN time (optional)
        //
        let entry_parsed = parse_optional_time(entry.as_ref())?;

        //
        // 3. Parse OUT time (optional)
        //
        let exit_parsed = parse_optional_time(exit.as_ref())?;

        //
        // 4. Open store
        //
        let mut store = JsonStore::open(&cfg.data_file);

        //
        // 5. Execute logic
        //
        let record = match RegisterLogic::apply(
            &mut store,
            d,
            entry_parsed,
            exit_parsed,
            notes.clone(),
        ) {
            Ok(r) => r,
            Err(AppError::StoreWrite(msg)) => {
                // Memory and file diverge until the next successful save.
                warning(format!("Could not save data file: {}", msg));
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match (entry_parsed, exit_parsed) {
            (Some(t_in), Some(t_out)) => success(format!(
                "Registered IN/OUT pair on {}: {} → {}.",
                d,
                t_in.format("%H:%M"),
                t_out.format("%H:%M")
            )),
            (Some(t_in), None) => {
                success(format!("Registered IN at {} on {}.", t_in.format("%H:%M"), d))
            }
            (None, Some(t_out)) => {
                success(format!("Registered OUT at {} on {}.", t_out.format("%H:%M"), d))
            }
            (None, None) => success(format!("Notes updated for {}.", d)),
        }

        // Echo the day's hours as soon as the record is complete
        if let Some(worked) = hours::calculate(&record, true) {
            info(format!(
                "Worked {} net ({} gross) on {}.",
                format_hours(worked.net),
                format_hours(worked.gross),
                d
            ));
            if worked.has_break() {
                info("30-minute break deducted (shift longer than 5h).");
            }
        }
    }

    Ok(())
}

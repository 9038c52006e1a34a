use crate::cli::parser::Commands;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::store::json::JsonStore;
use crate::ui::messages::warning;
use crate::utils::date;

/// Delete the whole record for a date.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Del { date } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let mut store = JsonStore::open(&cfg.data_file);

        match DeleteLogic::apply(&mut store, d) {
            Ok(()) => {}
            Err(AppError::StoreWrite(msg)) => {
                warning(format!("Could not save data file: {}", msg));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

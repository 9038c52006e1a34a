use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::date;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the whole record for a date. Deleting a date that was never
    /// registered is reported as an error, not ignored.
    pub fn apply(store: &mut dyn RecordStore, date: NaiveDate) -> AppResult<()> {
        let key = date::to_key(&date);

        if !store.delete(&key)? {
            return Err(AppError::NoRecordForDate(key));
        }

        info(format!("Deleted record for {}", date));
        Ok(())
    }
}

use chrono::{NaiveDate, NaiveTime};

use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::store::RecordStore;
use crate::utils::date;

/// High-level business logic for the `add` command.
pub struct RegisterLogic;

impl RegisterLogic {
    /// Set the entry and/or exit time for a date, creating the record on
    /// first registration. Each time can be set independently and
    /// overwrites any previous value; re-registering an identical time is
    /// a no-op for the other fields. Notes are only replaced when a
    /// non-empty string is supplied, so registering an exit never wipes
    /// notes written at clock-in.
    pub fn apply(
        store: &mut dyn RecordStore,
        date: NaiveDate,
        entry: Option<NaiveTime>,
        exit: Option<NaiveTime>,
        notes: Option<String>,
    ) -> AppResult<Record> {
        // ------------------------------------------------
        // Nothing to do without at least one field
        // ------------------------------------------------
        if entry.is_none() && exit.is_none() && notes.is_none() {
            return Err(AppError::InvalidTime(
                "Nothing to do: specify at least --in, --out or --notes.".into(),
            ));
        }

        let key = date::to_key(&date);
        let mut record = store.get(&key).cloned().unwrap_or_default();

        if let Some(t) = entry {
            record.entry = Some(t.format("%H:%M").to_string());
        }
        if let Some(t) = exit {
            record.exit = Some(t.format("%H:%M").to_string());
        }
        if let Some(n) = notes
            && !n.is_empty()
        {
            record.notes = n;
        }

        store.put(&key, record.clone())?;
        Ok(record)
    }
}

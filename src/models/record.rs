use serde::{Deserialize, Serialize};

/// One stored day, keyed in the store by its "YYYY-MM-DD" date string.
/// Times are kept as raw "HH:MM" strings; validation happens in the
/// calculator, so a hand-edited data file never breaks loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Clock-in time ("HH:MM"), absent until first registered.
    pub entry: Option<String>,
    /// Clock-out time ("HH:MM"), absent until first registered.
    pub exit: Option<String>,
    /// Free-text notes for the day.
    #[serde(default)]
    pub notes: String,
}

impl Record {
    /// A record with both times present. Completeness says nothing about
    /// parseability; an unparsable time still yields no hours.
    pub fn is_complete(&self) -> bool {
        self.entry.is_some() && self.exit.is_some()
    }
}

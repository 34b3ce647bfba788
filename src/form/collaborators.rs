use chrono::NaiveDate;

use crate::error::Result;

/// Durable storage for completed food entries.
pub trait RecordStore {
    /// Persist a new entry. An error leaves the form open with its draft intact.
    fn add_food(&mut self, date: NaiveDate, name: &str, grams: f64, calories: f64) -> Result<()>;
}

/// Screen transitions around the form.
pub trait NavigationHost {
    /// Close the form and return to the previous screen.
    fn dismiss(&mut self);
}

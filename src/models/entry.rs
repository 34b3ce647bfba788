use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A logged food entry: what was eaten, how much, and on which day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub date: NaiveDate,

    pub name: String,

    pub grams: f64,

    pub calories: f64,
}

impl FoodEntry {
    pub fn new(date: NaiveDate, name: impl Into<String>, grams: f64, calories: f64) -> Self {
        Self {
            date,
            name: name.into(),
            grams,
            calories,
        }
    }

    /// Non-empty name and finite, non-negative amounts.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.grams.is_finite()
            && self.calories.is_finite()
            && self.grams >= 0.0
            && self.calories >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} on {}: {}g, {} cal",
            self.name, self.date, self.grams, self.calories
        )
    }
}

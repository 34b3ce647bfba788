use chrono::NaiveDate;

use crate::models::FoodTemplate;

/// Whether calories follow grams or are entered by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieMode {
    Manual,
    Auto,
}

/// Optional values a caller can seed the form with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPrefill {
    pub name: Option<String>,
    pub grams: Option<f64>,
    pub calories: Option<f64>,
    pub ratio: Option<f64>,
}

impl EntryPrefill {
    pub fn new(
        name: Option<String>,
        grams: Option<f64>,
        calories: Option<f64>,
        ratio: Option<f64>,
    ) -> Self {
        Self {
            name,
            grams,
            calories,
            ratio,
        }
    }

    /// Seed from a template: its portion plus its calories-per-gram ratio.
    pub fn from_template(template: &FoodTemplate) -> Self {
        Self {
            name: Some(template.name.clone()),
            grams: Some(template.grams),
            calories: Some(template.calories),
            ratio: template.ratio(),
        }
    }
}

/// The unsaved state of a single food entry.
///
/// Fields are only written through `AddEntryForm`, which keeps the
/// auto-calculate invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodEntryDraft {
    pub(super) name: String,
    pub(super) date: NaiveDate,
    pub(super) grams: f64,
    pub(super) calories: f64,
    pub(super) mode: CalorieMode,
    pub(super) ratio: Option<f64>,
}

impl FoodEntryDraft {
    /// Build a draft from prefill values. Calories are never derived here.
    pub fn from_prefill(prefill: EntryPrefill, today: NaiveDate) -> Self {
        let mode = match (prefill.ratio, prefill.grams, prefill.calories) {
            (Some(_), Some(_), Some(_)) => CalorieMode::Auto,
            _ => CalorieMode::Manual,
        };

        Self {
            name: prefill.name.unwrap_or_default(),
            date: today,
            grams: prefill.grams.unwrap_or(0.0),
            calories: prefill.calories.unwrap_or(0.0),
            mode,
            ratio: prefill.ratio,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn grams(&self) -> f64 {
        self.grams
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn ratio(&self) -> Option<f64> {
        self.ratio
    }

    /// Effective mode. Without a ratio this is always `Manual`.
    pub fn mode(&self) -> CalorieMode {
        if self.ratio.is_some() {
            self.mode
        } else {
            CalorieMode::Manual
        }
    }

    pub fn is_name_empty(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Grams and calories both non-zero.
    pub fn has_amounts(&self) -> bool {
        self.grams != 0.0 && self.calories != 0.0
    }

    /// `grams * ratio`, if a ratio exists.
    pub(super) fn calculate_calories_from_grams(&mut self) {
        if let Some(ratio) = self.ratio {
            self.calories = self.grams * ratio;
        }
    }
}

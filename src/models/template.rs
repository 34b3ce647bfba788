use serde::{Deserialize, Serialize};

/// A saved reference portion of a food, used to pre-seed the add-entry form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodTemplate {
    pub name: String,

    pub grams: f64,

    pub calories: f64,
}

impl FoodTemplate {
    pub fn new(name: impl Into<String>, grams: f64, calories: f64) -> Self {
        Self {
            name: name.into(),
            grams,
            calories,
        }
    }

    /// Calories per gram, or `None` for a zero-gram portion.
    #[inline]
    pub fn ratio(&self) -> Option<f64> {
        if self.grams > 0.0 {
            Some(self.calories / self.grams)
        } else {
            None
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

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for FoodTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodTemplate {}

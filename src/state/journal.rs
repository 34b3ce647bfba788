use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use strsim::jaro_winkler;
use tracing::{debug, info};

use crate::error::{CalorieError, Result};
use crate::form::RecordStore;
use crate::models::{FoodEntry, FoodTemplate};
use crate::state::persistence::{load_journal, save_journal, JournalFile};

/// Minimum Jaro-Winkler score for a template suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of template suggestions.
const MAX_SUGGESTIONS: usize = 5;

/// Grams and calories summed over one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub entries: usize,
    pub grams: f64,
    pub calories: f64,
}

/// Logged entries and food templates, backed by a JSON file.
pub struct FoodJournal {
    path: PathBuf,
    data: JournalFile,
}

impl FoodJournal {
    /// Open the journal at `path`, starting empty if the file does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = load_journal(&path)?;
        debug!(
            path = %path.display(),
            entries = data.entries.len(),
            templates = data.templates.len(),
            "opened food journal"
        );
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        save_journal(&self.path, &self.data)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[FoodEntry] {
        &self.data.entries
    }

    pub fn entries_on(&self, date: NaiveDate) -> Vec<&FoodEntry> {
        self.data.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Per-day totals in date order.
    pub fn daily_totals(&self) -> Vec<DailyTotal> {
        let mut by_date: BTreeMap<NaiveDate, DailyTotal> = BTreeMap::new();
        for entry in &self.data.entries {
            let total = by_date.entry(entry.date).or_insert(DailyTotal {
                date: entry.date,
                entries: 0,
                grams: 0.0,
                calories: 0.0,
            });
            total.entries += 1;
            total.grams += entry.grams;
            total.calories += entry.calories;
        }
        by_date.into_values().collect()
    }

    pub fn templates(&self) -> &[FoodTemplate] {
        &self.data.templates
    }

    /// Add a template, replacing any with the same name (case-insensitive), and save.
    pub fn add_template(&mut self, template: FoodTemplate) -> Result<()> {
        if !template.is_valid() {
            return Err(CalorieError::InvalidInput(format!(
                "template '{}' needs a name and non-negative amounts",
                template.name
            )));
        }

        match self.data.templates.iter_mut().find(|t| **t == template) {
            Some(existing) => *existing = template,
            None => self.data.templates.push(template),
        }
        self.save()
    }

    /// Exact lookup by name (case-insensitive).
    pub fn find_template(&self, name: &str) -> Option<&FoodTemplate> {
        let key = name.trim().to_lowercase();
        self.data.templates.iter().find(|t| t.key() == key)
    }

    /// Like `find_template`, but an error when nothing matches.
    pub fn require_template(&self, name: &str) -> Result<&FoodTemplate> {
        self.find_template(name)
            .ok_or_else(|| CalorieError::TemplateNotFound(name.to_string()))
    }

    /// Fuzzy lookup, best match first.
    pub fn suggest_templates(&self, query: &str) -> Vec<&FoodTemplate> {
        let query = query.trim().to_lowercase();
        let mut candidates: Vec<(&FoodTemplate, f64)> = self
            .data
            .templates
            .iter()
            .map(|t| (t, jaro_winkler(&t.key(), &query)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(t, _)| t)
            .collect()
    }
}

impl RecordStore for FoodJournal {
    fn add_food(&mut self, date: NaiveDate, name: &str, grams: f64, calories: f64) -> Result<()> {
        let entry = FoodEntry::new(date, name, grams, calories);
        if !entry.is_valid() {
            return Err(CalorieError::InvalidInput(format!(
                "refusing to log invalid entry: {}",
                entry.debug_string()
            )));
        }

        self.data.entries.push(entry);
        if let Err(e) = self.save() {
            self.data.entries.pop();
            return Err(e);
        }

        info!(path = %self.path.display(), "food journal saved");
        Ok(())
    }
}

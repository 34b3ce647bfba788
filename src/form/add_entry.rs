use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::{CalorieError, Result};
use crate::form::collaborators::{NavigationHost, RecordStore};
use crate::form::constants::{snap_to_step, CALORIES_MAX, EMPTY_NAME_MESSAGE, GRAMS_MAX};
use crate::form::draft::{CalorieMode, EntryPrefill, FoodEntryDraft};
use crate::models::FoodEntry;

/// A blocking message the user must acknowledge before submitting again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAlert {
    EmptyName,
    SaveFailed(String),
}

impl FormAlert {
    pub fn title(&self) -> &'static str {
        "Error"
    }

    pub fn message(&self) -> String {
        match self {
            FormAlert::EmptyName => EMPTY_NAME_MESSAGE.to_string(),
            FormAlert::SaveFailed(reason) => format!("Could not save the entry: {}", reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Dismissed,
}

/// The add-entry form: owns a draft, validates it, and hands it to a store.
#[derive(Debug, Clone)]
pub struct AddEntryForm {
    draft: FoodEntryDraft,
    today: NaiveDate,
    alert: Option<FormAlert>,
    status: FormStatus,
}

impl AddEntryForm {
    /// Open the form dated today (local time).
    pub fn initialize(prefill: EntryPrefill) -> Self {
        Self::initialize_on(prefill, Local::now().date_naive())
    }

    /// Open the form with an explicit notion of "today".
    pub fn initialize_on(prefill: EntryPrefill, today: NaiveDate) -> Self {
        let draft = FoodEntryDraft::from_prefill(prefill, today);
        debug!(
            name = %draft.name(),
            grams = draft.grams(),
            calories = draft.calories(),
            mode = ?draft.mode(),
            "opened add-entry form"
        );
        Self {
            draft,
            today,
            alert: None,
            status: FormStatus::Editing,
        }
    }

    pub fn draft(&self) -> &FoodEntryDraft {
        &self.draft
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn alert(&self) -> Option<&FormAlert> {
        self.alert.as_ref()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn auto_calculate_enabled(&self) -> bool {
        self.draft.mode() == CalorieMode::Auto
    }

    /// The toggle only exists when a ratio was supplied.
    pub fn shows_auto_calculate_toggle(&self) -> bool {
        self.draft.ratio.is_some()
    }

    pub fn calories_editable(&self) -> bool {
        !self.auto_calculate_enabled()
    }

    /// The "(Manual)" label next to calories.
    pub fn shows_manual_badge(&self) -> bool {
        self.draft.ratio.is_some() && !self.auto_calculate_enabled()
    }

    /// Whether the submit control is enabled. Name emptiness is checked on press.
    pub fn can_submit(&self) -> bool {
        self.status == FormStatus::Editing && self.alert.is_none() && self.draft.has_amounts()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Snap and clamp grams; recompute calories once if it changed while in auto mode.
    pub fn set_grams(&mut self, value: f64) {
        let grams = snap_to_step(value, GRAMS_MAX);
        if grams == self.draft.grams {
            return;
        }
        self.draft.grams = grams;

        if self.auto_calculate_enabled() {
            self.draft.calculate_calories_from_grams();
            debug!(grams, calories = self.draft.calories, "recalculated calories");
        }
    }

    /// Returns `false` when calories are locked by auto-calculate.
    pub fn set_calories(&mut self, value: f64) -> bool {
        if !self.calories_editable() {
            debug!("calories are auto-calculated; ignoring manual edit");
            return false;
        }
        self.draft.calories = snap_to_step(value, CALORIES_MAX);
        true
    }

    /// Dates after today are not selectable.
    pub fn set_date(&mut self, date: NaiveDate) -> bool {
        if date > self.today {
            debug!(%date, today = %self.today, "rejected future date");
            return false;
        }
        self.draft.date = date;
        true
    }

    /// Switch calorie mode. Only possible with a ratio; values are left untouched.
    pub fn set_auto_calculate(&mut self, enabled: bool) -> bool {
        if self.draft.ratio.is_none() {
            return false;
        }
        self.draft.mode = if enabled {
            CalorieMode::Auto
        } else {
            CalorieMode::Manual
        };
        true
    }

    pub fn acknowledge_alert(&mut self) {
        self.alert = None;
    }

    /// Validate and save the draft, then close the form.
    pub fn submit<S, N>(&mut self, store: &mut S, nav: &mut N) -> Result<FoodEntry>
    where
        S: RecordStore + ?Sized,
        N: NavigationHost + ?Sized,
    {
        if !self.can_submit() {
            return Err(CalorieError::SubmitDisabled);
        }

        if self.draft.is_name_empty() {
            self.alert = Some(FormAlert::EmptyName);
            return Err(CalorieError::EmptyName);
        }

        let entry = FoodEntry::new(
            self.draft.date,
            self.draft.name.trim(),
            self.draft.grams,
            self.draft.calories,
        );

        if let Err(e) = store.add_food(entry.date, &entry.name, entry.grams, entry.calories) {
            warn!(error = %e, "failed to save food entry");
            self.alert = Some(FormAlert::SaveFailed(e.to_string()));
            return Err(e);
        }

        info!(entry = %entry.debug_string(), "saved food entry");
        self.status = FormStatus::Dismissed;
        nav.dismiss();
        Ok(entry)
    }

    /// Discard the draft and close.
    pub fn cancel<N: NavigationHost + ?Sized>(&mut self, nav: &mut N) {
        if self.status == FormStatus::Dismissed {
            return;
        }
        debug!("add-entry form cancelled");
        self.status = FormStatus::Dismissed;
        nav.dismiss();
    }
}

use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};

use crate::error::{CalorieError, Result};
use crate::form::constants::{CALORIES_MAX, GRAMS_MAX, INPUT_STEP};
use crate::form::{AddEntryForm, FormAlert, FormStatus, NavigationHost, RecordStore};
use crate::interface::render::display_form;
use crate::models::FoodEntry;
use crate::state::FoodJournal;

/// Navigation for the terminal: closing the form just ends the session loop.
#[derive(Debug, Default)]
pub struct TerminalNavigation {
    dismissed: bool,
}

impl TerminalNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}

impl NavigationHost for TerminalNavigation {
    fn dismiss(&mut self) {
        self.dismissed = true;
        println!("Closed \"Add Food\".");
    }
}

/// One menu choice in the form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    EditName,
    SetGrams,
    SetCalories,
    ToggleAutoCalculate,
    SetDate,
    Submit,
    Cancel,
}

impl FormAction {
    fn label(&self, form: &AddEntryForm) -> String {
        match self {
            FormAction::EditName => "Food name".to_string(),
            FormAction::SetGrams => "Grams".to_string(),
            FormAction::SetCalories => "Calories".to_string(),
            FormAction::ToggleAutoCalculate => {
                let state = if form.auto_calculate_enabled() { "on" } else { "off" };
                format!("Auto Calculate ({})", state)
            }
            FormAction::SetDate => "Select a date".to_string(),
            FormAction::Submit => "Submit".to_string(),
            FormAction::Cancel => "Cancel".to_string(),
        }
    }
}

/// Actions the form currently allows, in display order.
pub fn available_actions(form: &AddEntryForm) -> Vec<FormAction> {
    let mut actions = vec![FormAction::EditName, FormAction::SetGrams];
    if form.calories_editable() {
        actions.push(FormAction::SetCalories);
    }
    if form.shows_auto_calculate_toggle() {
        actions.push(FormAction::ToggleAutoCalculate);
    }
    actions.push(FormAction::SetDate);
    if form.can_submit() {
        actions.push(FormAction::Submit);
    }
    actions.push(FormAction::Cancel);
    actions
}

/// Drive the add-entry form from terminal prompts until it is submitted or cancelled.
///
/// Returns the saved entry, or `None` on cancel.
pub fn run_add_form<S, N>(
    mut form: AddEntryForm,
    store: &mut S,
    nav: &mut N,
) -> Result<Option<FoodEntry>>
where
    S: RecordStore + ?Sized,
    N: NavigationHost + ?Sized,
{
    while form.status() == FormStatus::Editing {
        display_form(&form);

        let actions = available_actions(&form);
        let labels: Vec<String> = actions.iter().map(|a| a.label(&form)).collect();
        let selection = Select::new()
            .with_prompt("Add Food")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            FormAction::EditName => {
                let name = prompt_name(form.draft().name())?;
                form.set_name(name);
            }
            FormAction::SetGrams => {
                if let Some(grams) =
                    recover(prompt_amount("Grams", form.draft().grams(), GRAMS_MAX))?
                {
                    form.set_grams(grams);
                }
            }
            FormAction::SetCalories => {
                if let Some(calories) =
                    recover(prompt_amount("Calories", form.draft().calories(), CALORIES_MAX))?
                {
                    form.set_calories(calories);
                }
            }
            FormAction::ToggleAutoCalculate => {
                let enabled = !form.auto_calculate_enabled();
                form.set_auto_calculate(enabled);
            }
            FormAction::SetDate => {
                if let Some(date) = recover(prompt_date(form.draft().date(), form.today()))? {
                    if !form.set_date(date) {
                        println!("Dates after {} cannot be selected.", form.today());
                    }
                }
            }
            FormAction::Submit => match form.submit(store, nav) {
                Ok(entry) => return Ok(Some(entry)),
                Err(CalorieError::EmptyName) => {}
                Err(e) if form.alert().is_some() => {
                    tracing::debug!(error = %e, "submit surfaced an alert");
                }
                Err(e) => return Err(e),
            },
            FormAction::Cancel => form.cancel(nav),
        }

        if let Some(alert) = form.alert().cloned() {
            acknowledge(&alert)?;
            form.acknowledge_alert();
        }
    }

    Ok(None)
}

/// Report bad input and keep the session going; other errors propagate.
fn recover<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(CalorieError::InvalidInput(msg)) => {
            println!("{}", msg);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Show a blocking alert and wait for "OK".
pub fn acknowledge(alert: &FormAlert) -> Result<()> {
    println!();
    println!("{}: {}", alert.title(), alert.message());
    Confirm::new()
        .with_prompt("OK")
        .default(true)
        .show_default(false)
        .interact()?;
    Ok(())
}

/// Prompt for the food name.
pub fn prompt_name(current: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt("Food name")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for a slider-style amount in `[0, max]`.
pub fn prompt_amount(label: &str, current: f64, max: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{} (0-{:.0}, step {:.0})", label, max, INPUT_STEP))
        .default(format!("{:.0}", current))
        .interact_text()?;

    parse_amount(&input)
}

/// Prompt for a date in `YYYY-MM-DD` form.
pub fn prompt_date(current: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
    let input: String = Input::new()
        .with_prompt(format!("Date (YYYY-MM-DD, up to {})", today))
        .default(current.to_string())
        .interact_text()?;

    parse_date(&input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a template name, offering fuzzy matches when there is no exact hit.
pub fn prompt_template_choice(journal: &FoodJournal, query: &str) -> Result<Option<String>> {
    if let Some(template) = journal.find_template(query) {
        return Ok(Some(template.name.clone()));
    }

    let candidates = journal.suggest_templates(query);
    if candidates.is_empty() {
        return Err(CalorieError::TemplateNotFound(query.to_string()));
    }

    if candidates.len() == 1 {
        let name = &candidates[0].name;
        let confirm = prompt_yes_no(&format!("Did you mean '{}'?", name), true)?;
        return Ok(confirm.then(|| name.clone()));
    }

    let options: Vec<String> = candidates.iter().map(|t| t.name.clone()).collect();
    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options.get(selection).cloned())
}

pub fn parse_amount(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| CalorieError::InvalidInput(format!("'{}' is not a number", input.trim())))?;
    if !value.is_finite() {
        return Err(CalorieError::InvalidInput("Amount must be finite".to_string()));
    }
    Ok(value)
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CalorieError::InvalidInput(format!("'{}' is not a YYYY-MM-DD date", input.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::EntryPrefill;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 23).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 150 ").unwrap(), 150.0);
        assert_eq!(parse_amount("2.5").unwrap(), 2.5);
        assert!(parse_amount("lots").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_date("01/06/2024").is_err());
    }

    #[test]
    fn test_actions_without_ratio() {
        let form = AddEntryForm::initialize_on(EntryPrefill::default(), today());
        let actions = available_actions(&form);
        assert!(actions.contains(&FormAction::SetCalories));
        assert!(!actions.contains(&FormAction::ToggleAutoCalculate));
        assert!(!actions.contains(&FormAction::Submit));
        assert_eq!(actions.last(), Some(&FormAction::Cancel));
    }

    #[test]
    fn test_actions_in_auto_mode() {
        let prefill = EntryPrefill::new(Some("Apple".into()), Some(100.0), Some(52.0), Some(0.52));
        let form = AddEntryForm::initialize_on(prefill, today());
        let actions = available_actions(&form);
        assert!(!actions.contains(&FormAction::SetCalories));
        assert!(actions.contains(&FormAction::ToggleAutoCalculate));
        assert!(actions.contains(&FormAction::Submit));
    }

    #[test]
    fn test_terminal_navigation_records_dismiss() {
        let mut nav = TerminalNavigation::new();
        assert!(!nav.is_dismissed());
        nav.dismiss();
        assert!(nav.is_dismissed());
    }
}

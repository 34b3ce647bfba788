use chrono::NaiveDate;

use crate::form::AddEntryForm;
use crate::models::{FoodEntry, FoodTemplate};
use crate::state::DailyTotal;

/// One-line summary of each form field.
pub fn form_lines(form: &AddEntryForm) -> Vec<String> {
    let draft = form.draft();
    let name = if draft.name().is_empty() {
        "(empty)"
    } else {
        draft.name()
    };

    let mut calories_line = format!("Calories: {}", draft.calories() as i64);
    if form.shows_manual_badge() {
        calories_line.push_str("  (Manual)");
    } else if form.auto_calculate_enabled() {
        calories_line.push_str("  (Auto)");
    }

    vec![
        format!("Food name: {}", name),
        format!("Grams: {}", draft.grams() as i64),
        calories_line,
        format!("Date: {}", draft.date()),
    ]
}

/// Print the current state of the add-entry form.
pub fn display_form(form: &AddEntryForm) {
    println!();
    println!("=== Add Food ===");
    for line in form_lines(form) {
        println!("  {}", line);
    }
    if !form.can_submit() {
        println!("  (Submit needs non-zero grams and calories)");
    }
    println!();
}

/// Display the entries logged on one date.
pub fn display_entries(entries: &[&FoodEntry], date: NaiveDate) {
    if entries.is_empty() {
        println!("No entries on {}.", date);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", date, entries.len());
    println!();

    let max_name_len = entries.iter().map(|e| e.name.len()).max().unwrap_or(10);

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>5.0} g | {:>5.0} cal",
            i + 1,
            entry.name,
            entry.grams,
            entry.calories,
            width = max_name_len
        );
    }

    let total_calories: f64 = entries.iter().map(|e| e.calories).sum();
    println!();
    println!("Total calories: {:.0}", total_calories);
    println!();
}

/// Display per-day totals.
pub fn display_daily_totals(totals: &[DailyTotal]) {
    if totals.is_empty() {
        println!("No entries logged yet.");
        return;
    }

    println!();
    println!("=== Daily Totals ===");
    println!();

    for total in totals {
        println!(
            "  {} - {:>3} items | {:>6.0} g | {:>6.0} cal",
            total.date, total.entries, total.grams, total.calories
        );
    }

    println!();
}

/// Display the saved templates with their ratios.
pub fn display_templates(templates: &[FoodTemplate]) {
    if templates.is_empty() {
        println!("Templates: (none)");
        return;
    }

    println!();
    println!("=== Templates ({} items) ===", templates.len());
    println!();

    for template in templates {
        let ratio = template
            .ratio()
            .map(|r| format!("{:.2} cal/g", r))
            .unwrap_or_else(|| "no ratio".to_string());
        println!(
            "  {} - {} g, {} cal ({})",
            template.name, template.grams, template.calories, ratio
        );
    }

    println!();
}

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calorie_tracker_rs::cli::{Cli, Command};
use calorie_tracker_rs::error::Result;
use calorie_tracker_rs::form::{AddEntryForm, EntryPrefill};
use calorie_tracker_rs::interface::{
    display_daily_totals, display_entries, display_templates, prompt_template_choice,
    run_add_form, TerminalNavigation,
};
use calorie_tracker_rs::models::FoodTemplate;
use calorie_tracker_rs::state::FoodJournal;

fn main() {
    // Logs go to stderr so they do not mix with the prompts
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("calorie_tracker_rs=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Add { template } => cmd_add(&cli.file, template.as_deref()),
        Command::List { date } => cmd_list(&cli.file, date),
        Command::Templates => cmd_templates(&cli.file),
        Command::SaveTemplate {
            name,
            grams,
            calories,
        } => cmd_save_template(&cli.file, name, grams, calories),
    }
}

/// Open the add-food form, optionally seeded from a template.
fn cmd_add(file_path: &str, template: Option<&str>) -> Result<()> {
    let mut journal = FoodJournal::open(file_path)?;

    let prefill = match template {
        Some(query) => match prompt_template_choice(&journal, query)? {
            Some(name) => EntryPrefill::from_template(journal.require_template(&name)?),
            None => EntryPrefill::default(),
        },
        None => EntryPrefill::default(),
    };

    let form = AddEntryForm::initialize(prefill);
    let mut nav = TerminalNavigation::new();

    match run_add_form(form, &mut journal, &mut nav)? {
        Some(entry) => println!(
            "Logged {} ({:.0} g, {:.0} cal) on {}.",
            entry.name, entry.grams, entry.calories, entry.date
        ),
        None => println!("Nothing logged."),
    }

    Ok(())
}

/// Show logged entries.
fn cmd_list(file_path: &str, date: Option<chrono::NaiveDate>) -> Result<()> {
    let journal = FoodJournal::open(file_path)?;

    match date {
        Some(date) => display_entries(&journal.entries_on(date), date),
        None => display_daily_totals(&journal.daily_totals()),
    }

    Ok(())
}

/// List templates.
fn cmd_templates(file_path: &str) -> Result<()> {
    let journal = FoodJournal::open(file_path)?;
    display_templates(journal.templates());
    Ok(())
}

/// Save a template.
fn cmd_save_template(file_path: &str, name: String, grams: f64, calories: f64) -> Result<()> {
    let mut journal = FoodJournal::open(file_path)?;
    let template = FoodTemplate::new(name, grams, calories);
    let label = template.name.clone();

    journal.add_template(template)?;
    println!("Template '{}' saved.", label);

    Ok(())
}

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Calorie tracker — log what you eat, with templates that auto-calculate calories.
#[derive(Parser, Debug)]
#[command(name = "calorie_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food journal JSON file.
    #[arg(short, long, default_value = "food_journal.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the add-food form.
    Add {
        /// Pre-fill the form from a saved template.
        #[arg(short, long)]
        template: Option<String>,
    },

    /// Show entries for a date, or daily totals when no date is given.
    List {
        /// Date to show (YYYY-MM-DD).
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List saved food templates.
    Templates,

    /// Save a food template whose calories-per-gram ratio seeds auto-calculate.
    SaveTemplate {
        /// Template name.
        #[arg(long)]
        name: String,

        /// Reference portion in grams.
        #[arg(long)]
        grams: f64,

        /// Calories in the reference portion.
        #[arg(long)]
        calories: f64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Add { template: None }
    }
}

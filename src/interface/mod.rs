pub mod prompts;
pub mod render;

pub use prompts::{
    acknowledge, available_actions, prompt_template_choice, prompt_yes_no, run_add_form,
    FormAction, TerminalNavigation,
};
pub use render::{display_daily_totals, display_entries, display_form, display_templates};

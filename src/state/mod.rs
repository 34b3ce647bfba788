mod journal;
mod persistence;

pub use journal::{DailyTotal, FoodJournal};
pub use persistence::{load_journal, save_journal, JournalFile};

pub mod cli;
pub mod error;
pub mod form;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{CalorieError, Result};
pub use form::{AddEntryForm, EntryPrefill, NavigationHost, RecordStore};
pub use models::{FoodEntry, FoodTemplate};

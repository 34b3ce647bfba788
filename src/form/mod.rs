mod add_entry;
mod collaborators;
pub mod constants;
mod draft;

pub use add_entry::{AddEntryForm, FormAlert, FormStatus};
pub use collaborators::{NavigationHost, RecordStore};
pub use draft::{CalorieMode, EntryPrefill, FoodEntryDraft};

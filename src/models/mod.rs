mod entry;
mod template;

pub use entry::FoodEntry;
pub use template::FoodTemplate;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalorieError {
    #[error("Please enter a food name")]
    EmptyName,

    #[error("Submit is disabled (grams and calories must be non-zero and no alert may be pending)")]
    SubmitDisabled,

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CalorieError>;

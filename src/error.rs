use thiserror::Error;

use crate::models::Diet;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("No recipe found for diet: {0}")]
    RecipeNotFound(Diet),

    #[error("Unknown recipe: {name}{}", did_you_mean(.suggestion))]
    UnknownRecipe {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Inventory access failed: {0}")]
    InventoryAccess(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    #[error("Unknown diet: {0}")]
    UnknownDiet(String),

    #[error("Not enough {ingredient}: need {required}, have {available}")]
    InsufficientStock {
        ingredient: String,
        required: f64,
        available: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

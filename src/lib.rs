pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod recommender;
pub mod state;

pub use error::{PickerError, Result};
pub use models::{Diet, InventoryItem, Recipe};
pub use recommender::{calculate_readiness, RecipeController};

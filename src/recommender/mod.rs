pub mod constants;
pub mod controller;
pub mod readiness;

pub use constants::*;
pub use controller::{InventoryProvider, RankedRecipe, RecipeController, Recommendation};
pub use readiness::{
    calculate_readiness, is_makeable, shortfalls, LimitingIngredient, ReadinessScore,
    ReadinessScorer, Shortfall, StockLevels,
};

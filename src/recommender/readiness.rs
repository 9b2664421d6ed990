use std::collections::HashMap;

use tracing::warn;

use crate::models::{InventoryItem, Recipe};
use crate::recommender::constants::{EMPTY_RECIPE_READINESS, MAKEABLE_THRESHOLD};

/// How ready the kitchen is to cook a recipe: the minimum available/required
/// ratio over its ingredients. Not a probability; unbounded above.
pub type ReadinessScore = f64;

/// Quantities on hand, keyed by lowercase ingredient name.
///
/// Built once per inventory snapshot so every recipe in a request is scored
/// against the same stock.
#[derive(Debug, Clone, Default)]
pub struct StockLevels {
    levels: HashMap<String, f64>,
}

impl StockLevels {
    /// Index an inventory snapshot.
    ///
    /// Names are expected to be unique; on duplicates the last item wins.
    /// Negative quantities count as nothing on hand.
    pub fn from_items(items: &[InventoryItem]) -> Self {
        let mut levels = HashMap::with_capacity(items.len());
        for item in items {
            if levels.insert(item.key(), item.quantity.max(0.0)).is_some() {
                warn!(item = %item.name, "duplicate inventory item, keeping last quantity");
            }
        }
        Self { levels }
    }

    /// Quantity on hand for `name` (case-insensitive); 0 when absent.
    pub fn available(&self, name: &str) -> f64 {
        self.levels.get(&name.to_lowercase()).copied().unwrap_or(0.0)
    }
}

/// Calculate the readiness of `recipe` given current stock.
///
/// Limiting-ingredient rule: `min(available_i / required_i)`. Ingredients
/// required in zero quantity impose no limit, so a recipe with no positive
/// requirement scores [`EMPTY_RECIPE_READINESS`].
pub fn calculate_readiness(stock: &StockLevels, recipe: &Recipe) -> ReadinessScore {
    recipe
        .ingredients
        .iter()
        .filter(|(_, required)| **required > 0.0)
        .map(|(name, required)| stock.available(name) / required)
        .fold(EMPTY_RECIPE_READINESS, f64::min)
}

/// Whether a score means every ingredient is fully in stock.
#[inline]
pub fn is_makeable(score: ReadinessScore) -> bool {
    score >= MAKEABLE_THRESHOLD
}

/// An ingredient that is not stocked in the quantity a recipe needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortfall {
    pub ingredient: String,
    pub required: f64,
    pub available: f64,
}

impl Shortfall {
    /// Amount still missing.
    pub fn missing(&self) -> f64 {
        self.required - self.available
    }
}

/// Ingredients of `recipe` that are short, in ingredient order.
pub fn shortfalls(stock: &StockLevels, recipe: &Recipe) -> Vec<Shortfall> {
    recipe
        .ingredients
        .iter()
        .filter_map(|(name, &required)| {
            let available = stock.available(name);
            (available < required).then(|| Shortfall {
                ingredient: name.clone(),
                required,
                available,
            })
        })
        .collect()
}

/// Scores a recipe against a stock snapshot.
pub trait ReadinessScorer {
    fn score(&self, stock: &StockLevels, recipe: &Recipe) -> ReadinessScore;
}

/// Default scorer: [`calculate_readiness`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitingIngredient;

impl ReadinessScorer for LimitingIngredient {
    fn score(&self, stock: &StockLevels, recipe: &Recipe) -> ReadinessScore {
        calculate_readiness(stock, recipe)
    }
}

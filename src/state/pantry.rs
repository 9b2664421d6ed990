use std::collections::HashMap;

use tracing::debug;

use crate::error::{PickerError, Result};
use crate::models::{InventoryItem, Recipe};
use crate::recommender::InventoryProvider;

/// Manages stocked ingredients and their quantities.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    /// All items keyed by lowercase name.
    items: HashMap<String, InventoryItem>,
}

impl Pantry {
    /// Create a pantry from a list of items. Later duplicates replace earlier ones.
    pub fn new(items: Vec<InventoryItem>) -> Self {
        let mut map = HashMap::new();
        for item in items {
            map.insert(item.key(), item);
        }
        Self { items: map }
    }

    /// Get an item by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&InventoryItem> {
        self.items.get(&name.to_lowercase())
    }

    /// Quantity on hand; 0 for unknown items.
    pub fn quantity_of(&self, name: &str) -> f64 {
        self.get(name).map(|i| i.quantity).unwrap_or(0.0)
    }

    /// Check that every ingredient of `recipe` is stocked in full.
    pub fn can_cook(&self, recipe: &Recipe) -> bool {
        self.first_shortage(recipe).is_none()
    }

    /// Deduct every ingredient of `recipe`.
    ///
    /// Nothing is deducted unless the recipe is valid and all ingredients
    /// are available.
    pub fn cook(&mut self, recipe: &Recipe) -> Result<()> {
        recipe.validate()?;

        if let Some(err) = self.first_shortage(recipe) {
            return Err(err);
        }

        for (name, &required) in &recipe.ingredients {
            if let Some(item) = self.items.get_mut(&name.to_lowercase()) {
                item.quantity -= required;
            }
        }

        debug!(recipe = %recipe.name, "deducted ingredients from pantry");
        Ok(())
    }

    /// Add `quantity` of an item, creating it if needed.
    pub fn restock(&mut self, name: &str, quantity: f64) -> Result<()> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(PickerError::InvalidInput(format!(
                "cannot restock {} by {}",
                name, quantity
            )));
        }

        self.items
            .entry(name.to_lowercase())
            .or_insert_with(|| InventoryItem::new(name, 0.0))
            .quantity += quantity;
        Ok(())
    }

    /// Convert to a list of items sorted by name, for serialization.
    pub fn to_items(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> = self.items.values().cloned().collect();
        items.sort_by_key(|i| i.key());
        items
    }

    /// Count of items in the pantry.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the pantry has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn first_shortage(&self, recipe: &Recipe) -> Option<PickerError> {
        recipe.ingredients.iter().find_map(|(name, &required)| {
            let available = self.quantity_of(name);
            (available < required).then(|| PickerError::InsufficientStock {
                ingredient: name.clone(),
                required,
                available,
            })
        })
    }
}

impl InventoryProvider for Pantry {
    fn get_all(&self) -> Result<Vec<InventoryItem>> {
        Ok(self.to_items())
    }
}

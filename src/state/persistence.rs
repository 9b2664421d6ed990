use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PickerError, Result};
use crate::models::{InventoryItem, Recipe};
use crate::recommender::InventoryProvider;

/// Load and validate a recipe catalog from a JSON file.
///
/// Recipe names must be unique (case-insensitive). Catalog order is kept.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;

    let mut seen = HashSet::new();
    for recipe in &recipes {
        if !seen.insert(recipe.key()) {
            return Err(PickerError::InvalidRecipe(format!(
                "duplicate recipe '{}'",
                recipe.name
            )));
        }
    }

    debug!(count = recipes.len(), "loaded recipe catalog");
    Ok(recipes)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Load inventory items from a `.csv` (header `name,quantity`) or JSON file.
pub fn load_inventory<P: AsRef<Path>>(path: P) -> Result<Vec<InventoryItem>> {
    let path = path.as_ref();

    let items = if is_csv(path) {
        let mut rdr = csv::Reader::from_path(path)?;
        rdr.deserialize().collect::<std::result::Result<Vec<InventoryItem>, _>>()?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    Ok(items)
}

/// Save inventory items, in the format implied by the file extension.
pub fn save_inventory<P: AsRef<Path>>(path: P, items: &[InventoryItem]) -> Result<()> {
    let path = path.as_ref();

    if is_csv(path) {
        let mut wtr = csv::Writer::from_path(path)?;
        for item in items {
            wtr.serialize(item)?;
        }
        wtr.flush()?;
    } else {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(path, json)?;
    }

    Ok(())
}

/// Inventory backed by a file, re-read on every fetch.
#[derive(Debug, Clone)]
pub struct InventoryFile {
    path: PathBuf,
}

impl InventoryFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl InventoryProvider for InventoryFile {
    fn get_all(&self) -> Result<Vec<InventoryItem>> {
        load_inventory(&self.path)
    }
}

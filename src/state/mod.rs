mod catalog;
mod pantry;
mod persistence;

pub use catalog::find_recipe;
pub use pantry::Pantry;
pub use persistence::{load_inventory, load_recipes, save_inventory, InventoryFile};

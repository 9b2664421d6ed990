mod diet;
mod inventory;
mod recipe;

pub use diet::Diet;
pub use inventory::InventoryItem;
pub use recipe::Recipe;

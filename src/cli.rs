use clap::{Parser, Subcommand};

use crate::models::Diet;

/// RecipePicker — recommends a recipe from what is in the pantry.
#[derive(Parser, Debug)]
#[command(name = "recipe_picker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, global = true, default_value = "recipes.json")]
    pub recipes: String,

    /// Path to the inventory file (.json or .csv).
    #[arg(short, long, global = true, default_value = "inventory.json")]
    pub inventory: String,

    /// Seed for "take a chance" picks.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend a recipe for a diet.
    Pick {
        /// Diet to pick for; prompts when omitted.
        #[arg(short, long, value_enum)]
        diet: Option<Diet>,

        /// Pick at random among matching recipes instead of the most ready.
        #[arg(long)]
        chance: bool,
    },

    /// List every recipe for a diet by readiness.
    Rank {
        /// Diet to rank; prompts when omitted.
        #[arg(short, long, value_enum)]
        diet: Option<Diet>,
    },

    /// Deduct a recipe's ingredients from the inventory.
    Cook {
        /// Recipe name (case-insensitive).
        recipe: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Pick {
            diet: None,
            chance: false,
        }
    }
}

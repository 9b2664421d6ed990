use std::path::Path;

use clap::Parser;

use recipe_picker_rs::cli::{Cli, Command};
use recipe_picker_rs::error::Result;
use recipe_picker_rs::interface::{
    display_ranking, display_recommendation, prompt_diet, prompt_yes_no,
};
use recipe_picker_rs::logging::init_logging;
use recipe_picker_rs::models::{Diet, Recipe};
use recipe_picker_rs::recommender::RecipeController;
use recipe_picker_rs::state::{
    find_recipe, load_inventory, load_recipes, save_inventory, InventoryFile, Pantry,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Pick { diet, chance } => {
            cmd_pick(&cli.recipes, &cli.inventory, diet, chance, cli.seed)
        }
        Command::Rank { diet } => cmd_rank(&cli.recipes, &cli.inventory, diet),
        Command::Cook { recipe } => cmd_cook(&cli.recipes, &cli.inventory, &recipe),
    }
}

fn resolve_diet(diet: Option<Diet>) -> Result<Diet> {
    match diet {
        Some(d) => Ok(d),
        None => prompt_diet(),
    }
}

/// Recommend a recipe and optionally cook it.
fn cmd_pick(
    recipes_path: &str,
    inventory_path: &str,
    diet: Option<Diet>,
    chance: bool,
    seed: Option<u64>,
) -> Result<()> {
    let recipes = load_recipes(recipes_path)?;
    println!("Loaded {} recipes", recipes.len());

    let diet = resolve_diet(diet)?;

    let controller = RecipeController::new(InventoryFile::new(inventory_path), recipes);
    let mut controller = match seed {
        Some(seed) => controller.with_seed(seed),
        None => controller,
    };

    let rec = controller.recommend(diet, !chance)?;
    display_recommendation(&rec);

    if !rec.is_makeable() {
        return Ok(());
    }

    let chosen: Recipe = rec.recipe.clone();
    if prompt_yes_no(&format!("Cook '{}' now?", chosen.name), false)? {
        cook_and_save(inventory_path, &chosen)?;
    }

    Ok(())
}

/// Show all recipes for a diet by readiness.
fn cmd_rank(recipes_path: &str, inventory_path: &str, diet: Option<Diet>) -> Result<()> {
    let recipes = load_recipes(recipes_path)?;
    let diet = resolve_diet(diet)?;

    let controller = RecipeController::new(InventoryFile::new(inventory_path), recipes);
    let ranked = controller.rank(diet)?;

    display_ranking(&ranked, &format!("Recipes for {}", diet));
    Ok(())
}

/// Deduct a named recipe's ingredients from the inventory.
fn cmd_cook(recipes_path: &str, inventory_path: &str, name: &str) -> Result<()> {
    let recipes = load_recipes(recipes_path)?;
    let recipe = find_recipe(&recipes, name)?;
    cook_and_save(inventory_path, recipe)
}

fn cook_and_save(inventory_path: &str, recipe: &Recipe) -> Result<()> {
    let path = Path::new(inventory_path);
    let mut pantry = Pantry::new(load_inventory(path)?);

    pantry.cook(recipe)?;
    save_inventory(path, &pantry.to_items())?;

    println!("Cooked '{}'. Inventory saved.", recipe.name);
    Ok(())
}

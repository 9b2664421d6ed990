use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::SeedableRng;

use recipe_picker_rs::error::{PickerError, Result};
use recipe_picker_rs::models::{Diet, InventoryItem, Recipe};
use recipe_picker_rs::recommender::{
    InventoryProvider, ReadinessScore, ReadinessScorer, RecipeController, StockLevels,
};
use recipe_picker_rs::state::Pantry;

/// Inventory that counts how often it is fetched.
struct CountingInventory {
    items: Vec<InventoryItem>,
    calls: Cell<usize>,
}

impl CountingInventory {
    fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            items,
            calls: Cell::new(0),
        }
    }
}

impl InventoryProvider for CountingInventory {
    fn get_all(&self) -> Result<Vec<InventoryItem>> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.items.clone())
    }
}

struct FailingInventory;

impl InventoryProvider for FailingInventory {
    fn get_all(&self) -> Result<Vec<InventoryItem>> {
        Err(PickerError::InventoryAccess(Box::new(std::io::Error::other(
            "connection refused",
        ))))
    }
}

/// Returns pre-set scores in call order.
struct ScriptedScorer {
    scores: RefCell<VecDeque<ReadinessScore>>,
}

impl ScriptedScorer {
    fn new(scores: &[ReadinessScore]) -> Self {
        Self {
            scores: RefCell::new(scores.iter().copied().collect()),
        }
    }
}

impl ReadinessScorer for ScriptedScorer {
    fn score(&self, _stock: &StockLevels, _recipe: &Recipe) -> ReadinessScore {
        self.scores.borrow_mut().pop_front().unwrap_or(0.0)
    }
}

fn scenario_inventory() -> Vec<InventoryItem> {
    vec![InventoryItem::new("item1", 5.0), InventoryItem::new("item2", 3.0)]
}

fn scenario_recipes(diet: Diet) -> Vec<Recipe> {
    vec![
        Recipe::new("recipe1", &[diet], [("item1", 1.0), ("item2", 2.0)]),
        Recipe::new("recipe2", &[diet], [("item1", 5.0), ("item2", 3.0)]),
    ]
}

#[test]
fn test_take_best_with_scripted_scores() {
    for diet in Diet::ALL {
        let inventory = CountingInventory::new(scenario_inventory());
        let mut controller = RecipeController::new(&inventory, scenario_recipes(diet))
            .with_scorer(ScriptedScorer::new(&[0.5, 1.0]));

        let result = controller.get_recipe(diet, true).unwrap();

        assert_eq!(result.name, "recipe2", "diet {}", diet);
        assert_eq!(inventory.calls.get(), 1);
    }
}

#[test]
fn test_take_chance_returns_eligible() {
    for diet in Diet::ALL {
        let inventory = CountingInventory::new(scenario_inventory());
        let mut controller = RecipeController::new(&inventory, scenario_recipes(diet))
            .with_scorer(ScriptedScorer::new(&[0.5, 1.0]))
            .with_seed(7);

        let result = controller.get_recipe(diet, false).unwrap();

        assert!(["recipe1", "recipe2"].contains(&result.name.as_str()));
        assert_eq!(inventory.calls.get(), 1);
    }
}

#[test]
fn test_take_best_with_real_scores() {
    let mut controller =
        RecipeController::new(Pantry::new(scenario_inventory()), scenario_recipes(Diet::Normal));

    // recipe1 scores 1.5, recipe2 scores 1.0
    let result = controller.get_recipe(Diet::Normal, true).unwrap();
    assert_eq!(result.name, "recipe1");
}

#[test]
fn test_tie_goes_to_first_in_catalog() {
    let recipes = vec![
        Recipe::new("low", &[Diet::Vegan], [("x", 1.0)]),
        Recipe::new("first best", &[Diet::Vegan], [("x", 1.0)]),
        Recipe::new("second best", &[Diet::Vegan], [("x", 1.0)]),
    ];
    let inventory = CountingInventory::new(vec![]);
    let mut controller = RecipeController::new(&inventory, recipes)
        .with_scorer(ScriptedScorer::new(&[0.2, 3.0, 3.0]));

    let result = controller.get_recipe(Diet::Vegan, true).unwrap();
    assert_eq!(result.name, "first best");
}

#[test]
fn test_only_matching_diet_is_considered() {
    let recipes = vec![
        Recipe::new("burger", &[Diet::Normal], [("beef", 1.0)]),
        Recipe::new("salad", &[Diet::Vegan, Diet::Vegetarian], [("lettuce", 5.0)]),
    ];
    let inventory = CountingInventory::new(vec![InventoryItem::new("beef", 10.0)]);
    let mut controller = RecipeController::new(&inventory, recipes);

    // burger is far more ready, but not vegan
    let result = controller.get_recipe(Diet::Vegan, true).unwrap();
    assert_eq!(result.name, "salad");
}

#[test]
fn test_not_found_for_unmatched_diet() {
    let inventory = CountingInventory::new(scenario_inventory());
    let mut controller = RecipeController::new(&inventory, scenario_recipes(Diet::Normal));

    for take_best in [true, false] {
        let err = controller.get_recipe(Diet::Vegan, take_best).unwrap_err();
        assert!(matches!(err, PickerError::RecipeNotFound(Diet::Vegan)));
    }
    // Fetched once per call even when nothing matches
    assert_eq!(inventory.calls.get(), 2);
}

#[test]
fn test_inventory_fetched_once_per_call() {
    let recipes: Vec<Recipe> = (0..25)
        .map(|i| {
            let mut r = Recipe::new("r", &[Diet::Vegetarian], [("item1", 1.0)]);
            r.name = format!("recipe {}", i);
            r
        })
        .collect();
    let inventory = CountingInventory::new(scenario_inventory());
    let mut controller = RecipeController::new(&inventory, recipes).with_seed(3);

    controller.get_recipe(Diet::Vegetarian, true).unwrap();
    assert_eq!(inventory.calls.get(), 1);
    controller.get_recipe(Diet::Vegetarian, false).unwrap();
    assert_eq!(inventory.calls.get(), 2);
    controller.rank(Diet::Vegetarian).unwrap();
    assert_eq!(inventory.calls.get(), 3);
}

#[test]
fn test_inventory_error_propagates() {
    let mut controller = RecipeController::new(FailingInventory, scenario_recipes(Diet::Normal));

    let err = controller.get_recipe(Diet::Normal, true).unwrap_err();
    assert!(matches!(err, PickerError::InventoryAccess(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn test_take_chance_reaches_every_eligible_recipe() {
    let recipes = vec![
        Recipe::new("a", &[Diet::Vegetarian], [("x", 1.0)]),
        Recipe::new("meat", &[Diet::Normal], [("x", 1.0)]),
        Recipe::new("b", &[Diet::Vegetarian], [("x", 100.0)]),
        Recipe::new("c", &[Diet::Vegetarian], [("y", 1.0)]),
    ];
    let inventory = CountingInventory::new(vec![InventoryItem::new("x", 1.0)]);
    let mut controller =
        RecipeController::new(&inventory, recipes).with_rng(StdRng::seed_from_u64(42));

    let mut seen = HashSet::new();
    for _ in 0..200 {
        let recipe = controller.get_recipe(Diet::Vegetarian, false).unwrap();
        seen.insert(recipe.name.clone());
    }

    let expected: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(seen, expected);
    assert_eq!(inventory.calls.get(), 200);
}

#[test]
fn test_take_chance_reproducible_with_seed() {
    let recipes: Vec<Recipe> = ["a", "b", "c", "d"]
        .iter()
        .map(|n| {
            let mut r = Recipe::new("r", &[Diet::Normal], [("x", 1.0)]);
            r.name = n.to_string();
            r
        })
        .collect();

    let picks = |seed: u64| -> Vec<String> {
        let mut controller =
            RecipeController::new(Pantry::default(), recipes.clone()).with_seed(seed);
        (0..10)
            .map(|_| controller.get_recipe(Diet::Normal, false).unwrap().name.clone())
            .collect()
    };

    assert_eq!(picks(99), picks(99));
}

#[test]
fn test_returns_recipe_unmodified() {
    let recipes = scenario_recipes(Diet::Vegan);
    let expected = recipes[1].clone();
    let mut controller = RecipeController::new(Pantry::new(vec![
        InventoryItem::new("item1", 1.0),
        InventoryItem::new("item2", 100.0),
    ]), recipes);

    // recipe1: min(1/1, 100/2) = 1.0; recipe2: min(1/5, 100/3) = 0.2
    let result = controller.get_recipe(Diet::Vegan, true).unwrap();
    assert_eq!(result.name, "recipe1");

    controller.set_recipes(vec![expected.clone()]);
    let result = controller.get_recipe(Diet::Vegan, true).unwrap();
    assert_eq!(*result, expected);
}

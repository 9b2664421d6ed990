use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::{PickerError, Result};
use crate::models::{Diet, InventoryItem, Recipe};
use crate::recommender::readiness::{
    is_makeable, shortfalls, LimitingIngredient, ReadinessScore, ReadinessScorer, Shortfall,
    StockLevels,
};

/// Source of the current inventory snapshot.
pub trait InventoryProvider {
    /// Fetch every stocked item with its quantity.
    fn get_all(&self) -> Result<Vec<InventoryItem>>;
}

impl<T: InventoryProvider + ?Sized> InventoryProvider for &T {
    fn get_all(&self) -> Result<Vec<InventoryItem>> {
        (**self).get_all()
    }
}

/// A recipe paired with its readiness score.
#[derive(Debug, Clone, Copy)]
pub struct RankedRecipe<'a> {
    pub recipe: &'a Recipe,
    pub readiness: ReadinessScore,
}

/// The chosen recipe together with what stands between it and the stove.
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub recipe: &'a Recipe,
    pub readiness: ReadinessScore,
    pub shortfalls: Vec<Shortfall>,
}

impl Recommendation<'_> {
    /// Every ingredient is in stock.
    pub fn is_makeable(&self) -> bool {
        is_makeable(self.readiness)
    }
}

/// Picks recipes from an in-memory catalog based on what is in stock.
///
/// Every call fetches one inventory snapshot and scores each candidate
/// against it. The catalog is only read while scoring.
pub struct RecipeController<I, S = LimitingIngredient, R = StdRng> {
    inventory: I,
    recipes: Vec<Recipe>,
    scorer: S,
    rng: R,
}

impl<I: InventoryProvider> RecipeController<I> {
    /// Create a controller with the default scorer and an entropy-seeded RNG.
    pub fn new(inventory: I, recipes: Vec<Recipe>) -> Self {
        Self {
            inventory,
            recipes,
            scorer: LimitingIngredient,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<I, S> RecipeController<I, S, StdRng> {
    /// Reseed the RNG for reproducible "take a chance" picks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl<I, S, R> RecipeController<I, S, R>
where
    I: InventoryProvider,
    S: ReadinessScorer,
    R: Rng,
{
    /// Replace the scorer.
    pub fn with_scorer<T: ReadinessScorer>(self, scorer: T) -> RecipeController<I, T, R> {
        RecipeController {
            inventory: self.inventory,
            recipes: self.recipes,
            scorer,
            rng: self.rng,
        }
    }

    /// Replace the random source.
    pub fn with_rng<T: Rng>(self, rng: T) -> RecipeController<I, S, T> {
        RecipeController {
            inventory: self.inventory,
            recipes: self.recipes,
            scorer: self.scorer,
            rng,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
    }

    /// Pick a recipe for `diet`.
    ///
    /// With `take_best` the highest readiness wins, ties going to the recipe
    /// listed first in the catalog. Otherwise every recipe tagged with `diet`
    /// is equally likely, regardless of score.
    pub fn get_recipe(&mut self, diet: Diet, take_best: bool) -> Result<&Recipe> {
        Ok(self.recommend(diet, take_best)?.recipe)
    }

    /// Same selection as [`get_recipe`](Self::get_recipe), with the score and
    /// missing ingredients of the pick.
    pub fn recommend(&mut self, diet: Diet, take_best: bool) -> Result<Recommendation<'_>> {
        let items = self.inventory.get_all()?;
        let stock = StockLevels::from_items(&items);
        let candidates = score_eligible(&self.recipes, &self.scorer, &stock, diet)?;

        let picked = if take_best {
            best_of(&candidates)
        } else {
            candidates.choose(&mut self.rng).copied()
        };
        let chosen = picked.ok_or(PickerError::RecipeNotFound(diet))?;

        info!(
            recipe = %chosen.recipe.name,
            readiness = chosen.readiness,
            %diet,
            take_best,
            candidates = candidates.len(),
            "selected recipe"
        );

        Ok(Recommendation {
            recipe: chosen.recipe,
            readiness: chosen.readiness,
            shortfalls: shortfalls(&stock, chosen.recipe),
        })
    }

    /// Every recipe for `diet` with its score, best first.
    ///
    /// Equal scores keep catalog order; NaN scores go last.
    pub fn rank(&self, diet: Diet) -> Result<Vec<RankedRecipe<'_>>> {
        let items = self.inventory.get_all()?;
        let stock = StockLevels::from_items(&items);
        let mut ranked = score_eligible(&self.recipes, &self.scorer, &stock, diet)?;

        ranked.sort_by(|a, b| rank_order(a.readiness, b.readiness));

        Ok(ranked)
    }
}

/// Score every recipe tagged with `diet`, in catalog order.
fn score_eligible<'a, S: ReadinessScorer>(
    recipes: &'a [Recipe],
    scorer: &S,
    stock: &StockLevels,
    diet: Diet,
) -> Result<Vec<RankedRecipe<'a>>> {
    let candidates: Vec<RankedRecipe<'a>> = recipes
        .iter()
        .filter(|r| r.is_for(diet))
        .map(|recipe| {
            let readiness = scorer.score(stock, recipe);
            debug!(recipe = %recipe.name, readiness, "scored recipe");
            RankedRecipe { recipe, readiness }
        })
        .collect();

    if candidates.is_empty() {
        return Err(PickerError::RecipeNotFound(diet));
    }

    Ok(candidates)
}

/// First candidate with the strictly highest score. NaN never wins.
fn best_of<'a>(candidates: &[RankedRecipe<'a>]) -> Option<RankedRecipe<'a>> {
    candidates.iter().copied().fold(None, |best, c| match best {
        Some(b) if !beats(c.readiness, b.readiness) => Some(b),
        _ => Some(c),
    })
}

fn beats(a: ReadinessScore, b: ReadinessScore) -> bool {
    a > b || (b.is_nan() && !a.is_nan())
}

/// Descending by score with NaN last, consistent with [`best_of`].
fn rank_order(a: ReadinessScore, b: ReadinessScore) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

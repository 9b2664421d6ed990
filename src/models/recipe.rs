use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};
use crate::models::Diet;

/// A recipe with its diet tags and required ingredient quantities.
///
/// Deserialization is validated: see [`Recipe::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecipe")]
pub struct Recipe {
    pub name: String,
    pub diets: BTreeSet<Diet>,
    pub ingredients: BTreeMap<String, f64>,
}

/// Recipe as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawRecipe {
    name: Option<String>,
    diets: Option<Vec<String>>,
    ingredients: Option<BTreeMap<String, f64>>,
}

impl TryFrom<RawRecipe> for Recipe {
    type Error = PickerError;

    fn try_from(raw: RawRecipe) -> Result<Self> {
        let name = raw
            .name
            .ok_or_else(|| PickerError::InvalidRecipe("missing 'name'".to_string()))?;
        let diets = raw
            .diets
            .ok_or_else(|| PickerError::InvalidRecipe(format!("{}: missing 'diets'", name)))?;
        let ingredients = raw.ingredients.ok_or_else(|| {
            PickerError::InvalidRecipe(format!("{}: missing 'ingredients'", name))
        })?;

        let diets = diets
            .iter()
            .map(|tag| {
                tag.parse::<Diet>().map_err(|_| {
                    PickerError::InvalidRecipe(format!("{}: unknown diet tag '{}'", name, tag))
                })
            })
            .collect::<Result<BTreeSet<Diet>>>()?;

        let recipe = Recipe {
            name,
            diets,
            ingredients,
        };
        recipe.validate()?;
        Ok(recipe)
    }
}

impl Recipe {
    pub fn new<N, K, I>(name: N, diets: &[Diet], ingredients: I) -> Self
    where
        N: Into<String>,
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            name: name.into(),
            diets: diets.iter().copied().collect(),
            ingredients: ingredients
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        }
    }

    /// Whether the recipe is tagged with `diet`.
    #[inline]
    pub fn is_for(&self, diet: Diet) -> bool {
        self.diets.contains(&diet)
    }

    /// Non-empty name, ingredient names unique ignoring case, and every
    /// required quantity finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PickerError::InvalidRecipe("empty recipe name".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.ingredients.len());
        for (ingredient, &required) in &self.ingredients {
            if !seen.insert(ingredient.to_lowercase()) {
                return Err(PickerError::InvalidRecipe(format!(
                    "{}: ingredient '{}' listed more than once",
                    self.name, ingredient
                )));
            }

            if !required.is_finite() || required < 0.0 {
                return Err(PickerError::InvalidRecipe(format!(
                    "{}: invalid quantity {} for '{}'",
                    self.name, required, ingredient
                )));
            }
        }

        Ok(())
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_valid() {
        let json = r#"{"name": "Omelette", "diets": ["normal", "vegetarian"], "ingredients": {"egg": 3, "butter": 0.5}}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.name, "Omelette");
        assert!(recipe.is_for(Diet::Vegetarian));
        assert!(!recipe.is_for(Diet::Vegan));
        assert_eq!(recipe.ingredients["egg"], 3.0);
    }

    #[test]
    fn test_missing_ingredients_is_rejected() {
        let json = r#"{"name": "Air", "diets": ["vegan"]}"#;
        let err = serde_json::from_str::<Recipe>(json).unwrap_err();
        assert!(err.to_string().contains("missing 'ingredients'"));
    }

    #[test]
    fn test_missing_diets_is_rejected() {
        let json = r#"{"name": "Toast", "ingredients": {"bread": 1}}"#;
        let err = serde_json::from_str::<Recipe>(json).unwrap_err();
        assert!(err.to_string().contains("missing 'diets'"));
    }

    #[test]
    fn test_unknown_diet_tag_is_rejected() {
        let json = r#"{"name": "Steak", "diets": ["carnivore"], "ingredients": {"beef": 1}}"#;
        let err = serde_json::from_str::<Recipe>(json).unwrap_err();
        assert!(err.to_string().contains("carnivore"));
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let recipe = Recipe::new("Bad", &[Diet::Normal], [("salt", -1.0)]);
        assert!(matches!(
            recipe.validate(),
            Err(PickerError::InvalidRecipe(_))
        ));
    }

    #[test]
    fn test_case_duplicate_ingredients_rejected() {
        let json = r#"{"name": "Omelette", "diets": ["normal"], "ingredients": {"Egg": 2, "egg": 2}}"#;
        let err = serde_json::from_str::<Recipe>(json).unwrap_err();
        assert!(err.to_string().contains("listed more than once"));
    }

    #[test]
    fn test_new_accepts_owned_names() {
        let name = String::from("flour");
        let recipe = Recipe::new("Bread", &[Diet::Vegan], [(name, 500.0)]);
        assert_eq!(recipe.ingredients["flour"], 500.0);
    }

    #[test]
    fn test_serialize_uses_diet_tags() {
        let recipe = Recipe::new("Salad", &[Diet::Vegan], [("lettuce", 1.0)]);
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["diets"], serde_json::json!(["vegan"]));
    }
}

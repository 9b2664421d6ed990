use strsim::jaro_winkler;

use crate::error::{PickerError, Result};
use crate::models::Recipe;
use crate::recommender::SUGGESTION_SIMILARITY;

/// Find a recipe by name (case-insensitive).
///
/// On a miss, the error carries the closest name when it is similar enough.
pub fn find_recipe<'a>(recipes: &'a [Recipe], name: &str) -> Result<&'a Recipe> {
    let wanted = name.trim().to_lowercase();

    if let Some(recipe) = recipes.iter().find(|r| r.key() == wanted) {
        return Ok(recipe);
    }

    let suggestion = recipes
        .iter()
        .map(|r| (r, jaro_winkler(&r.key(), &wanted)))
        .filter(|(_, score)| *score > SUGGESTION_SIMILARITY)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(r, _)| r.name.clone());

    Err(PickerError::UnknownRecipe {
        name: name.to_string(),
        suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Diet;

    fn catalog() -> Vec<Recipe> {
        vec![
            Recipe::new("Pancakes", &[Diet::Vegetarian], [("flour", 2.0)]),
            Recipe::new("Lentil Soup", &[Diet::Vegan], [("lentils", 1.0)]),
        ]
    }

    #[test]
    fn test_find_exact_case_insensitive() {
        let recipes = catalog();
        assert_eq!(find_recipe(&recipes, "lentil soup").unwrap().name, "Lentil Soup");
    }

    #[test]
    fn test_find_suggests_close_match() {
        let recipes = catalog();
        let err = find_recipe(&recipes, "pancake").unwrap_err();
        match err {
            PickerError::UnknownRecipe { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("Pancakes"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_find_no_suggestion_for_unrelated() {
        let recipes = catalog();
        let err = find_recipe(&recipes, "xyz").unwrap_err();
        assert!(matches!(err, PickerError::UnknownRecipe { suggestion: None, .. }));
    }
}

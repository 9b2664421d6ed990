use crate::models::Recipe;
use crate::recommender::{is_makeable, RankedRecipe, ReadinessScore, Recommendation};

/// Format a readiness score for display.
pub fn format_readiness(score: ReadinessScore) -> String {
    if score.is_infinite() {
        "ready (nothing required)".to_string()
    } else {
        format!("{:.2}", score)
    }
}

/// Display a recommended recipe as a card.
pub fn display_recommendation(rec: &Recommendation<'_>) {
    let recipe = rec.recipe;

    println!();
    println!("=== {} ===", recipe.name);
    println!("Diets: {}", diet_list(recipe));
    println!(
        "Readiness: {}{}",
        format_readiness(rec.readiness),
        if rec.is_makeable() { "  [can cook now]" } else { "" }
    );
    println!();

    if recipe.ingredients.is_empty() {
        println!("No ingredients required.");
    } else {
        let width = recipe.ingredients.keys().map(|k| k.len()).max().unwrap_or(10);
        println!("Ingredients:");
        for (name, required) in &recipe.ingredients {
            println!("  {:<width$}  {:>8.2}", name, required, width = width);
        }
    }

    if !rec.shortfalls.is_empty() {
        println!();
        println!("Missing:");
        for short in &rec.shortfalls {
            println!(
                "  {} - need {:.2}, have {:.2} (short {:.2})",
                short.ingredient,
                short.required,
                short.available,
                short.missing()
            );
        }
    }

    println!();
}

/// Display every candidate for a diet with its readiness.
pub fn display_ranking(ranked: &[RankedRecipe<'_>], title: &str) {
    if ranked.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} recipes) ===", title, ranked.len());
    println!();

    let max_name_len = ranked.iter().map(|r| r.recipe.name.len()).max().unwrap_or(10);

    for (i, item) in ranked.iter().enumerate() {
        let tag = if is_makeable(item.readiness) { "  [can cook now]" } else { "" };
        println!(
            "{:>3}. {:<width$} - {}{}",
            i + 1,
            item.recipe.name,
            format_readiness(item.readiness),
            tag,
            width = max_name_len
        );
    }

    println!();
}

fn diet_list(recipe: &Recipe) -> String {
    recipe
        .diets
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Readiness of a recipe with no (or only zero-quantity) requirements.
///
/// The minimum over an empty set of ratios: nothing can limit it.
pub const EMPTY_RECIPE_READINESS: f64 = f64::INFINITY;

/// Readiness at or above which every ingredient is fully in stock.
pub const MAKEABLE_THRESHOLD: f64 = 1.0;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_SIMILARITY: f64 = 0.7;

pub mod prompts;
pub mod render;

pub use prompts::{prompt_diet, prompt_yes_no};
pub use render::{display_ranking, display_recommendation, format_readiness};

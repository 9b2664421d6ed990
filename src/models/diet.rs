use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::PickerError;

/// Dietary category a recipe can be tagged with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Normal,
    Vegetarian,
    Vegan,
}

impl Diet {
    /// Every diet, in menu order.
    pub const ALL: [Diet; 3] = [Diet::Normal, Diet::Vegetarian, Diet::Vegan];

    /// Lowercase tag as stored in recipe files.
    pub fn tag(&self) -> &'static str {
        match self {
            Diet::Normal => "normal",
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
        }
    }
}

impl Default for Diet {
    fn default() -> Self {
        Diet::Normal
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Diet {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Diet::ALL
            .into_iter()
            .find(|d| d.tag() == wanted)
            .ok_or_else(|| PickerError::UnknownDiet(s.to_string()))
    }
}

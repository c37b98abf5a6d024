//! Meal type selection.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::error::FridgeChefError;

/// The kind of dish the user wants the recipe for.
///
/// Exactly one meal type is active at any time. Defaults to [`MealType::MainMeal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum MealType {
    Salad,
    #[default]
    MainMeal,
    Appetizer,
}

impl MealType {
    /// All meal types in display order.
    pub const ALL: [Self; 3] = [Self::Salad, Self::MainMeal, Self::Appetizer];

    /// Human-readable label, also used verbatim in the recipe prompt.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Salad => "Salad",
            Self::MainMeal => "Main Meal",
            Self::Appetizer => "Appetizer",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealType {
    type Err = FridgeChefError;

    /// Parses a meal type case-insensitively.
    ///
    /// Accepts `salad`, `main`, `main meal`, `main-meal`, `main_meal` and
    /// `appetizer`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salad" => Ok(Self::Salad),
            "main" | "main meal" | "main-meal" | "main_meal" => Ok(Self::MainMeal),
            "appetizer" => Ok(Self::Appetizer),
            other => Err(FridgeChefError::Config(format!(
                "unknown meal type '{other}' (expected salad, main or appetizer)"
            ))),
        }
    }
}

impl TryFrom<String> for MealType {
    type Error = FridgeChefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

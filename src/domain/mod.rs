//! Domain layer for FridgeChef.
//!
//! This module contains the core domain types, independent of the terminal,
//! the HTTP client or the async runtime.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`generation`]: Tokens that fence stale background results
//! - [`ingredients`]: The normalized, deduplicated ingredient inventory
//! - [`meal`]: Meal type selection
//! - [`recipe`]: Recipe model and strict schema validation
//!
//! # Examples
//!
//! ```
//! use fridgechef::domain::{IngredientList, MealType};
//!
//! let mut fridge = IngredientList::new();
//! fridge.add("Eggs");
//! fridge.add("spinach");
//! assert_eq!(fridge.as_slice(), ["eggs", "spinach"]);
//! assert_eq!(MealType::default(), MealType::MainMeal);
//! ```

pub mod error;
pub mod generation;
pub mod ingredients;
pub mod meal;
pub mod recipe;

pub use error::{FridgeChefError, Result};
pub use generation::Generation;
pub use ingredients::IngredientList;
pub use meal::MealType;
pub use recipe::{Difficulty, InlineImage, Recipe, RecipeIngredient};

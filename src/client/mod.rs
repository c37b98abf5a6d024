//! Recipe generation client.
//!
//! Wraps the two outbound calls the application makes: one that turns an
//! ingredient list and meal type into a structured [`Recipe`], and one that
//! turns a recipe title into an inline image reference. Neither call retries,
//! caches, or rate limits.
//!
//! # Modules
//!
//! - [`gemini`]: Google Gemini implementation over `reqwest`
//! - [`prompt`]: Prompt text and response-schema construction

pub mod gemini;
pub mod prompt;

pub use gemini::{GeminiClient, GeminiConfig};

use crate::domain::{MealType, Recipe, Result};
use async_trait::async_trait;

/// The generation backend used by the background worker.
///
/// Text generation failures propagate to the caller. Image generation is
/// best-effort: implementations must absorb every failure and return `None`.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Requests a structured recipe for the given inventory and meal type.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FridgeChefError::Transport`] when the remote call fails
    /// and [`crate::FridgeChefError::ResponseFormat`] when the payload does not
    /// match the recipe schema.
    async fn request_recipe_text(&self, ingredients: &[String], meal_type: MealType) -> Result<Recipe>;

    /// Requests an illustrative image for a recipe.
    ///
    /// Returns a `data:` URL, or `None` when no image could be produced.
    async fn request_recipe_image(&self, title: &str, ingredients: &[String]) -> Option<String>;
}

//! Prompt and response-schema construction for the Gemini calls.

use crate::domain::recipe::Difficulty;
use crate::domain::MealType;
use serde_json::{json, Value as JsonValue};

/// Number of ingredients mentioned in the image prompt.
const IMAGE_PROMPT_INGREDIENTS: usize = 3;

/// Aspect ratio requested for recipe images.
pub const IMAGE_ASPECT_RATIO: &str = "16:9";

/// Builds the natural-language prompt for the recipe text call.
#[must_use]
pub fn recipe_prompt(ingredients: &[String], meal_type: MealType) -> String {
    format!(
        "Create a creative and delicious {meal_type} recipe using some or all of these ingredients: {}.\n\
         The recipe should be practical for a home cook. Provide a chef's tip at the end.",
        ingredients.join(", ")
    )
}

/// Builds the image prompt from the recipe title and the first few ingredients.
#[must_use]
pub fn image_prompt(title: &str, ingredients: &[String]) -> String {
    let featured: Vec<&str> = ingredients
        .iter()
        .take(IMAGE_PROMPT_INGREDIENTS)
        .map(String::as_str)
        .collect();

    format!(
        "A professional, high-end food photography shot of a gourmet dish called \"{title}\".\n\
         It features ingredients like {}.\n\
         The image should have cinematic lighting, elegant presentation on a dark, minimalist plate, \
         and a sophisticated noir atmosphere.\n\
         4k resolution, highly detailed textures.",
        featured.join(", ")
    )
}

/// The structured-output schema the text endpoint must follow.
///
/// Mirrors the fields of [`crate::domain::Recipe`]; everything except
/// `chefTip` is required.
#[must_use]
pub fn recipe_schema() -> JsonValue {
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(|d| d.label()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "estimatedTime": { "type": "STRING" },
            "difficulty": { "type": "STRING", "enum": difficulties },
            "ingredients": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "item": { "type": "STRING" },
                        "amount": { "type": "STRING" }
                    },
                    "required": ["item", "amount"]
                }
            },
            "instructions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "chefTip": { "type": "STRING" }
        },
        "required": ["title", "estimatedTime", "difficulty", "ingredients", "instructions"]
    })
}

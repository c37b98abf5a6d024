//! Recipe domain model and schema validation.
//!
//! A [`Recipe`] is produced exactly once, by parsing the JSON document returned
//! from the text-generation endpoint. Parsing is strict: the document must match
//! the recipe schema and every required field must carry a non-empty value,
//! otherwise a [`FridgeChefError::ResponseFormat`] is returned.
//!
//! The only later change a recipe ever sees is the attachment of its image
//! reference, via [`Recipe::with_image`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;
use std::fmt;

use super::error::{FridgeChefError, Result};

/// Difficulty rating for a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulty values, in schema order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeIngredient {
    pub item: String,
    pub amount: String,
}

/// A generated recipe.
///
/// Field names follow the wire schema (`estimatedTime`, `chefTip`). The
/// `image_url` is never part of the text payload; it is attached afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub estimated_time: String,
    pub difficulty: Difficulty,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub chef_tip: Option<String>,
    #[serde(skip)]
    pub image_url: Option<String>,
}

/// Decoded facts about an inline `data:` image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub byte_len: usize,
}

impl Recipe {
    /// Parses and validates a recipe from the text endpoint's JSON output.
    ///
    /// Markdown code fences around the document are tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`FridgeChefError::ResponseFormat`] if the text is not JSON, does
    /// not match the schema, or has an empty required value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fridgechef::domain::Recipe;
    ///
    /// let json = r#"{
    ///     "title": "Egg Fried Rice",
    ///     "estimatedTime": "20 minutes",
    ///     "difficulty": "Easy",
    ///     "ingredients": [{"item": "rice", "amount": "2 cups"}],
    ///     "instructions": ["Fry everything."]
    /// }"#;
    /// let recipe = Recipe::from_json(json)?;
    /// assert_eq!(recipe.title, "Egg Fried Rice");
    /// assert!(recipe.image_url.is_none());
    /// # Ok::<(), fridgechef::FridgeChefError>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let body = strip_code_fence(text);
        let recipe: Self = serde_json::from_str(body)
            .map_err(|e| FridgeChefError::ResponseFormat(e.to_string()))?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Checks the invariants the schema alone cannot express.
    fn validate(&self) -> Result<()> {
        fn require(value: &str, field: &str) -> Result<()> {
            if value.trim().is_empty() {
                Err(FridgeChefError::ResponseFormat(format!("`{field}` is empty")))
            } else {
                Ok(())
            }
        }

        require(&self.title, "title")?;
        require(&self.estimated_time, "estimatedTime")?;

        for (i, ingredient) in self.ingredients.iter().enumerate() {
            require(&ingredient.item, &format!("ingredients[{i}].item"))?;
            require(&ingredient.amount, &format!("ingredients[{i}].amount"))?;
        }

        if self.instructions.is_empty() {
            return Err(FridgeChefError::ResponseFormat(
                "`instructions` has no steps".to_string(),
            ));
        }
        for (i, step) in self.instructions.iter().enumerate() {
            require(step, &format!("instructions[{i}]"))?;
        }

        Ok(())
    }

    /// Returns a copy of this recipe carrying the given image reference.
    #[must_use]
    pub fn with_image(&self, image_url: Option<String>) -> Self {
        Self {
            image_url,
            ..self.clone()
        }
    }

    /// Decodes the attached `data:` image reference, if any.
    ///
    /// Returns `None` when there is no image or the reference is not a valid
    /// base64 data URL.
    #[must_use]
    pub fn inline_image(&self) -> Option<InlineImage> {
        self.image_url.as_deref().and_then(parse_data_url)
    }
}

/// Builds a `data:<mime>;base64,<data>` URL from an inline image payload.
///
/// The payload must already be base64; it is decoded once to make sure it is
/// well-formed and non-empty. Returns `None` otherwise.
#[must_use]
pub fn data_url(mime_type: &str, base64_data: &str) -> Option<String> {
    let decoded = STANDARD.decode(base64_data.trim()).ok()?;
    if decoded.is_empty() || mime_type.trim().is_empty() {
        return None;
    }
    Some(format!("data:{};base64,{}", mime_type.trim(), base64_data.trim()))
}

fn parse_data_url(url: &str) -> Option<InlineImage> {
    let rest = url.strip_prefix("data:")?;
    let (mime_type, data) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(data).ok()?;
    Some(InlineImage {
        mime_type: mime_type.to_string(),
        byte_len: bytes.len(),
    })
}

/// Removes a surrounding Markdown code fence (```` ```json ... ``` ````).
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    // Drop a language tag such as `json` on the opening line
    match inner.split_once('\n') {
        Some((tag, body)) if tag.chars().all(char::is_alphanumeric) => body.trim(),
        _ => inner.trim(),
    }
}

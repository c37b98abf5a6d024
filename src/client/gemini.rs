//! Google Gemini implementation of [`RecipeGenerator`].
//!
//! Both calls go through the `generateContent` REST method. The text call
//! constrains the model to JSON output with a response schema; the image call
//! asks an image-capable model for a single 16:9 picture returned inline as
//! base64.

use super::prompt::{self, IMAGE_ASPECT_RATIO};
use super::RecipeGenerator;
use crate::domain::recipe::data_url;
use crate::domain::{FridgeChefError, MealType, Recipe, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, instrument, warn};

/// Default REST base for the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for structured recipe text.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Default model for recipe images.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key, sent in the `x-goog-api-key` header.
    pub api_key: String,
    /// REST base URL, without a trailing `/models`.
    pub base_url: String,
    /// Model used for the recipe text call.
    pub text_model: String,
    /// Model used for the recipe image call.
    pub image_model: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl GeminiConfig {
    /// Creates a config with default endpoint, models and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Overrides the REST base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Gemini-backed recipe generator.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

// Request structures
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: &'static str,
}

// Response structures
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GeminiResponse {
    /// Parts of the first candidate, if any.
    fn first_parts(&self) -> &[PartResponse] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map_or(&[], |c| c.parts.as_slice())
    }
}

impl GeminiClient {
    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FridgeChefError::Config`] if the API key is blank or the HTTP
    /// client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(FridgeChefError::Config("Gemini API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FridgeChefError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Sends a `generateContent` request and decodes the response envelope.
    async fn generate_content(&self, model: &str, request: &GeminiRequest) -> Result<GeminiResponse> {
        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| FridgeChefError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map_or(body, |parsed| parsed.error.message);
            return Err(FridgeChefError::Transport(format!("API error {status}: {detail}")));
        }

        // a body cut off mid-read is a transport failure, not a bad payload
        let body = response
            .bytes()
            .await
            .map_err(|e| FridgeChefError::Transport(e.to_string()))?;
        serde_json::from_slice::<GeminiResponse>(&body)
            .map_err(|e| FridgeChefError::ResponseFormat(e.to_string()))
    }

    async fn try_request_image(&self, title: &str, ingredients: &[String]) -> Result<Option<String>> {
        let request = GeminiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: prompt::image_prompt(title, ingredients),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["IMAGE"]),
                image_config: Some(ImageConfig {
                    aspect_ratio: IMAGE_ASPECT_RATIO,
                }),
                ..GenerationConfig::default()
            }),
        };

        let response = self.generate_content(&self.config.image_model, &request).await?;

        Ok(response
            .first_parts()
            .iter()
            .filter_map(|part| part.inline_data.as_ref())
            .find_map(|inline| data_url(&inline.mime_type, &inline.data)))
    }
}

#[async_trait]
impl RecipeGenerator for GeminiClient {
    #[instrument(skip(self, ingredients), fields(model = %self.config.text_model, ingredient_count = ingredients.len(), meal_type = %meal_type))]
    async fn request_recipe_text(&self, ingredients: &[String], meal_type: MealType) -> Result<Recipe> {
        let request = GeminiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: prompt::recipe_prompt(ingredients, meal_type),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json"),
                response_schema: Some(prompt::recipe_schema()),
                ..GenerationConfig::default()
            }),
        };

        let response = self.generate_content(&self.config.text_model, &request).await?;

        let text: String = response
            .first_parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            return Err(FridgeChefError::ResponseFormat(
                "response contained no text".to_string(),
            ));
        }

        let recipe = Recipe::from_json(&text)?;
        debug!(title = %recipe.title, steps = recipe.instructions.len(), "recipe text generated");
        Ok(recipe)
    }

    #[instrument(skip(self, ingredients), fields(model = %self.config.image_model))]
    async fn request_recipe_image(&self, title: &str, ingredients: &[String]) -> Option<String> {
        match self.try_request_image(title, ingredients).await {
            Ok(Some(url)) => {
                debug!(url_len = url.len(), "recipe image generated");
                Some(url)
            }
            Ok(None) => {
                warn!("image response carried no inline image");
                None
            }
            Err(e) => {
                warn!(error = %e, "failed to generate recipe image");
                None
            }
        }
    }
}

//! Worker implementation for recipe generation requests.
//!
//! A [`RecipeWorker`] owns the shared generation backend and turns each
//! [`WorkerMessage`] into exactly one [`WorkerResponse`]. It never touches
//! application state; fencing stale results is the event loop's job.

use crate::client::RecipeGenerator;
use crate::domain::Result;
use crate::worker::{TraceContext, WorkerMessage, WorkerResponse};
use std::sync::Arc;
use tracing::Instrument;

/// Processes generation requests against a [`RecipeGenerator`].
#[derive(Clone)]
pub struct RecipeWorker {
    generator: Arc<dyn RecipeGenerator>,
}

impl std::fmt::Debug for RecipeWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeWorker").finish_non_exhaustive()
    }
}

impl RecipeWorker {
    pub fn new(generator: Arc<dyn RecipeGenerator>) -> Self {
        Self { generator }
    }

    /// Helper for turning a backend result into a response with consistent
    /// logging.
    fn handle_backend_result<T, F, E>(operation: &str, result: Result<T>, on_success: F, on_error: E) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
        E: FnOnce(String) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "backend operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "backend operation failed");
                on_error(e.user_message())
            }
        }
    }

    /// Handles the `GenerateRecipe` message.
    async fn handle_generate_recipe(
        &self,
        generation: crate::domain::Generation,
        ingredients: Vec<String>,
        meal_type: crate::domain::MealType,
    ) -> WorkerResponse {
        let result = self.generator.request_recipe_text(&ingredients, meal_type).await;

        Self::handle_backend_result(
            "generate recipe",
            result,
            |recipe| {
                tracing::debug!(
                    generation = %generation,
                    title = %recipe.title,
                    "recipe text ready"
                );
                WorkerResponse::RecipeGenerated {
                    generation,
                    recipe,
                    ingredients,
                }
            },
            |message| WorkerResponse::RecipeFailed { generation, message },
        )
    }

    /// Handles the `GenerateImage` message.
    ///
    /// Image generation is best-effort, so this always produces
    /// `ImageGenerated`.
    async fn handle_generate_image(
        &self,
        generation: crate::domain::Generation,
        title: String,
        ingredients: Vec<String>,
    ) -> WorkerResponse {
        let image_url = self.generator.request_recipe_image(&title, &ingredients).await;
        tracing::debug!(
            generation = %generation,
            has_image = image_url.is_some(),
            "recipe image finished"
        );
        WorkerResponse::ImageGenerated { generation, image_url }
    }

    /// Builds the span for a message, parented on the trace context it carries.
    ///
    /// The parent is set on the span rather than attached to the task's
    /// context, since a context guard cannot be held across an await point.
    fn message_span(message: &WorkerMessage) -> tracing::Span {
        let span = match message {
            WorkerMessage::GenerateRecipe { generation, meal_type, .. } => tracing::debug_span!(
                "worker_generate_recipe",
                generation = %generation,
                meal_type = %meal_type
            ),
            WorkerMessage::GenerateImage { generation, .. } => {
                tracing::debug_span!("worker_generate_image", generation = %generation)
            }
        };

        if let Some(parent) = message.trace_context().and_then(remote_parent_context) {
            use tracing_opentelemetry::OpenTelemetrySpanExt;
            span.set_parent(parent);
        }

        span
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// This is the main message handling entry point, dispatching to specific
    /// handlers based on the message variant inside a span linked to the
    /// sender's trace.
    pub async fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span = Self::message_span(&message);

        async move {
            match message {
                WorkerMessage::GenerateRecipe {
                    generation,
                    ingredients,
                    meal_type,
                    ..
                } => self.handle_generate_recipe(generation, ingredients, meal_type).await,

                WorkerMessage::GenerateImage {
                    generation,
                    title,
                    ingredients,
                    ..
                } => self.handle_generate_image(generation, title, ingredients).await,
            }
        }
        .instrument(span)
        .await
    }
}

/// Reconstructs the OpenTelemetry context described by a [`TraceContext`].
fn remote_parent_context(trace_context: &TraceContext) -> Option<opentelemetry::Context> {
    use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

    let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
    let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

    let span_context = SpanContext::new(
        trace_id,
        span_id,
        TraceFlags::SAMPLED,
        true,
        TraceState::default(),
    );

    Some(opentelemetry::Context::new().with_remote_span_context(span_context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FridgeChefError, Generation, MealType, Recipe};
    use async_trait::async_trait;

    struct CannedGenerator {
        text: std::result::Result<&'static str, FridgeChefError>,
        image: Option<&'static str>,
    }

    #[async_trait]
    impl RecipeGenerator for CannedGenerator {
        async fn request_recipe_text(&self, _: &[String], _: MealType) -> Result<Recipe> {
            match &self.text {
                Ok(json) => Recipe::from_json(json),
                Err(FridgeChefError::Transport(m)) => Err(FridgeChefError::Transport(m.clone())),
                Err(_) => Err(FridgeChefError::ResponseFormat("bad".to_string())),
            }
        }

        async fn request_recipe_image(&self, _: &str, _: &[String]) -> Option<String> {
            self.image.map(ToString::to_string)
        }
    }

    const TOAST: &str = r#"{
        "title": "Toast",
        "estimatedTime": "5 minutes",
        "difficulty": "Easy",
        "ingredients": [{"item": "bread", "amount": "1 slice"}],
        "instructions": ["Toast the bread."]
    }"#;

    fn worker(generator: CannedGenerator) -> RecipeWorker {
        RecipeWorker::new(Arc::new(generator))
    }

    #[tokio::test]
    async fn recipe_success_echoes_generation_and_snapshot() {
        let worker = worker(CannedGenerator { text: Ok(TOAST), image: None });
        let generation = Generation::default().next();
        let response = worker
            .handle_message(WorkerMessage::generate_recipe(
                generation,
                vec!["bread".to_string()],
                MealType::MainMeal,
            ))
            .await;

        match response {
            WorkerResponse::RecipeGenerated { generation: g, recipe, ingredients } => {
                assert_eq!(g, generation);
                assert_eq!(recipe.title, "Toast");
                assert_eq!(ingredients, ["bread"]);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failure_becomes_user_message() {
        let worker = worker(CannedGenerator {
            text: Err(FridgeChefError::Transport("quota exceeded".to_string())),
            image: None,
        });
        let response = worker
            .handle_message(WorkerMessage::generate_recipe(
                Generation::default(),
                vec!["bread".to_string()],
                MealType::Salad,
            ))
            .await;

        assert_eq!(
            response,
            WorkerResponse::RecipeFailed {
                generation: Generation::default(),
                message: "quota exceeded".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn format_failure_uses_unreadable_message() {
        let worker = worker(CannedGenerator {
            text: Err(FridgeChefError::ResponseFormat(String::new())),
            image: None,
        });
        let response = worker
            .handle_message(WorkerMessage::generate_recipe(
                Generation::default(),
                vec![],
                MealType::Salad,
            ))
            .await;

        assert_eq!(
            response,
            WorkerResponse::RecipeFailed {
                generation: Generation::default(),
                message: crate::domain::error::UNREADABLE_RECIPE_MESSAGE.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn missing_image_is_not_an_error() {
        let worker = worker(CannedGenerator { text: Ok(TOAST), image: None });
        let response = worker
            .handle_message(WorkerMessage::generate_image(
                Generation::default(),
                "Toast".to_string(),
                vec![],
            ))
            .await;

        assert_eq!(
            response,
            WorkerResponse::ImageGenerated {
                generation: Generation::default(),
                image_url: None,
            }
        );
    }

    #[test]
    fn malformed_trace_context_is_ignored() {
        let context = TraceContext {
            trace_id: "not-hex".to_string(),
            parent_span_id: "0000000000000001".to_string(),
        };
        assert!(remote_parent_context(&context).is_none());

        let context = TraceContext {
            trace_id: format!("{:032x}", 42),
            parent_span_id: format!("{:016x}", 7),
        };
        assert!(remote_parent_context(&context).is_some());
    }
}

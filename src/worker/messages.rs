//! Worker task message types.
//!
//! This module defines the request and response protocol between the event
//! loop and the background tasks that talk to the generation backend. It also
//! carries distributed tracing context so spans created inside a spawned task
//! link back to the event that triggered them.

use crate::domain::{Generation, MealType, Recipe};

/// Distributed tracing context for cross-task span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when handing work to a spawned task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled,
    /// which is always the case when no OpenTelemetry layer is installed.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id_str = format!("{:032x}", span_context.trace_id());
            let parent_span_id_str = format!("{:016x}", span_context.span_id());

            tracing::trace!(
                trace_id = %trace_id_str,
                parent_span_id = %parent_span_id_str,
                "capturing trace context"
            );

            Some(Self {
                trace_id: trace_id_str,
                parent_span_id: parent_span_id_str,
            })
        } else {
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    generate_recipe(GenerateRecipe { generation: Generation, ingredients: Vec<String>, meal_type: MealType }),
    generate_image(GenerateImage { generation: Generation, title: String, ingredients: Vec<String> }),
}

/// Messages sent from the event loop to a worker task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Request the structured recipe text.
    GenerateRecipe {
        /// Generation the request belongs to.
        generation: Generation,

        /// Ingredient snapshot taken when the request started.
        ingredients: Vec<String>,

        /// Meal type snapshot taken when the request started.
        meal_type: MealType,

        /// Trace context for linking spans across tasks.
        trace_context: Option<TraceContext>,
    },

    /// Request the recipe image.
    GenerateImage {
        /// Generation the request belongs to.
        generation: Generation,

        /// Title of the recipe the image illustrates.
        title: String,

        /// Ingredient snapshot the recipe was generated from.
        ingredients: Vec<String>,

        /// Trace context for linking spans across tasks.
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn generation(&self) -> Generation {
        match self {
            Self::GenerateRecipe { generation, .. } | Self::GenerateImage { generation, .. } => {
                *generation
            }
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::GenerateRecipe { trace_context, .. } | Self::GenerateImage { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Responses sent from a worker task back to the event loop.
///
/// Every response is tagged with the generation of the message that produced
/// it so the event loop can drop results that arrive after a reset or a newer
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// The recipe text was generated and validated.
    RecipeGenerated {
        generation: Generation,

        /// The parsed recipe, without an image.
        recipe: Recipe,

        /// Ingredient snapshot the recipe was generated from.
        ingredients: Vec<String>,
    },

    /// The recipe text could not be produced.
    RecipeFailed {
        generation: Generation,

        /// User-facing error message.
        message: String,
    },

    /// The image call finished. `image_url` is `None` when no image could be
    /// produced; this is not an error.
    ImageGenerated {
        generation: Generation,
        image_url: Option<String>,
    },
}

impl WorkerResponse {
    #[must_use]
    pub const fn generation(&self) -> Generation {
        match self {
            Self::RecipeGenerated { generation, .. }
            | Self::RecipeFailed { generation, .. }
            | Self::ImageGenerated { generation, .. } => *generation,
        }
    }
}

//! Request lifecycle state for the application.
//!
//! # State Machine
//!
//! ```text
//!            generate (non-empty)          recipe ok
//!   Idle ──────────────────────▶ GeneratingText ─────────▶ AwaitingImage
//!    ▲  ▲                           │                           │
//!    │  │ add ingredient            │ failure                   │ image finished
//!    │  └──────── Failed ◀──────────┘                           ▼
//!    │                                                        Ready
//!    └──────────────────────── reset (from any state) ──────────┘
//! ```
//!
//! Generating from an empty inventory moves straight to `Failed` without a
//! request.

use crate::domain::Recipe;

/// Where the current generation request stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing requested yet, or the last error was cleared.
    #[default]
    Idle,

    /// The recipe text request is in flight.
    GeneratingText,

    /// The recipe is known and shown; its image request is in flight.
    AwaitingImage(Recipe),

    /// The recipe and the image attempt are both complete. The recipe's
    /// `image_url` is `None` if no image could be produced.
    Ready(Recipe),

    /// The last attempt failed with the given user-facing message.
    Failed(String),
}

impl RequestState {
    /// Whether a request is currently running.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::GeneratingText)
    }

    /// The recipe being shown, if any.
    #[must_use]
    pub const fn recipe(&self) -> Option<&Recipe> {
        match self {
            Self::AwaitingImage(recipe) | Self::Ready(recipe) => Some(recipe),
            _ => None,
        }
    }

    /// The error message being shown, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::GeneratingText => "generating_text",
            Self::AwaitingImage(_) => "awaiting_image",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

//! Error types for FridgeChef.
//!
//! This module defines the centralized error type [`FridgeChefError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Image generation failures are deliberately absent from this taxonomy: the
//! generation client absorbs them and reports a missing image instead.

use thiserror::Error;

/// Message shown when a transport failure carries no usable description.
pub const KITCHEN_BUSY_MESSAGE: &str = "The kitchen is currently busy. Please try again.";

/// Message shown when the text endpoint returns something that is not a recipe.
pub const UNREADABLE_RECIPE_MESSAGE: &str =
    "Could not understand the chef's response. Please try again.";

/// The main error type for FridgeChef operations.
///
/// The first three variants cover the recipe generation flow and are turned into
/// user-facing banner text by [`FridgeChefError::user_message`]. The remaining
/// variants belong to the ambient layers (configuration, themes, I/O, worker).
///
/// # Examples
///
/// ```
/// use fridgechef::domain::FridgeChefError;
///
/// let err = FridgeChefError::Validation("Select your ingredients to begin.".to_string());
/// assert_eq!(err.user_message(), "Select your ingredients to begin.");
/// ```
#[derive(Debug, Error)]
pub enum FridgeChefError {
    /// The user asked for a recipe without any ingredients.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The text-generation call failed before a payload was received.
    ///
    /// Covers network failures, authentication and quota rejections, and any
    /// non-success HTTP status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The text-generation call returned a payload that does not match the
    /// recipe schema.
    #[error("Response format error: {0}")]
    ResponseFormat(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A background generation task could not report back.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FridgeChefError {
    /// Returns the text to show in the error banner for this failure.
    ///
    /// Validation and transport errors surface their own description (or the
    /// generic busy-kitchen fallback when it is blank). Schema failures never
    /// leak parser details to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Transport(message) => {
                if message.trim().is_empty() {
                    KITCHEN_BUSY_MESSAGE.to_string()
                } else {
                    message.clone()
                }
            }
            Self::ResponseFormat(_) => UNREADABLE_RECIPE_MESSAGE.to_string(),
            _ => KITCHEN_BUSY_MESSAGE.to_string(),
        }
    }
}

/// A specialized `Result` type for FridgeChef operations.
pub type Result<T> = std::result::Result<T, FridgeChefError>;

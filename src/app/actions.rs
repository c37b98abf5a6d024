//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or worker
//! responses. Actions bridge pure state transformations and effectful
//! operations like spawning generation requests or leaving the program.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The session executes these
//! actions in sequence.
//!
//! # Example
//!
//! ```rust
//! use fridgechef::app::Action;
//! use fridgechef::domain::{Generation, MealType};
//! use fridgechef::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::generate_recipe(
//!     Generation::default(),
//!     vec!["eggs".to_string()],
//!     MealType::MainMeal,
//! ))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Stops the interactive loop.
    ///
    /// Sent when the user explicitly requests to exit (e.g., typing `/quit`).
    Quit,

    /// Posts a message to a background worker task.
    ///
    /// The response comes back later as an
    /// [`Event::WorkerResponse`](crate::app::Event::WorkerResponse).
    PostToWorker(WorkerMessage),
}

impl Action {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::PostToWorker(WorkerMessage::GenerateRecipe { .. }) => "PostToWorker(GenerateRecipe)",
            Self::PostToWorker(WorkerMessage::GenerateImage { .. }) => "PostToWorker(GenerateImage)",
        }
    }
}

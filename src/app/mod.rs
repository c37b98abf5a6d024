//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal runtime (`session`/`main.rs`) and the domain/client/worker layers.
//! It implements the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`input`]: Parsing of typed command lines into events
//! - [`modes`]: Request lifecycle state machine
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use fridgechef::app::{handle_event, AppState, Event};
//! use fridgechef::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::AddIngredient("Eggs".into()))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.ingredients.as_slice(), ["eggs"]);
//! # Ok::<(), fridgechef::FridgeChefError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod input;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use input::{parse_line, Input};
pub use modes::RequestState;
pub use state::AppState;

//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user commands
//! and worker responses, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the input parser or a worker task
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Inventory**: `AddIngredient`, `RemoveIngredient`, `SetMealType`
//! - **Request**: `Generate`, `Reset`
//! - **System**: `Quit`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! Worker responses are fenced by generation: a response only applies while
//! its generation is still current and the request is in the matching state.
//! Anything else is dropped without surfacing an error.

use crate::app::state::EMPTY_INVENTORY_MESSAGE;
use crate::app::{Action, AppState, RequestState};
use crate::domain::error::{FridgeChefError, Result};
use crate::domain::{Generation, MealType};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user commands or worker responses.
///
/// The event handler processes these sequentially, ensuring deterministic
/// state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Adds an ingredient (normalized; duplicates ignored).
    AddIngredient(String),
    /// Removes the ingredient at a zero-based position.
    RemoveIngredient(usize),
    /// Selects the meal type for the next request.
    SetMealType(MealType),
    /// Starts a new recipe request from the current inventory.
    Generate,
    /// Returns to the input form, keeping inventory and meal type.
    Reset,
    /// Leaves the program.
    Quit,

    /// Wraps a response from a background worker task.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Short name for span fields, without payloads.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddIngredient(_) => "add_ingredient",
            Self::RemoveIngredient(_) => "remove_ingredient",
            Self::SetMealType(_) => "set_meal_type",
            Self::Generate => "generate",
            Self::Reset => "reset",
            Self::Quit => "quit",
            Self::WorkerResponse(WorkerResponse::RecipeGenerated { .. }) => "recipe_generated",
            Self::WorkerResponse(WorkerResponse::RecipeFailed { .. }) => "recipe_failed",
            Self::WorkerResponse(WorkerResponse::ImageGenerated { .. }) => "image_generated",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A tuple of whether the view should be re-rendered and the actions to
/// execute in sequence.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that need to
/// reject an event.
///
/// # Example
///
/// ```rust
/// use fridgechef::app::{handle_event, Action, AppState, Event, RequestState};
/// use fridgechef::ui::theme::Theme;
///
/// let mut state = AppState::new(Theme::default());
/// let (_, actions) = handle_event(&mut state, &Event::Generate)?;
/// assert!(actions.is_empty());
/// assert_eq!(
///     state.request,
///     RequestState::Failed("Select your ingredients to begin.".to_string())
/// );
///
/// handle_event(&mut state, &Event::AddIngredient("rice".into()))?;
/// let (_, actions) = handle_event(&mut state, &Event::Generate)?;
/// assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
/// # Ok::<(), fridgechef::FridgeChefError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!(
        "handle_event",
        event_type = event.name(),
        generation = %state.generation
    )
    .entered();

    match event {
        Event::AddIngredient(raw) => {
            let added = state.add_ingredient(raw);
            tracing::debug!(added = added, count = state.ingredients.len(), "ingredient submitted");
            Ok((added, vec![]))
        }
        Event::RemoveIngredient(index) => {
            let removed = state.remove_ingredient(*index);
            if removed.is_none() {
                tracing::debug!(index = index, count = state.ingredients.len(), "remove index out of range");
            }
            Ok((removed.is_some(), vec![]))
        }
        Event::SetMealType(meal_type) => {
            let changed = state.set_meal_type(*meal_type);
            Ok((changed, vec![]))
        }
        Event::Generate => Ok(handle_generate(state)),
        Event::Reset => {
            state.reset();
            tracing::debug!(generation = %state.generation, "session reset");
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

fn handle_generate(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.ingredients.is_empty() {
        let err = FridgeChefError::Validation(EMPTY_INVENTORY_MESSAGE.to_string());
        tracing::debug!(error = %err, "generate requested with empty inventory");
        state.request = RequestState::Failed(err.user_message());
        return (true, vec![]);
    }

    let generation = state.begin_generation();
    tracing::info!(
        generation = %generation,
        ingredient_count = state.ingredients.len(),
        meal_type = %state.meal_type,
        "generating recipe"
    );

    (
        true,
        vec![Action::PostToWorker(WorkerMessage::generate_recipe(
            generation,
            state.ingredients.to_vec(),
            state.meal_type,
        ))],
    )
}

fn is_stale(state: &AppState, generation: Generation) -> bool {
    if state.is_current(generation) {
        return false;
    }
    tracing::debug!(
        response_generation = %generation,
        current_generation = %state.generation,
        "dropping stale worker response"
    );
    true
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    if is_stale(state, response.generation()) {
        return (false, vec![]);
    }

    match response {
        WorkerResponse::RecipeGenerated {
            generation,
            recipe,
            ingredients,
        } => {
            if state.request != RequestState::GeneratingText {
                tracing::debug!(state = state.request.name(), "recipe arrived outside text generation");
                return (false, vec![]);
            }

            let recipe = recipe.with_image(None);
            let title = recipe.title.clone();
            state.request = RequestState::AwaitingImage(recipe);

            (
                true,
                vec![Action::PostToWorker(WorkerMessage::generate_image(
                    *generation,
                    title,
                    ingredients.clone(),
                ))],
            )
        }

        WorkerResponse::RecipeFailed { message, .. } => {
            if state.request != RequestState::GeneratingText {
                return (false, vec![]);
            }
            tracing::info!(message = %message, "recipe generation failed");
            state.request = RequestState::Failed(message.clone());
            (true, vec![])
        }

        WorkerResponse::ImageGenerated { image_url, .. } => {
            let RequestState::AwaitingImage(recipe) = &state.request else {
                tracing::debug!(state = state.request.name(), "image arrived outside image wait");
                return (false, vec![]);
            };

            state.request = RequestState::Ready(recipe.with_image(image_url.clone()));
            (true, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Recipe;
    use crate::ui::theme::Theme;

    const TOAST: &str = r#"{
        "title": "Toast",
        "estimatedTime": "5 minutes",
        "difficulty": "Easy",
        "ingredients": [{"item": "bread", "amount": "1 slice"}],
        "instructions": ["Toast the bread."]
    }"#;

    const IMAGE: &str = "data:image/png;base64,AAEC";

    fn toast() -> Recipe {
        Recipe::from_json(TOAST).unwrap()
    }

    fn stocked_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::AddIngredient("Bread".to_string())).unwrap();
        state
    }

    fn generate(state: &mut AppState) -> Generation {
        let (_, actions) = handle_event(state, &Event::Generate).unwrap();
        match actions.as_slice() {
            [Action::PostToWorker(WorkerMessage::GenerateRecipe { generation, .. })] => *generation,
            other => panic!("expected recipe request, got {other:?}"),
        }
    }

    fn respond(state: &mut AppState, response: WorkerResponse) -> (bool, Vec<Action>) {
        handle_event(state, &Event::WorkerResponse(response)).unwrap()
    }

    #[test]
    fn generate_snapshots_inventory_and_meal() {
        let mut state = stocked_state();
        handle_event(&mut state, &Event::SetMealType(MealType::Appetizer)).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Generate).unwrap();

        match actions.as_slice() {
            [Action::PostToWorker(WorkerMessage::GenerateRecipe { ingredients, meal_type, .. })] => {
                assert_eq!(ingredients, &["bread"]);
                assert_eq!(*meal_type, MealType::Appetizer);
            }
            other => panic!("unexpected actions: {other:?}"),
        }
        assert_eq!(state.request, RequestState::GeneratingText);
    }

    #[test]
    fn generate_with_empty_inventory_fails_validation() {
        let mut state = AppState::new(Theme::default());
        let before = state.generation;

        let (should_render, actions) = handle_event(&mut state, &Event::Generate).unwrap();

        assert!(should_render);
        assert!(actions.is_empty());
        assert_eq!(
            state.request,
            RequestState::Failed(
                FridgeChefError::Validation(EMPTY_INVENTORY_MESSAGE.to_string()).user_message()
            )
        );
        assert_eq!(state.request.error(), Some(EMPTY_INVENTORY_MESSAGE));
        assert_eq!(state.generation, before);
    }

    #[test]
    fn recipe_then_image_reaches_ready() {
        let mut state = stocked_state();
        let generation = generate(&mut state);

        let (_, actions) = respond(
            &mut state,
            WorkerResponse::RecipeGenerated {
                generation,
                recipe: toast(),
                ingredients: vec!["bread".to_string()],
            },
        );
        assert_eq!(state.request, RequestState::AwaitingImage(toast()));
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::GenerateImage { title, .. })] if title == "Toast"
        ));

        respond(
            &mut state,
            WorkerResponse::ImageGenerated {
                generation,
                image_url: Some(IMAGE.to_string()),
            },
        );
        let RequestState::Ready(recipe) = &state.request else {
            panic!("expected ready, got {:?}", state.request);
        };
        assert_eq!(recipe.image_url.as_deref(), Some(IMAGE));
    }

    #[test]
    fn failed_image_still_reaches_ready() {
        let mut state = stocked_state();
        let generation = generate(&mut state);
        respond(
            &mut state,
            WorkerResponse::RecipeGenerated { generation, recipe: toast(), ingredients: vec![] },
        );
        respond(&mut state, WorkerResponse::ImageGenerated { generation, image_url: None });
        assert_eq!(state.request, RequestState::Ready(toast()));
    }

    #[test]
    fn image_after_reset_is_dropped() {
        let mut state = stocked_state();
        let generation = generate(&mut state);
        respond(
            &mut state,
            WorkerResponse::RecipeGenerated { generation, recipe: toast(), ingredients: vec![] },
        );
        handle_event(&mut state, &Event::Reset).unwrap();

        let (should_render, actions) = respond(
            &mut state,
            WorkerResponse::ImageGenerated { generation, image_url: Some(IMAGE.to_string()) },
        );
        assert!(!should_render);
        assert!(actions.is_empty());
        assert_eq!(state.request, RequestState::Idle);
    }

    #[test]
    fn superseded_results_are_dropped() {
        let mut state = stocked_state();
        let first = generate(&mut state);
        let second = generate(&mut state);
        assert_ne!(first, second);

        respond(
            &mut state,
            WorkerResponse::RecipeFailed { generation: first, message: "late".to_string() },
        );
        assert_eq!(state.request, RequestState::GeneratingText);

        respond(
            &mut state,
            WorkerResponse::RecipeGenerated { generation: second, recipe: toast(), ingredients: vec![] },
        );
        respond(
            &mut state,
            WorkerResponse::ImageGenerated { generation: first, image_url: Some(IMAGE.to_string()) },
        );
        assert_eq!(state.request, RequestState::AwaitingImage(toast()));
    }

    #[test]
    fn failure_keeps_inventory_and_meal() {
        let mut state = stocked_state();
        handle_event(&mut state, &Event::SetMealType(MealType::Salad)).unwrap();
        let generation = generate(&mut state);
        respond(
            &mut state,
            WorkerResponse::RecipeFailed { generation, message: "nope".to_string() },
        );

        assert_eq!(state.request, RequestState::Failed("nope".to_string()));
        assert_eq!(state.ingredients.as_slice(), ["bread"]);
        assert_eq!(state.meal_type, MealType::Salad);
    }

    #[test]
    fn duplicate_image_response_is_ignored() {
        let mut state = stocked_state();
        let generation = generate(&mut state);
        respond(
            &mut state,
            WorkerResponse::RecipeGenerated { generation, recipe: toast(), ingredients: vec![] },
        );
        respond(&mut state, WorkerResponse::ImageGenerated { generation, image_url: None });
        let (should_render, _) = respond(
            &mut state,
            WorkerResponse::ImageGenerated { generation, image_url: Some(IMAGE.to_string()) },
        );
        assert!(!should_render);
        assert_eq!(state.request, RequestState::Ready(toast()));
    }

    #[test]
    fn set_meal_type_is_idempotent() {
        let mut state = stocked_state();
        handle_event(&mut state, &Event::SetMealType(MealType::Salad)).unwrap();
        let once = state.snapshot();
        let (should_render, _) = handle_event(&mut state, &Event::SetMealType(MealType::Salad)).unwrap();
        assert!(!should_render);
        assert_eq!(state.snapshot(), once);
    }

    #[test]
    fn quit_emits_quit_action() {
        let mut state = AppState::new(Theme::default());
        assert_eq!(handle_event(&mut state, &Event::Quit).unwrap(), (false, vec![Action::Quit]));
    }
}

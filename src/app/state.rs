//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for a
//! FridgeChef session, along with the store operations and UI view model
//! generation. It serves as the single source of truth for all transient state.
//!
//! # State Components
//!
//! - **Ingredients**: The normalized inventory the user typed in
//! - **Meal Type**: The currently selected kind of dish
//! - **Request**: Where the current generation request stands
//! - **Generation**: Token of the latest request, used to fence stale results
//! - **Theme** and **Width**: Presentation settings
//!
//! # Example
//!
//! ```rust
//! use fridgechef::app::{AppState, RequestState};
//! use fridgechef::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.add_ingredient("Egg");
//! state.add_ingredient(" EGG ");
//! assert_eq!(state.ingredients.as_slice(), ["egg"]);
//! assert_eq!(state.request, RequestState::Idle);
//! ```

use super::modes::RequestState;
use crate::domain::{Generation, IngredientList, MealType, Recipe};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    FooterInfo, FormView, HeaderInfo, ImageStatus, IngredientChip, IngredientRow, LoaderView,
    MealOption, RecipeView, Screen, StepRow, UIViewModel,
};
use chrono::Datelike;

/// Default render width in columns.
pub const DEFAULT_WIDTH: usize = 80;

/// Message shown when generating from an empty inventory.
pub const EMPTY_INVENTORY_MESSAGE: &str = "Select your ingredients to begin.";

const LOADING_TITLE: &str = "Developing your palate...";

const LOADING_MESSAGES: [&str; 4] = [
    "Sourcing the finest data...",
    "Curating the flavor profile...",
    "Infusing with intelligence...",
    "Perfecting the presentation...",
];

/// Central application state container.
///
/// Mutated only by the event handler in response to user commands and worker
/// responses. View models are computed on-demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The user's ingredient inventory.
    ///
    /// Survives `reset` and failed requests.
    pub ingredients: IngredientList,

    /// Kind of dish requested on the next `generate`.
    pub meal_type: MealType,

    /// Current request lifecycle state.
    pub request: RequestState,

    /// Token of the latest request or reset.
    ///
    /// Worker responses tagged with any other generation are stale.
    pub generation: Generation,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Render width in columns.
    pub width: usize,
}

/// A plain-data view of the user-visible state.
///
/// Two snapshots compare equal exactly when the UI would show the same thing,
/// ignoring presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub ingredients: Vec<String>,
    pub meal_type: MealType,
    pub recipe: Option<Recipe>,
    pub is_loading: bool,
    pub is_image_loading: bool,
    pub error: Option<String>,
}

impl AppState {
    /// Creates an empty state with the default meal type.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            ingredients: IngredientList::new(),
            meal_type: MealType::default(),
            request: RequestState::Idle,
            generation: Generation::default(),
            theme,
            width: DEFAULT_WIDTH,
        }
    }

    /// Normalizes and appends an ingredient, clearing any error on change.
    ///
    /// Returns `true` if the inventory changed.
    pub fn add_ingredient(&mut self, raw: &str) -> bool {
        let added = self.ingredients.add(raw);
        if added {
            self.clear_error();
        }
        added
    }

    /// Removes the ingredient at `index`, clearing any error on change.
    ///
    /// Out-of-range indices are ignored. Returns the removed entry.
    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        let removed = self.ingredients.remove(index);
        if removed.is_some() {
            self.clear_error();
        }
        removed
    }

    /// Replaces the meal type. Returns `true` if it changed.
    pub fn set_meal_type(&mut self, meal_type: MealType) -> bool {
        let changed = self.meal_type != meal_type;
        self.meal_type = meal_type;
        changed
    }

    /// Starts a new request and returns its generation.
    ///
    /// Clears any recipe or error, so in-flight results for an earlier
    /// generation no longer match.
    pub fn begin_generation(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.request = RequestState::GeneratingText;
        self.generation
    }

    /// Discards recipe and error, keeping inventory and meal type.
    pub fn reset(&mut self) {
        self.generation = self.generation.next();
        self.request = RequestState::Idle;
    }

    /// Whether a worker response for `generation` still belongs to the
    /// current request.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    fn clear_error(&mut self) {
        if matches!(self.request, RequestState::Failed(_)) {
            self.request = RequestState::Idle;
        }
    }

    /// Returns the user-visible state as plain data.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            ingredients: self.ingredients.to_vec(),
            meal_type: self.meal_type,
            recipe: self.request.recipe().cloned(),
            is_loading: self.request.is_loading(),
            is_image_loading: matches!(self.request, RequestState::AwaitingImage(_)),
            error: self.request.error().map(ToString::to_string),
        }
    }

    /// Computes a renderable UI view model from current state.
    ///
    /// Chooses exactly one [`Screen`] for the current request state:
    /// - `Idle`: input form
    /// - `GeneratingText`: loading indicator
    /// - `AwaitingImage` / `Ready`: recipe card
    /// - `Failed`: error banner over the input form
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", request = self.request.name()).entered();

        let screen = match &self.request {
            RequestState::Idle => Screen::Form(self.compute_form()),
            RequestState::GeneratingText => Screen::Loading(self.compute_loader()),
            RequestState::AwaitingImage(recipe) => {
                Screen::Recipe(Self::compute_recipe(recipe, ImageStatus::Pending))
            }
            RequestState::Ready(recipe) => {
                let image = recipe.inline_image().map_or(ImageStatus::Unavailable, |image| {
                    ImageStatus::Ready {
                        mime_type: image.mime_type,
                        byte_len: image.byte_len,
                    }
                });
                Screen::Recipe(Self::compute_recipe(recipe, image))
            }
            RequestState::Failed(message) => Screen::Error {
                message: message.clone(),
                form: self.compute_form(),
            },
        };

        UIViewModel {
            header: Self::compute_header(),
            screen,
            footer: self.compute_footer(),
        }
    }

    fn compute_header() -> HeaderInfo {
        HeaderInfo {
            title: "FridgeChef".to_string(),
            accent: "AI".to_string(),
            tagline: "Elevated culinary intelligence for the modern kitchen.".to_string(),
        }
    }

    fn compute_form(&self) -> FormView {
        let chips = self
            .ingredients
            .iter()
            .enumerate()
            .map(|(i, name)| IngredientChip {
                number: i + 1,
                name: name.clone(),
            })
            .collect();

        let meal_options = MealType::ALL
            .iter()
            .map(|&meal_type| MealOption {
                label: meal_type.label().to_string(),
                is_selected: meal_type == self.meal_type,
            })
            .collect();

        FormView {
            chips,
            empty_message: self
                .ingredients
                .is_empty()
                .then(|| "The fridge is empty...".to_string()),
            meal_options,
            can_generate: !self.ingredients.is_empty(),
        }
    }

    fn compute_loader(&self) -> LoaderView {
        // Rotates per request since the terminal view is not animated
        let step = (self.generation.value() % LOADING_MESSAGES.len() as u64) as usize;
        LoaderView {
            title: LOADING_TITLE.to_string(),
            message: LOADING_MESSAGES[step].to_string(),
        }
    }

    fn compute_recipe(recipe: &Recipe, image: ImageStatus) -> RecipeView {
        RecipeView {
            title: recipe.title.clone(),
            estimated_time: recipe.estimated_time.clone(),
            difficulty: format!("{} Level", recipe.difficulty),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|ingredient| IngredientRow {
                    item: ingredient.item.clone(),
                    amount: ingredient.amount.clone(),
                })
                .collect(),
            steps: recipe
                .instructions
                .iter()
                .enumerate()
                .map(|(i, text)| StepRow {
                    number: format!("{:02}", i + 1),
                    text: text.clone(),
                })
                .collect(),
            chef_tip: recipe.chef_tip.clone().filter(|tip| !tip.trim().is_empty()),
            image,
        }
    }

    /// Computes command hints appropriate to the current request state.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.request {
            RequestState::GeneratingText => "/reset: cancel  /quit: leave",
            RequestState::AwaitingImage(_) | RequestState::Ready(_) => {
                "/back: edit inventory  /regenerate: new recipe  /quit: leave"
            }
            RequestState::Idle | RequestState::Failed(_) => {
                "type: add  /rm <n>: remove  /meal <salad|main|appetizer>  /go: generate  /quit: leave"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            credit: format!(
                "© {} FridgeChef AI • Noir Collection",
                chrono::Local::now().year()
            ),
        }
    }
}

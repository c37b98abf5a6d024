//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-formatted display
//! strings; the renderer only lays them out and colors them.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//! Exactly one [`Screen`] is chosen for any request state.
//!
//! # Example
//!
//! ```rust
//! use fridgechef::ui::viewmodel::{FooterInfo, FormView, HeaderInfo, Screen, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: "FridgeChef".to_string(),
//!         accent: "AI".to_string(),
//!         tagline: "Elevated culinary intelligence for the modern kitchen.".to_string(),
//!     },
//!     screen: Screen::Form(FormView {
//!         chips: vec![],
//!         empty_message: Some("The fridge is empty...".to_string()),
//!         meal_options: vec![],
//!         can_generate: false,
//!     }),
//!     footer: FooterInfo {
//!         keybindings: "/quit: leave".to_string(),
//!         credit: "FridgeChef AI".to_string(),
//!     },
//! };
//! assert!(matches!(vm.screen, Screen::Form(_)));
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title, branding).
    pub header: HeaderInfo,

    /// The one view shown for the current request state.
    pub screen: Screen,

    /// Footer information (command hints, credit line).
    pub footer: FooterInfo,
}

/// The four mutually exclusive views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Idle input form.
    Form(FormView),

    /// Loading indicator while the recipe text is generated.
    Loading(LoaderView),

    /// A populated recipe.
    Recipe(RecipeView),

    /// Error banner, shown above the input form.
    Error {
        /// User-facing error message.
        message: String,
        form: FormView,
    },
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Product name.
    pub title: String,

    /// Highlighted suffix rendered after the title.
    pub accent: String,

    /// One-line subtitle under the title.
    pub tagline: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command hints for the current view.
    pub keybindings: String,

    /// Copyright line.
    pub credit: String,
}

/// The ingredient inventory and meal selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// One chip per ingredient, in insertion order.
    pub chips: Vec<IngredientChip>,

    /// Placeholder shown when there are no chips.
    pub empty_message: Option<String>,

    /// Meal type options with the current selection marked.
    pub meal_options: Vec<MealOption>,

    /// Whether the generate command is currently useful.
    pub can_generate: bool,
}

/// One ingredient chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientChip {
    /// 1-based position, as typed in `/rm <n>`.
    pub number: usize,
    pub name: String,
}

/// One meal type choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealOption {
    pub label: String,
    pub is_selected: bool,
}

/// Loading indicator contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderView {
    pub title: String,

    /// Rotating status line.
    pub message: String,
}

/// A recipe ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeView {
    pub title: String,
    pub estimated_time: String,

    /// Difficulty with its suffix, e.g. `"Easy Level"`.
    pub difficulty: String,

    pub ingredients: Vec<IngredientRow>,
    pub steps: Vec<StepRow>,
    pub chef_tip: Option<String>,
    pub image: ImageStatus,
}

/// One row of the "Mise en Place" table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub item: String,
    pub amount: String,
}

/// One numbered instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    /// Zero-padded step number, e.g. `"01"`.
    pub number: String,
    pub text: String,
}

/// What the image slot of a recipe shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    /// The image request is still running.
    Pending,

    /// An inline image was produced.
    Ready { mime_type: String, byte_len: usize },

    /// The image request finished without an image.
    Unavailable,
}

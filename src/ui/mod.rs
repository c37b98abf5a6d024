//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled terminal frames
//! through composable rendering components, with theme support and
//! width-aware layout.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → String frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared text layout utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel, CLEAR_SCREEN};
pub use theme::Theme;
pub use viewmodel::{
    FooterInfo, FormView, HeaderInfo, ImageStatus, LoaderView, RecipeView, Screen, UIViewModel,
};

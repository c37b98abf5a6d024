//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Rendering produces a `String` rather than printing, so the session loop
//! decides when to clear the terminal and tests can inspect frames directly.
//!
//! # Example
//!
//! ```rust
//! use fridgechef::app::AppState;
//! use fridgechef::ui::{render, Theme};
//!
//! let mut state = AppState::new(Theme::default());
//! state.add_ingredient("egg");
//! let frame = render(&state);
//! assert!(frame.contains("[1] egg"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Narrowest width the layout is computed for.
pub const MIN_WIDTH: usize = 40;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the current state into an ANSI-styled frame.
#[must_use]
pub fn render(state: &AppState) -> String {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, &state.theme, state.width)
}

/// Renders a pre-computed view model at `cols` columns.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_frame(&mut out, vm, theme, cols.max(MIN_WIDTH));
    out
}

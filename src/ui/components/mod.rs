//! Composable UI component renderers.
//!
//! Each component appends its lines to a shared `String` buffer, which the
//! renderer prints in one go.
//!
//! # Components
//!
//! - [`header`]: Product name and tagline
//! - [`form`]: Ingredient inventory box and meal type selector
//! - [`loader`]: Loading indicator while the recipe text is generated
//! - [`recipe_card`]: Image slot, ingredient table, steps and chef's note
//! - [`error_banner`]: Error message above the input form
//! - [`footer`]: Command hints and credit line
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Screen: form | loader | recipe card | error banner + form]
//! [Border]
//! [Footer]
//! ```

mod error_banner;
mod footer;
mod form;
mod header;
mod loader;
mod recipe_card;

pub use error_banner::render_error;
pub use footer::render_footer;
pub use form::render_form;
pub use header::render_header;
pub use loader::render_loader;
pub use recipe_card::render_recipe;

use crate::ui::helpers::push_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Screen, UIViewModel};

/// Appends the complete frame for `vm` to `out`.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    push_border(out, &theme.colors.border, cols);

    match &vm.screen {
        Screen::Form(form) => render_form(out, form, theme, cols),
        Screen::Loading(loader) => render_loader(out, loader, theme, cols),
        Screen::Recipe(recipe) => render_recipe(out, recipe, theme, cols),
        Screen::Error { message, form } => render_error(out, message, form, theme, cols),
    }

    out.push('\n');
    push_border(out, &theme.colors.border, cols);
    render_footer(out, &vm.footer, theme, cols);
}

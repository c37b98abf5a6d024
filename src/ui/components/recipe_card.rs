//! Recipe card component renderer.
//!
//! This module renders a generated recipe: the image slot, title block with
//! time and difficulty, the two-column "Mise en Place" ingredient table, the
//! numbered steps, and the optional chef's note.

use crate::ui::helpers::{display_width, push_border, push_centered, push_label, truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ImageStatus, IngredientRow, RecipeView, StepRow};

/// Left indent for card content.
const CARD_INDENT: usize = 2;

/// Widest the ingredient name column may grow.
const MAX_ITEM_COLUMN: usize = 32;

/// Appends the full recipe card to `out`.
///
/// # Layout
///
/// ```text
/// [image slot]
/// [border]
///   CHEF DE CUISINE AI
///   Title
///   ⏱ 25 minutes   ◆ Medium Level
/// [border]
///   MISE EN PLACE
///   item ............ amount
///   THE PROCESS
///   01  step text wrapped under
///       its own column
///   GASTRONOMY NOTE
///   "tip"
/// ```
pub fn render_recipe(out: &mut String, recipe: &RecipeView, theme: &Theme, cols: usize) {
    out.push('\n');
    render_image_slot(out, &recipe.image, theme, cols);
    push_border(out, &theme.colors.border, cols);

    render_title_block(out, recipe, theme, cols);
    push_border(out, &theme.colors.border, cols);

    out.push('\n');
    push_label(out, "Mise en Place", theme, CARD_INDENT);
    render_ingredient_rows(out, &recipe.ingredients, theme, cols);

    out.push('\n');
    push_label(out, "The Process", theme, CARD_INDENT);
    render_steps(out, &recipe.steps, theme, cols);

    if let Some(tip) = &recipe.chef_tip {
        out.push('\n');
        push_label(out, "Gastronomy Note", theme, CARD_INDENT);
        let indent = " ".repeat(CARD_INDENT);
        let quoted = format!("\u{201c}{tip}\u{201d}");
        for line in wrap(&quoted, cols.saturating_sub(CARD_INDENT * 2)) {
            out.push_str(&format!(
                "{indent}{}{}{line}{}\n",
                Theme::italic(),
                Theme::fg(&theme.colors.text_normal),
                Theme::reset()
            ));
        }
    }
    out.push('\n');
}

/// The terminal cannot show the picture itself, so the slot reports status.
fn render_image_slot(out: &mut String, image: &ImageStatus, theme: &Theme, cols: usize) {
    let (text, style) = match image {
        ImageStatus::Pending => (
            "◌ Visualizing Dish...".to_string(),
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.loader_fg)),
        ),
        ImageStatus::Ready { mime_type, byte_len } => (
            format!("▣ Image ready ({mime_type}, {byte_len} bytes)"),
            Theme::fg(&theme.colors.accent),
        ),
        ImageStatus::Unavailable => (
            "Image Unavailable".to_string(),
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        ),
    };
    push_centered(out, &text, &style, cols);
}

fn render_title_block(out: &mut String, recipe: &RecipeView, theme: &Theme, cols: usize) {
    let indent = " ".repeat(CARD_INDENT);
    let width = cols.saturating_sub(CARD_INDENT * 2);

    push_label(out, "Chef de Cuisine AI", theme, CARD_INDENT);
    for line in wrap(&recipe.title, width) {
        out.push_str(&format!(
            "{indent}{}{}{line}{}\n",
            Theme::bold(),
            Theme::fg(&theme.colors.header_fg),
            Theme::reset()
        ));
    }
    out.push_str(&format!(
        "{indent}{}⏱ {}   ◆ {}{}\n",
        Theme::fg(&theme.colors.text_dim),
        recipe.estimated_time,
        recipe.difficulty,
        Theme::reset()
    ));
}

/// Renders ingredient rows as a two-column table.
///
/// The item column is sized to the longest name (capped), amounts are
/// right-aligned against the card edge.
fn render_ingredient_rows(out: &mut String, rows: &[IngredientRow], theme: &Theme, cols: usize) {
    let indent = " ".repeat(CARD_INDENT);
    let content_width = cols.saturating_sub(CARD_INDENT * 2);
    let item_column = rows
        .iter()
        .map(|row| display_width(&row.item))
        .max()
        .unwrap_or(0)
        .min(MAX_ITEM_COLUMN)
        .min(content_width / 2);

    for row in rows {
        let item = truncate(&row.item, item_column);
        let amount_width = content_width.saturating_sub(item_column + 1);
        let amount = truncate(&row.amount, amount_width);
        let gap = content_width.saturating_sub(display_width(&item) + display_width(&amount));

        out.push_str(&indent);
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&item);
        out.push_str(&Theme::fg(&theme.colors.border));
        out.push_str(&" ".repeat(gap));
        out.push_str(&Theme::fg(&theme.colors.accent));
        out.push_str(&amount);
        out.push_str(Theme::reset());
        out.push('\n');
    }
}

/// Renders numbered steps with hanging indentation for wrapped lines.
fn render_steps(out: &mut String, steps: &[StepRow], theme: &Theme, cols: usize) {
    let indent = " ".repeat(CARD_INDENT);

    for step in steps {
        let number_width = display_width(&step.number) + 2;
        let text_width = cols.saturating_sub(CARD_INDENT * 2 + number_width);

        for (i, line) in wrap(&step.text, text_width).iter().enumerate() {
            out.push_str(&indent);
            if i == 0 {
                out.push_str(Theme::bold());
                out.push_str(&Theme::fg(&theme.colors.accent));
                out.push_str(&step.number);
                out.push_str(Theme::reset());
                out.push_str("  ");
            } else {
                out.push_str(&" ".repeat(number_width));
            }
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str(line);
            out.push_str(Theme::reset());
            out.push('\n');
        }
    }
}

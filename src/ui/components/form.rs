//! Input form component renderer.
//!
//! This module renders the ingredient inventory as a bordered box of numbered
//! chips, followed by the meal type selector and the generate hint.

use crate::ui::helpers::{display_width, push_label, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormView;

/// Horizontal margin for the inventory box (spaces on left and right).
const FORM_MARGIN: usize = 4;

/// Appends the input form to `out`.
///
/// # Layout
///
/// ```text
/// [margin] INVENTORY
/// [margin] ┌──────────────────────────────┐
/// [margin] │ [1] egg  [2] spinach          │
/// [margin] └──────────────────────────────┘
/// [margin] CUISINE TYPE
/// [margin] (•) Salad   ( ) Main Meal   ( ) Appetizer
/// [margin] → /go  Curate Recipe
/// ```
///
/// Chips flow left to right and wrap onto new box rows when the inner width
/// runs out. An empty inventory shows the placeholder message instead.
pub fn render_form(out: &mut String, form: &FormView, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(FORM_MARGIN * 2).max(4);
    let inner_width = box_width - 2;
    let margin = " ".repeat(FORM_MARGIN);
    let border = Theme::fg(&theme.colors.input_border);

    out.push('\n');
    push_label(out, "Inventory", theme, FORM_MARGIN);

    out.push_str(&format!("{margin}{border}┌{}┐{}\n", "─".repeat(inner_width), Theme::reset()));

    for row in chip_rows(form, inner_width.saturating_sub(2)) {
        let content = if row.is_empty() {
            let placeholder = form.empty_message.as_deref().unwrap_or_default();
            let placeholder = truncate(placeholder, inner_width.saturating_sub(2));
            let width = display_width(&placeholder);
            (
                format!("{}{}{placeholder}{}", Theme::italic(), Theme::fg(&theme.colors.text_dim), Theme::reset()),
                width,
            )
        } else {
            render_chip_row(&row, theme)
        };

        out.push_str(&format!("{margin}{border}│{} ", Theme::reset()));
        out.push_str(&content.0);
        out.push_str(&" ".repeat(inner_width.saturating_sub(content.1 + 1)));
        out.push_str(&format!("{border}│{}\n", Theme::reset()));
    }

    out.push_str(&format!("{margin}{border}└{}┘{}\n", "─".repeat(inner_width), Theme::reset()));

    out.push('\n');
    push_label(out, "Cuisine Type", theme, FORM_MARGIN);
    out.push_str(&margin);
    for (i, option) in form.meal_options.iter().enumerate() {
        if i > 0 {
            out.push_str("   ");
        }
        if option.is_selected {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
            out.push_str(&format!(" (•) {} ", option.label));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&format!(" ( ) {} ", option.label));
        }
        out.push_str(Theme::reset());
    }
    out.push('\n');

    out.push('\n');
    out.push_str(&margin);
    if form.can_generate {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.accent));
        out.push_str("→ /go  Curate Recipe");
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str("Add ingredients to curate a recipe");
    }
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Groups chip labels into rows no wider than `width`.
///
/// Returns a single empty row when there are no chips.
fn chip_rows(form: &FormView, width: usize) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = vec![Vec::new()];
    let mut row_width = 0;

    for chip in &form.chips {
        let label = truncate(&format!(" [{}] {} ", chip.number, chip.name), width.max(1));
        let label_width = display_width(&label);
        let gap = usize::from(row_width > 0);

        if row_width > 0 && row_width + gap + label_width > width {
            rows.push(Vec::new());
            row_width = 0;
        }

        row_width += usize::from(row_width > 0) + label_width;
        if let Some(row) = rows.last_mut() {
            row.push(label);
        }
    }

    rows
}

/// Styles one row of chip labels, returning the text and its visible width.
fn render_chip_row(labels: &[String], theme: &Theme) -> (String, usize) {
    let mut text = String::new();
    let mut width = 0;

    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            text.push(' ');
            width += 1;
        }
        text.push_str(&Theme::fg(&theme.colors.chip_fg));
        text.push_str(&Theme::bg(&theme.colors.chip_bg));
        text.push_str(label);
        text.push_str(Theme::reset());
        width += display_width(label);
    }

    (text, width)
}

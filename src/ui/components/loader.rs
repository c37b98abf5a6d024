//! Loading indicator component renderer.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LoaderView;

/// Appends the centered loading title and status message to `out`.
///
/// # Layout
///
/// ```text
/// [3 blank lines]
/// [left padding] ◌ ◌ ◌
/// [left padding] TITLE
/// [left padding] message
/// ```
pub fn render_loader(out: &mut String, loader: &LoaderView, theme: &Theme, cols: usize) {
    out.push_str("\n\n\n");

    let accent = Theme::fg(&theme.colors.loader_fg);
    push_centered(out, "◌ ◌ ◌", &accent, cols);
    out.push('\n');

    let title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
    push_centered(out, &loader.title, &title_style, cols);

    let message_style = format!("{}{accent}", Theme::dim());
    push_centered(out, &loader.message, &message_style, cols);
    out.push_str("\n\n");
}

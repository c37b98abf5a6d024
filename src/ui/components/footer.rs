//! Footer component renderer.
//!
//! This module renders the command hints and the credit line.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Appends the footer to `out`.
///
/// Both lines are centered with dimmed styling. Hints wider than the terminal
/// are truncated so they never wrap.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let style = Theme::fg(&theme.colors.text_dim);
    push_centered(out, &footer.keybindings, &style, cols);

    let credit_style = format!("{}{style}", Theme::dim());
    push_centered(out, &footer.credit, &credit_style, cols);
}

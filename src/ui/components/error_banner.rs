//! Error banner component renderer.

use crate::ui::helpers::wrap;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormView;

use super::form::render_form;

const BANNER_MARGIN: usize = 4;

/// Appends a bordered error message, followed by the input form so the user
/// can adjust and retry.
///
/// ```text
/// [margin] ┃ ! message wrapped to the
/// [margin] ┃   available width
/// ```
pub fn render_error(out: &mut String, message: &str, form: &FormView, theme: &Theme, cols: usize) {
    let text_width = cols.saturating_sub(BANNER_MARGIN * 2 + 4).max(10);
    let color = Theme::fg(&theme.colors.error_fg);
    let margin = " ".repeat(BANNER_MARGIN);

    out.push('\n');
    for (i, line) in wrap(message, text_width).iter().enumerate() {
        let marker = if i == 0 { "!" } else { " " };
        out.push_str(&format!(
            "{margin}{color}┃ {}{marker}{} {line}\n",
            Theme::bold(),
            Theme::reset()
        ));
    }

    render_form(out, form, theme, cols);
}

//! Header component renderer.
//!
//! This module renders the branding block: the centered product name with its
//! highlighted suffix, followed by the tagline.

use crate::ui::helpers::{display_width, push_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Appends the header block to `out`.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] FridgeChef AI
/// [left padding] tagline
/// ```
///
/// The title uses bold `header_fg`, the accent uses `header_accent`. When the
/// theme sets `header_bg`, the title line is painted across the full width.
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title_len = display_width(&header.title) + 1 + display_width(&header.accent);
    let padding = cols.saturating_sub(title_len) / 2;

    out.push('\n');
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&" ".repeat(padding));
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&header.title);
    out.push(' ');
    out.push_str(&Theme::fg(&theme.colors.header_accent));
    out.push_str(&header.accent);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + title_len)));
    out.push_str(Theme::reset());
    out.push('\n');

    let style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    push_centered(out, &header.tagline, &style, cols);
}

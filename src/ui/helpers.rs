//! Shared rendering utilities and helpers.
//!
//! Components build their output line by line into a `String` buffer. These
//! helpers handle the layout chores they share: measuring, wrapping,
//! truncating and centering text.
//!
//! # Character Widths
//!
//! Widths are counted in `char`s, not bytes, so accented ingredient names and
//! box-drawing characters line up correctly.
//!
//! # Example
//!
//! ```rust
//! use fridgechef::ui::helpers::{truncate, wrap};
//!
//! assert_eq!(wrap("Whisk the eggs until frothy", 12), ["Whisk the", "eggs until", "frothy"]);
//! assert_eq!(truncate("Caramelized onion", 8), "Caramel…");
//! ```

use crate::ui::theme::Theme;

/// Visible width of `text` in columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` columns, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Word-wraps `text` to lines of at most `width` columns.
///
/// Words longer than `width` are split. Always returns at least one line.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_width = display_width(&current);
        if current_width > 0 && current_width + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Appends `text` centered within `cols`, wrapped in `style`.
pub fn push_centered(out: &mut String, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let padding = cols.saturating_sub(display_width(&text)) / 2;

    out.push_str(&" ".repeat(padding));
    out.push_str(style);
    out.push_str(&text);
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends a full-width horizontal rule.
pub fn push_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends an indented, styled section label such as `MISE EN PLACE`.
pub fn push_label(out: &mut String, label: &str, theme: &Theme, indent: usize) {
    out.push_str(&" ".repeat(indent));
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&label.to_uppercase());
    out.push_str(Theme::reset());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("Fold the basil into the warm tomato sauce", 14);
        assert!(lines.iter().all(|line| display_width(line) <= 14));
        assert_eq!(lines.join(" "), "Fold the basil into the warm tomato sauce");
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), ["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_of_empty_text_is_one_empty_line() {
        assert_eq!(wrap("   ", 10), [""]);
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("crème", 5), "crème");
        assert_eq!(truncate("crème fraîche", 6), "crème…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn centered_pads_left() {
        let mut out = String::new();
        push_centered(&mut out, "AI", "", 6);
        assert_eq!(out, format!("  AI{}\n", Theme::reset()));
    }
}

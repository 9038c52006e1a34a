//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Strip ANSI escape sequences, for width math on colored cells.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Display width of a string as the terminal sees it: ANSI codes ignored,
/// wide characters counted properly.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Left-align within `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Right-align within `width` display columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// Hours with two decimals, es: "8.25h".
pub fn format_hours(h: f64) -> String {
    format!("{:.2}h", h)
}

/// Signed hours with one decimal, es: "+2.5h" oppure "-3.0h".
pub fn format_signed_hours(h: f64) -> String {
    if h > 0.0 {
        format!("+{:.1}h", h)
    } else {
        format!("{:.1}h", h)
    }
}

/// Truncate notes for table cells, keeping the ellipsis inside the width.
pub fn truncate_notes(notes: &str, max: usize) -> String {
    if notes.chars().count() <= max {
        return notes.to_string();
    }
    let mut s: String = notes.chars().take(max.saturating_sub(3)).collect();
    s.push_str("...");
    s
}

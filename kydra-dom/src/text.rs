use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate to `max_width` columns, ending with `…` when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

/// Pad (or truncate) `s` to exactly `width` columns with the given alignment.
pub fn fit_to_width(s: &str, width: usize, align: TextAlign) -> String {
    let text = truncate_to_width(s, width);
    let text_width = display_width(&text);
    let left = align_offset(text_width, width, align);
    let right = width.saturating_sub(text_width + left);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Sofia Castro", 6), "Sofia…");
        assert_eq!(truncate_to_width("Ann", 6), "Ann");
        assert_eq!(truncate_to_width("Ann", 0), "");
    }

    #[test]
    fn test_fit_to_width_alignment() {
        assert_eq!(fit_to_width("ab", 6, TextAlign::Left), "ab    ");
        assert_eq!(fit_to_width("ab", 6, TextAlign::Right), "    ab");
        assert_eq!(fit_to_width("ab", 6, TextAlign::Center), "  ab  ");
    }

    #[test]
    fn test_wide_chars_count_double() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(fit_to_width("日本", 5, TextAlign::Left), "日本 ");
    }
}

//! Display-width aware text helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns taken by `text`
pub fn display_width(text: &str) -> u16 {
    text.width().min(u16::MAX as usize) as u16
}

/// Cut `text` to at most `width` columns, marking the cut with "…"
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns. Words wider than a line are cut.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = if word.width() > width {
            truncate_to_width(word, width)
        } else {
            word.to_string()
        };

        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("James", 10), "James");
        assert_eq!(truncate_to_width("The Frozen River", 8), "The Fro…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("The Borrowed Life of Frederick Fife", 22),
            vec!["The Borrowed Life of", "Frederick Fife"]
        );
        assert_eq!(wrap_words("James", 22), vec!["James"]);
        assert!(wrap_words("", 22).is_empty());
    }

    #[test]
    fn test_wrap_cuts_long_words() {
        assert_eq!(wrap_words("Supercalifragilistic", 6), vec!["Super…"]);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("Solito"), 6);
    }
}

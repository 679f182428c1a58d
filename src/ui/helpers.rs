//! UI helper functions

use ratatui::prelude::*;

/// Greedy word wrap on character counts. Never splits a word; a word
/// longer than `max_width` gets its own line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Truncate to `max` characters on a character boundary, with a "..."
/// suffix when anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// First card index to draw so that the selected card's bottom edge fits
/// inside a viewport of the given height. Cards have variable heights.
pub fn first_visible_card(heights: &[u16], selected: usize, viewport: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut start = 0;
    loop {
        let used: u16 = heights[start..=selected].iter().sum();
        if used <= viewport || start == selected {
            return start;
        }
        start += 1;
    }
}

/// Center a rectangle of the given percentage size inside `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello world", 0), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_fits_on_one_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        assert_eq!(wrap_text("hello world foo bar", 10), vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        // Four 3-byte chars fit a width of 5 on one line
        assert_eq!(wrap_text("里程 碑碑", 5), vec!["里程 碑碑"]);
    }

    #[test]
    fn test_truncate_chars_short_text() {
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_chars_adds_ellipsis() {
        assert_eq!(truncate_chars("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_truncate_chars_multibyte_safe() {
        assert_eq!(truncate_chars("需求需求需求", 5), "需求...");
    }

    #[test]
    fn test_first_visible_card_all_fit() {
        assert_eq!(first_visible_card(&[4, 4, 4], 2, 12), 0);
    }

    #[test]
    fn test_first_visible_card_scrolls_to_selection() {
        // Three 4-line cards in an 8-line viewport: selecting the last
        // card pushes the first one off screen.
        assert_eq!(first_visible_card(&[4, 4, 4], 2, 8), 1);
    }

    #[test]
    fn test_first_visible_card_oversized_card() {
        // A card taller than the viewport still gets drawn from its top.
        assert_eq!(first_visible_card(&[4, 20, 4], 1, 8), 1);
    }

    #[test]
    fn test_first_visible_card_empty() {
        assert_eq!(first_visible_card(&[], 0, 8), 0);
    }

    #[test]
    fn test_centered_rect_within_bounds() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(70, 80, area);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
    }
}

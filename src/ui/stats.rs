//! Summary stat card rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::{
    ACCENT, AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, GREEN_SUCCESS, ROUNDED_BORDERS, TEXT_MUTED,
};

/// Render the three summary cards: active, done, blocked.
///
/// `counts` is None before a document has loaded; the cards then show a
/// dash instead of a number.
pub fn render_summary_cards(frame: &mut Frame, area: Rect, counts: Option<(usize, usize, usize)>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let cards: [(String, &str, Color); 3] = match counts {
        Some((active, done, blocked)) => [
            (active.to_string(), "ACTIVE", ACCENT),
            (done.to_string(), "DONE", GREEN_SUCCESS),
            (blocked.to_string(), "BLOCKED", AMBER_WARNING),
        ],
        None => [
            ("-".to_string(), "ACTIVE", TEXT_MUTED),
            ("-".to_string(), "DONE", TEXT_MUTED),
            ("-".to_string(), "BLOCKED", TEXT_MUTED),
        ],
    };

    for (slot, (value, label, color)) in layout.iter().zip(cards) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY));

        let content = vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(TEXT_MUTED))),
        ];

        let card = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(card, *slot);
    }
}

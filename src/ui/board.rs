//! Board column and item card rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::{first_visible_card, truncate_chars};
use crate::models::{ItemStatus, RoadmapDocument, RoadmapItem};
use crate::theme::{
    ACCENT, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, GREEN_SUCCESS, RED_ERROR, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, priority_color, status_color,
};

/// Screen region occupied by a rendered card, for mouse hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct CardHit {
    pub area: Rect,
    pub id: String,
}

/// Total card height including borders. Must stay in sync with
/// [`card_lines`]: title and badge lines always, goal and blocker lines
/// when present.
pub fn card_height(item: &RoadmapItem) -> u16 {
    let mut content = 2;
    if item.goal_line().is_some() {
        content += 1;
    }
    if item.is_blocked() {
        content += 1;
    }
    content + 2
}

fn indicator(item: &RoadmapItem) -> (&'static str, Color) {
    if item.is_blocked() {
        return ("⏸", RED_ERROR);
    }
    match item.status {
        ItemStatus::Done => ("●", GREEN_SUCCESS),
        ItemStatus::InProgress => ("●", ACCENT),
        _ => ("○", TEXT_MUTED),
    }
}

/// Build the card body for one item. The id and title always appear
/// verbatim (the title is truncated only when it exceeds `inner_width`).
pub fn card_lines(item: &RoadmapItem, inner_width: u16) -> Vec<Line<'static>> {
    let width = inner_width as usize;
    let (glyph, glyph_color) = indicator(item);

    let head_used = 2 + item.id.chars().count() + 1;
    let title = truncate_chars(&item.title, width.saturating_sub(head_used));
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{glyph} "), Style::default().fg(glyph_color)),
        Span::styled(
            format!("{} ", item.id),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(title, Style::default().fg(TEXT_PRIMARY)),
    ])];

    // Blocked takes visual precedence over the document status
    let (status_text, badge_color) = if item.is_blocked() {
        ("Blocked".to_string(), RED_ERROR)
    } else {
        (item.status.label().to_string(), status_color(&item.status))
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("[{}] ", item.priority.as_str()),
            Style::default()
                .fg(priority_color(&item.priority))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(status_text, Style::default().fg(badge_color)),
    ]));

    if let Some(goal) = item.goal_line() {
        lines.push(Line::from(Span::styled(
            truncate_chars(goal, width),
            Style::default().fg(TEXT_SECONDARY),
        )));
    }

    if let Some(reason) = item.blocked.as_deref().filter(|r| !r.is_empty()) {
        lines.push(Line::from(Span::styled(
            format!("⏸ {}", truncate_chars(reason, width.saturating_sub(2))),
            Style::default().fg(RED_ERROR),
        )));
    }

    lines
}

/// Render the two board columns (Active / Done) and report the card hit
/// areas for mouse dispatch. With no document loaded, both columns show
/// their empty-state placeholder.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    doc: Option<&RoadmapDocument>,
    selected_id: Option<&str>,
) -> Vec<CardHit> {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut hits = Vec::new();
    match doc {
        Some(doc) => {
            let active = doc.active_items();
            let done = doc.done_items();
            render_column(
                frame,
                columns[0],
                &format!(" Active ({}) ", active.len()),
                "No active items",
                &active,
                selected_id,
                &mut hits,
            );
            render_column(
                frame,
                columns[1],
                &format!(" Done ({}) ", done.len()),
                "No completed items",
                &done,
                selected_id,
                &mut hits,
            );
        }
        None => {
            render_column(frame, columns[0], " Active ", "No data", &[], None, &mut hits);
            render_column(frame, columns[1], " Done ", "No data", &[], None, &mut hits);
        }
    }
    hits
}

fn render_column(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    placeholder: &str,
    items: &[&RoadmapItem],
    selected_id: Option<&str>,
    hits: &mut Vec<CardHit>,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if items.is_empty() {
        let empty = Paragraph::new(placeholder.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(TEXT_MUTED));
        frame.render_widget(empty, inner);
        return;
    }

    let heights: Vec<u16> = items.iter().map(|i| card_height(i)).collect();
    let selected_pos = selected_id
        .and_then(|id| items.iter().position(|i| i.id == id))
        .unwrap_or(0);
    let first = first_visible_card(&heights, selected_pos, inner.height);

    let mut y = inner.y;
    for (item, height) in items.iter().zip(&heights).skip(first) {
        if y + height > inner.bottom() {
            break;
        }
        let card_area = Rect::new(inner.x, y, inner.width, *height);
        let selected = selected_id == Some(item.id.as_str());
        let card_block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(if selected { ACCENT } else { BORDER_SUBTLE }))
            .style(Style::default().bg(if selected { BG_TERTIARY } else { BG_SECONDARY }));

        let content_width = card_area.width.saturating_sub(2);
        let card = Paragraph::new(card_lines(item, content_width)).block(card_block);
        frame.render_widget(card, card_area);

        hits.push(CardHit {
            area: card_area,
            id: item.id.clone(),
        });
        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_from(json: &str) -> RoadmapItem {
        serde_json::from_str(json).unwrap()
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_card_contains_id_and_title_verbatim() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "HIGH", "status": "IN_PROGRESS"}"#,
        );
        let lines = card_lines(&item, 40);
        let head = line_text(&lines[0]);
        assert!(head.contains("A1"));
        assert!(head.contains("X"));
    }

    #[test]
    fn test_card_shows_priority_badge_and_status_label() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "HIGH", "status": "IN_PROGRESS"}"#,
        );
        let lines = card_lines(&item, 40);
        let badges = line_text(&lines[1]);
        assert!(badges.contains("[HIGH]"));
        assert!(badges.contains("In Progress"));
    }

    #[test]
    fn test_card_unknown_status_passes_through() {
        let item =
            item_from(r#"{"id": "A1", "title": "X", "priority": "HIGH", "status": "ON_HOLD"}"#);
        let lines = card_lines(&item, 40);
        assert!(line_text(&lines[1]).contains("ON_HOLD"));
    }

    #[test]
    fn test_blocked_overrides_status_on_card() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "HIGH", "status": "IN_PROGRESS",
                "blocked": "waiting on legal"}"#,
        );
        let lines = card_lines(&item, 60);
        assert!(line_text(&lines[1]).contains("Blocked"));
        assert!(!line_text(&lines[1]).contains("In Progress"));
        assert!(line_text(&lines[2]).contains("waiting on legal"));
    }

    #[test]
    fn test_card_goal_summary_line() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "LOW", "status": "READY",
                "goalSummary": "double conversion"}"#,
        );
        let lines = card_lines(&item, 60);
        assert!(line_text(&lines[2]).contains("double conversion"));
    }

    #[test]
    fn test_card_height_tracks_optional_lines() {
        let bare =
            item_from(r#"{"id": "A1", "title": "X", "priority": "LOW", "status": "READY"}"#);
        let full = item_from(
            r#"{"id": "A2", "title": "Y", "priority": "LOW", "status": "READY",
                "goalSummary": "g", "blocked": "b"}"#,
        );
        assert_eq!(card_height(&bare), 4);
        assert_eq!(card_height(&full), 6);
        assert_eq!(card_lines(&bare, 40).len() as u16 + 2, card_height(&bare));
        assert_eq!(card_lines(&full, 40).len() as u16 + 2, card_height(&full));
    }

    #[test]
    fn test_card_truncates_long_titles_on_char_boundary() {
        let item = item_from(
            r#"{"id": "A1", "title": "需求需求需求需求需求需求需求需求", "priority": "LOW",
                "status": "READY"}"#,
        );
        let lines = card_lines(&item, 16);
        let head = line_text(&lines[0]);
        assert!(head.ends_with("..."));
        assert!(head.contains("A1"));
    }
}

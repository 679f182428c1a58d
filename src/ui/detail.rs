//! Detail overlay rendering for a single roadmap item

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::helpers::{centered_rect, truncate_chars, wrap_text};
use crate::models::RoadmapItem;
use crate::theme::{
    ACCENT, BG_PRIMARY, RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
    milestone_color,
};

/// Build the overlay body as pre-wrapped lines so scrolling operates on
/// display rows. `width` is the usable inner width in columns.
///
/// Every optional collection renders an explicit placeholder line when
/// absent or empty; sections are never silently omitted.
pub fn detail_lines(item: &RoadmapItem, last_updated: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let status_text = if item.is_blocked() {
        "Blocked"
    } else {
        item.status.label()
    };
    lines.push(Line::from(Span::styled(
        format!("{} · {} · {}", item.id, item.priority.as_str(), status_text),
        Style::default().fg(TEXT_SECONDARY),
    )));

    if let Some(progress) = item.progress {
        lines.push(Line::from(Span::styled(
            format!("Progress: {}%", progress.min(100)),
            Style::default().fg(TEXT_MUTED),
        )));
    }

    if let Some(url) = item.doc_url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(Line::from(Span::styled(
            format!("Doc: {url}"),
            Style::default().fg(ACCENT),
        )));
    }

    if let Some(reason) = item.blocked.as_deref().filter(|r| !r.is_empty()) {
        lines.push(Line::default());
        for row in wrap_text(&format!("⏸ {reason}"), width) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(RED_ERROR),
            )));
        }
    }

    push_section(&mut lines, "Goals");
    if item.goals.is_empty() {
        push_placeholder(&mut lines, "No goals recorded");
    } else {
        for goal in &item.goals {
            push_bullet(&mut lines, goal, width);
        }
    }

    push_section(&mut lines, "Milestones");
    if item.milestones.is_empty() {
        push_placeholder(&mut lines, "No milestones");
    } else {
        for milestone in &item.milestones {
            let mut spans = vec![
                Span::styled(
                    format!("{} ", milestone.status.glyph()),
                    Style::default().fg(milestone_color(&milestone.status)),
                ),
                Span::styled(milestone.name.clone(), Style::default().fg(TEXT_PRIMARY)),
            ];
            if let Some(date) = &milestone.date {
                spans.push(Span::styled(
                    format!("  {date}"),
                    Style::default().fg(TEXT_MUTED),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    push_section(&mut lines, "Todos");
    if item.todos.is_empty() {
        push_placeholder(&mut lines, "No open todos");
    } else {
        for todo in &item.todos {
            push_bullet(&mut lines, todo, width);
        }
    }

    push_section(&mut lines, "Competitor activity");
    match item.competitors.as_ref().filter(|c| !c.items.is_empty()) {
        Some(feed) => {
            let updated = feed.update_time.as_deref().unwrap_or(last_updated);
            lines.push(Line::from(Span::styled(
                format!("Updated: {updated}"),
                Style::default().fg(TEXT_MUTED),
            )));
            for note in &feed.items {
                lines.push(Line::from(Span::styled(
                    note.source.clone(),
                    Style::default()
                        .fg(TEXT_SECONDARY)
                        .add_modifier(Modifier::BOLD),
                )));
                for row in wrap_text(&note.content, width) {
                    lines.push(Line::from(Span::styled(
                        row,
                        Style::default().fg(TEXT_PRIMARY),
                    )));
                }
            }
        }
        None => push_placeholder(&mut lines, "No recent competitor activity"),
    }

    push_section(&mut lines, "User feedback");
    match item.feedback.as_ref().filter(|f| !f.items.is_empty()) {
        Some(feed) => {
            if let Some(source) = feed.source.as_deref().filter(|s| !s.is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("Source: {source}"),
                    Style::default().fg(TEXT_MUTED),
                )));
            }
            for note in &feed.items {
                for (i, row) in wrap_text(&note.content, width.saturating_sub(3))
                    .into_iter()
                    .enumerate()
                {
                    let prefix = if i == 0 {
                        format!("{} ", note.kind.glyph())
                    } else {
                        "   ".to_string()
                    };
                    lines.push(Line::from(vec![
                        Span::raw(prefix),
                        Span::styled(row, Style::default().fg(TEXT_PRIMARY)),
                    ]));
                }
            }
        }
        None => push_placeholder(&mut lines, "No recent user feedback"),
    }

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
}

fn push_placeholder(lines: &mut Vec<Line<'static>>, text: &str) {
    lines.push(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(TEXT_MUTED),
    )));
}

fn push_bullet(lines: &mut Vec<Line<'static>>, text: &str, width: usize) {
    for (i, row) in wrap_text(text, width.saturating_sub(2)).into_iter().enumerate() {
        let prefix = if i == 0 { "• " } else { "  " };
        lines.push(Line::from(vec![
            Span::raw(prefix.to_string()),
            Span::styled(row, Style::default().fg(TEXT_PRIMARY)),
        ]));
    }
}

/// Render the overlay centered over the whole frame. Returns the popup
/// rectangle (for outside-click detection) and the maximum useful scroll
/// offset for the body.
pub fn render_detail(
    frame: &mut Frame,
    item: &RoadmapItem,
    scroll: u16,
    last_updated: &str,
) -> (Rect, u16) {
    let popup = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, popup);

    let title = format!(
        " {} ",
        truncate_chars(&item.title, popup.width.saturating_sub(4) as usize)
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(BG_PRIMARY));
    let inner = block.inner(popup);

    let lines = detail_lines(item, last_updated, inner.width as usize);
    let max_scroll = (lines.len() as u16).saturating_sub(inner.height);

    let body = Paragraph::new(lines)
        .block(block)
        .scroll((scroll.min(max_scroll), 0));
    frame.render_widget(body, popup);

    (popup, max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_from(json: &str) -> RoadmapItem {
        serde_json::from_str(json).unwrap()
    }

    fn body_text(item: &RoadmapItem) -> String {
        detail_lines(item, "2024-01-01", 60)
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_detail_shows_goals_and_milestone_glyph() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "HIGH", "status": "IN_PROGRESS",
                "goals": ["g1"],
                "milestones": [{"name": "m1", "status": "done"}]}"#,
        );
        let text = body_text(&item);
        assert!(text.contains("g1"));
        assert!(text.contains("✓ m1"));
        assert!(text.contains("A1 · HIGH · In Progress"));
    }

    #[test]
    fn test_detail_absent_collections_render_placeholders() {
        let item =
            item_from(r#"{"id": "A1", "title": "X", "priority": "LOW", "status": "READY"}"#);
        let text = body_text(&item);
        assert!(text.contains("No goals recorded"));
        assert!(text.contains("No milestones"));
        assert!(text.contains("No open todos"));
        assert!(text.contains("No recent competitor activity"));
        assert!(text.contains("No recent user feedback"));
    }

    #[test]
    fn test_detail_blocked_banner_and_precedence() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "LOW", "status": "IN_PROGRESS",
                "blocked": "vendor contract pending"}"#,
        );
        let text = body_text(&item);
        assert!(text.contains("A1 · LOW · Blocked"));
        assert!(text.contains("⏸ vendor contract pending"));
    }

    #[test]
    fn test_detail_milestone_date_and_unknown_glyph() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "LOW", "status": "READY",
                "milestones": [{"name": "beta", "status": "someday", "date": "2024-06-01"}]}"#,
        );
        let text = body_text(&item);
        assert!(text.contains("○ beta"));
        assert!(text.contains("2024-06-01"));
    }

    #[test]
    fn test_detail_competitor_feed_falls_back_to_document_date() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "LOW", "status": "READY",
                "competitors": {"items": [{"source": "Rival", "content": "shipped v2"}]}}"#,
        );
        let text = body_text(&item);
        assert!(text.contains("Updated: 2024-01-01"));
        assert!(text.contains("Rival"));
        assert!(text.contains("shipped v2"));
    }

    #[test]
    fn test_detail_feedback_glyphs_and_source() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "LOW", "status": "READY",
                "feedback": {"source": "forum",
                             "items": [{"content": "love it", "type": "positive"},
                                       {"content": "too slow", "type": "negative"}]}}"#,
        );
        let text = body_text(&item);
        assert!(text.contains("Source: forum"));
        assert!(text.contains("👍 love it"));
        assert!(text.contains("👎 too slow"));
    }

    #[test]
    fn test_detail_doc_link_and_progress() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "LOW", "status": "READY",
                "progress": 42, "docUrl": "https://docs.example/a1"}"#,
        );
        let text = body_text(&item);
        assert!(text.contains("Progress: 42%"));
        assert!(text.contains("Doc: https://docs.example/a1"));
    }

    #[test]
    fn test_detail_empty_feedback_items_treated_as_absent() {
        let item = item_from(
            r#"{"id": "A1", "title": "X", "priority": "LOW", "status": "READY",
                "feedback": {"source": "forum", "items": []},
                "competitors": {"items": []}}"#,
        );
        let text = body_text(&item);
        assert!(text.contains("No recent user feedback"));
        assert!(text.contains("No recent competitor activity"));
    }
}

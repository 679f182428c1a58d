//! UI rendering for the roadmap dashboard.
//!
//! Line-building functions are pure and unit-tested; the frame wrappers
//! around them only do layout and widget placement.

mod board;
mod detail;
mod helpers;
mod stats;

pub use board::CardHit;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::{App, DetailState};
use crate::theme::{ACCENT, TEXT_PRIMARY};

/// Draw one full frame: header, summary cards, board, key hints, and the
/// detail overlay when open. Records card and overlay hit areas on the
/// app for mouse dispatch.
pub fn render(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(4), // Summary cards
            Constraint::Min(5),    // Board
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let header = match &app.document {
        Some(doc) => format!(" Product Roadmap · updated {}", doc.last_updated),
        None => " Product Roadmap".to_string(),
    };
    frame.render_widget(
        Paragraph::new(header).style(
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        rows[0],
    );

    let counts = app
        .document
        .as_ref()
        .map(|d| (d.active_items().len(), d.done_items().len(), d.blocked_count()));
    stats::render_summary_cards(frame, rows[1], counts);

    let selected_id = app.selected_id().map(str::to_string);
    let hits = board::render_board(frame, rows[2], app.document.as_ref(), selected_id.as_deref());
    app.card_hits = hits;

    let hints = match app.detail {
        DetailState::Open { .. } => " ↑/↓ scroll · PgUp/PgDn page · Esc close ",
        DetailState::Closed => " ↑/↓ select · Enter details · q quit ",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::Black).bg(ACCENT)),
        rows[3],
    );

    let mut overlay = None;
    if let DetailState::Open { id, scroll } = &app.detail {
        if let Some(doc) = app.document.as_ref() {
            if let Some(item) = doc.find_item(id) {
                overlay = Some(detail::render_detail(frame, item, *scroll, &doc.last_updated));
            }
        }
    }
    match overlay {
        Some((popup, max_scroll)) => {
            app.detail_area = Some(popup);
            app.clamp_detail_scroll(max_scroll);
        }
        None => app.detail_area = None,
    }
}

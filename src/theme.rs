//! Theme module for the roadmap dashboard.
//!
//! Centralized color palette and styling constants, plus the mapping from
//! domain states (priority, status) to colors.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::models::{ItemStatus, MilestoneStatus, Priority};

/// Border set used by every card and panel.
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0d1117)
pub const BG_PRIMARY: Color = Color::Rgb(13, 17, 23);

/// Card background color (#161b22)
pub const BG_SECONDARY: Color = Color::Rgb(22, 27, 34);

/// Highlighted card background (#1f2630)
pub const BG_TERTIARY: Color = Color::Rgb(31, 38, 48);

/// Subtle border color (#30363d)
pub const BORDER_SUBTLE: Color = Color::Rgb(48, 54, 61);

// ============================================================================
// Accent & Status Colors
// ============================================================================

/// Primary accent color (#58a6ff)
pub const ACCENT: Color = Color::Rgb(88, 166, 255);

/// Green success color (#3fb950)
pub const GREEN_SUCCESS: Color = Color::Rgb(63, 185, 80);

/// Amber warning color (#d29922)
pub const AMBER_WARNING: Color = Color::Rgb(210, 153, 34);

/// Red error color (#f85149)
pub const RED_ERROR: Color = Color::Rgb(248, 81, 73);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e6edf3)
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 237, 243);

/// Secondary text color (#9198a1)
pub const TEXT_SECONDARY: Color = Color::Rgb(145, 152, 161);

/// Muted text color, for labels and hints (#6e7681)
pub const TEXT_MUTED: Color = Color::Rgb(110, 118, 129);

/// Badge color for a priority level.
pub fn priority_color(priority: &Priority) -> Color {
    match priority {
        Priority::High => RED_ERROR,
        Priority::Medium => AMBER_WARNING,
        Priority::Low | Priority::Other(_) => TEXT_SECONDARY,
    }
}

/// Label color for an item status.
pub fn status_color(status: &ItemStatus) -> Color {
    match status {
        ItemStatus::InProgress => ACCENT,
        ItemStatus::Ready => AMBER_WARNING,
        ItemStatus::Done => GREEN_SUCCESS,
        ItemStatus::Blocked => RED_ERROR,
        ItemStatus::Other(_) => TEXT_SECONDARY,
    }
}

/// Glyph color for a milestone status.
pub fn milestone_color(status: &MilestoneStatus) -> Color {
    match status {
        MilestoneStatus::Done => GREEN_SUCCESS,
        MilestoneStatus::InProgress => ACCENT,
        MilestoneStatus::Blocked => RED_ERROR,
        MilestoneStatus::Waiting | MilestoneStatus::Pending | MilestoneStatus::Other(_) => {
            TEXT_MUTED
        }
    }
}

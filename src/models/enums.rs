//! Status, priority, and feedback enums for roadmap items.
//!
//! These are open enums: recognized values get typed variants, anything
//! else is carried through as the raw string so an unfamiliar status
//! renders as itself instead of failing the whole load.

use serde::Deserialize;

/// Item delivery status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ItemStatus {
    InProgress,
    Ready,
    Done,
    Blocked,
    /// Unrecognized status, kept verbatim.
    Other(String),
}

impl From<String> for ItemStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "IN_PROGRESS" => ItemStatus::InProgress,
            "READY" => ItemStatus::Ready,
            "DONE" => ItemStatus::Done,
            "BLOCKED" => ItemStatus::Blocked,
            _ => ItemStatus::Other(raw),
        }
    }
}

impl ItemStatus {
    /// Display label. Unknown statuses pass through unchanged.
    pub fn label(&self) -> &str {
        match self {
            ItemStatus::InProgress => "In Progress",
            ItemStatus::Ready => "Ready",
            ItemStatus::Done => "Done",
            ItemStatus::Blocked => "Blocked",
            ItemStatus::Other(raw) => raw,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, ItemStatus::Done)
    }
}

/// Item priority.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
    /// Unrecognized priority, kept verbatim.
    Other(String),
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "LOW" => Priority::Low,
            "MEDIUM" => Priority::Medium,
            "HIGH" => Priority::High,
            _ => Priority::Other(raw),
        }
    }
}

impl Priority {
    /// Badge text, exactly as it appeared in the document.
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Other(raw) => raw,
        }
    }
}

/// Milestone status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum MilestoneStatus {
    Done,
    InProgress,
    Waiting,
    Blocked,
    Pending,
    Other(String),
}

impl From<String> for MilestoneStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "done" => MilestoneStatus::Done,
            "in_progress" => MilestoneStatus::InProgress,
            "waiting" => MilestoneStatus::Waiting,
            "blocked" => MilestoneStatus::Blocked,
            "pending" => MilestoneStatus::Pending,
            _ => MilestoneStatus::Other(raw),
        }
    }
}

impl MilestoneStatus {
    /// Checkpoint glyph. Statuses without a dedicated glyph fall back to ○.
    pub fn glyph(&self) -> &'static str {
        match self {
            MilestoneStatus::Done => "✓",
            MilestoneStatus::InProgress => "◐",
            MilestoneStatus::Pending => "⏳",
            MilestoneStatus::Blocked => "⏸",
            MilestoneStatus::Waiting | MilestoneStatus::Other(_) => "○",
        }
    }
}

/// Sentiment attached to a piece of user feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FeedbackKind {
    Positive,
    Negative,
    #[default]
    Neutral,
    Other(String),
}

impl From<String> for FeedbackKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "positive" => FeedbackKind::Positive,
            "negative" => FeedbackKind::Negative,
            "neutral" => FeedbackKind::Neutral,
            _ => FeedbackKind::Other(raw),
        }
    }
}

impl FeedbackKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            FeedbackKind::Positive => "👍",
            FeedbackKind::Negative => "👎",
            FeedbackKind::Neutral => "💡",
            FeedbackKind::Other(_) => "💬",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_status_known_values() {
        assert_eq!(ItemStatus::from("IN_PROGRESS".to_string()), ItemStatus::InProgress);
        assert_eq!(ItemStatus::from("DONE".to_string()), ItemStatus::Done);
        assert_eq!(ItemStatus::InProgress.label(), "In Progress");
        assert!(ItemStatus::Done.is_done());
        assert!(!ItemStatus::Ready.is_done());
    }

    #[test]
    fn test_item_status_passthrough() {
        let status = ItemStatus::from("ON_HOLD".to_string());
        assert_eq!(status, ItemStatus::Other("ON_HOLD".to_string()));
        assert_eq!(status.label(), "ON_HOLD");
    }

    #[test]
    fn test_item_status_deserialize() {
        let status: ItemStatus = serde_json::from_str(r#""READY""#).unwrap();
        assert_eq!(status, ItemStatus::Ready);
        let other: ItemStatus = serde_json::from_str(r#""SHIPPED""#).unwrap();
        assert_eq!(other.label(), "SHIPPED");
    }

    #[test]
    fn test_priority_badge_text() {
        assert_eq!(Priority::from("HIGH".to_string()).as_str(), "HIGH");
        assert_eq!(Priority::from("P0".to_string()).as_str(), "P0");
    }

    #[test]
    fn test_milestone_glyphs() {
        assert_eq!(MilestoneStatus::from("done".to_string()).glyph(), "✓");
        assert_eq!(MilestoneStatus::from("in_progress".to_string()).glyph(), "◐");
        assert_eq!(MilestoneStatus::from("pending".to_string()).glyph(), "⏳");
        assert_eq!(MilestoneStatus::from("blocked".to_string()).glyph(), "⏸");
    }

    #[test]
    fn test_milestone_glyph_defaults_to_circle() {
        assert_eq!(MilestoneStatus::from("waiting".to_string()).glyph(), "○");
        assert_eq!(MilestoneStatus::from("scheduled".to_string()).glyph(), "○");
        assert_eq!(MilestoneStatus::from("".to_string()).glyph(), "○");
    }

    #[test]
    fn test_feedback_kind_glyphs() {
        assert_eq!(FeedbackKind::from("positive".to_string()).glyph(), "👍");
        assert_eq!(FeedbackKind::from("negative".to_string()).glyph(), "👎");
        assert_eq!(FeedbackKind::from("neutral".to_string()).glyph(), "💡");
        assert_eq!(FeedbackKind::from("mixed".to_string()).glyph(), "💬");
        assert_eq!(FeedbackKind::default(), FeedbackKind::Neutral);
    }
}

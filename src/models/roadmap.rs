//! Roadmap document data structures.
//!
//! This module contains the core data structures for loading and querying
//! roadmap.json documents. The document is a flat ordered list of items;
//! board grouping is derived from item status at render time.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::enums::{FeedbackKind, ItemStatus, MilestoneStatus, Priority};

/// Failure loading a roadmap document.
///
/// All variants are handled identically at the boundary: the error is
/// logged and the dashboard starts in its empty state. No retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read roadmap: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse roadmap: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid roadmap: {0}")]
    Invalid(String),
}

/// A dated or undated checkpoint within an item's delivery plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub status: MilestoneStatus,
    #[serde(default)]
    pub date: Option<String>,
}

/// One competitor observation attached to an item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompetitorNote {
    pub source: String,
    pub content: String,
}

/// Competitor activity feed for an item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorFeed {
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default)]
    pub items: Vec<CompetitorNote>,
}

/// One piece of user feedback.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedbackNote {
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: FeedbackKind,
}

/// User feedback feed for an item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedbackFeed {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub items: Vec<FeedbackNote>,
}

/// One tracked product initiative.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub status: ItemStatus,
    /// Free-text blocker reason, independent of `status`. A non-empty
    /// value takes visual precedence over the status everywhere.
    #[serde(default)]
    pub blocked: Option<String>,
    /// Completion percentage, 0-100.
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub goal_summary: Option<String>,
    #[serde(default)]
    pub doc_url: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub todos: Vec<String>,
    #[serde(default)]
    pub competitors: Option<CompetitorFeed>,
    #[serde(default)]
    pub feedback: Option<FeedbackFeed>,
}

impl RoadmapItem {
    /// An item counts as blocked when it carries a non-empty blocker reason.
    pub fn is_blocked(&self) -> bool {
        self.blocked.as_deref().is_some_and(|r| !r.is_empty())
    }

    /// Goal summary, with an empty string treated the same as absent.
    pub fn goal_line(&self) -> Option<&str> {
        self.goal_summary.as_deref().filter(|g| !g.is_empty())
    }
}

/// Roadmap document structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapDocument {
    pub last_updated: String,
    pub items: Vec<RoadmapItem>,
}

impl RoadmapDocument {
    /// Load a roadmap from a JSON file and check document invariants.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let doc: RoadmapDocument = serde_json::from_str(&content)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Document invariants: unique ids, non-empty titles.
    fn validate(&self) -> Result<(), LoadError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if item.title.trim().is_empty() {
                return Err(LoadError::Invalid(format!(
                    "item {} has an empty title",
                    item.id
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(LoadError::Invalid(format!("duplicate item id {}", item.id)));
            }
        }
        Ok(())
    }

    /// Items still being worked (anything not DONE), in document order.
    pub fn active_items(&self) -> Vec<&RoadmapItem> {
        self.items.iter().filter(|i| !i.status.is_done()).collect()
    }

    /// Finished items, in document order.
    pub fn done_items(&self) -> Vec<&RoadmapItem> {
        self.items.iter().filter(|i| i.status.is_done()).collect()
    }

    /// Count of items carrying a blocker reason.
    pub fn blocked_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_blocked()).count()
    }

    /// Look up an item by id. Linear scan; documents hold tens of items.
    pub fn find_item(&self, id: &str) -> Option<&RoadmapItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

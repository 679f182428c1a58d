//! Data models for the roadmap dashboard.
//!
//! This module contains the core data structures:
//! - Roadmap document and item types for loading roadmap.json
//! - Open enums for status, priority, and feedback sentiment

pub mod enums;
pub mod roadmap;

// Re-exports for convenient access
pub use enums::{FeedbackKind, ItemStatus, MilestoneStatus, Priority};
pub use roadmap::{
    CompetitorFeed, CompetitorNote, FeedbackFeed, FeedbackNote, LoadError, Milestone,
    RoadmapDocument, RoadmapItem,
};

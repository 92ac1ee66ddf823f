//! Story analytics value objects
//!
//! These derive serde because they are returned as-is by the analytics API
//! and stored alongside generated stories.

use serde::{Deserialize, Serialize};

/// Descriptive statistics for a piece of generated prose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryAnalytics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub avg_sentence_length: f64,
    pub dialogue_exchange_count: usize,
    pub estimated_read_minutes: usize,
}

/// How much physical movement the prose describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionLevel {
    Low,
    Medium,
    High,
}

/// Coarse pacing derived from words per sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pacing {
    Fast,
    Moderate,
}

/// Style classification shown next to a story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub dialogue_exchanges: usize,
    pub action_level: ActionLevel,
    pub pacing: Pacing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingDifficulty {
    Easy,
    Intermediate,
    Advanced,
}

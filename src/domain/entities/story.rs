//! Generated story entity - one completed request/response cycle

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{GenerationParameters, StoryAnalytics, StoryId, StyleProfile};

/// A story returned by the text-generation API, together with the
/// parameters it was requested with and the analytics derived from it.
///
/// This is the tuple handed to whatever stores or displays stories; the
/// engine itself never persists it.
#[derive(Debug, Clone)]
pub struct GeneratedStory {
    pub id: StoryId,
    pub parameters: GenerationParameters,
    pub content: String,
    pub analytics: StoryAnalytics,
    pub style: StyleProfile,
    /// Model that produced the text, as reported by the API
    pub model: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedStory {
    pub fn new(
        parameters: GenerationParameters,
        content: impl Into<String>,
        analytics: StoryAnalytics,
        style: StyleProfile,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: StoryId::new(),
            parameters,
            content: content.into(),
            analytics,
            style,
            model: model.into(),
            created_at: Utc::now(),
        }
    }

    /// Short label for story lists, e.g. "Medium/Dark/First Person"
    pub fn settings_label(&self) -> String {
        format!(
            "{}/{}/{}",
            self.parameters.length, self.parameters.tone, self.parameters.point_of_view
        )
    }
}

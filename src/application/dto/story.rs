use serde::{Deserialize, Serialize};

use crate::application::services::catalog::StoryProfile;
use crate::domain::entities::GeneratedStory;
use crate::domain::value_objects::{
    GenerationParameters, Genre, ParameterError, StoryAnalytics, StoryElements, StyleProfile,
    Tone,
};

/// Story request as submitted by clients, using display labels
#[derive(Debug, Clone, Deserialize)]
pub struct StoryRequestDto {
    pub concept: String,
    pub genre: String,
    pub length: String,
    pub tone: String,
    pub point_of_view: String,
    pub creativity: f64,
    #[serde(default)]
    pub time_period: Option<String>,
    #[serde(default)]
    pub emotional_core: Option<String>,
    #[serde(default)]
    pub narrative_structure: Option<String>,
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub include_twist: Option<bool>,
}

/// Blank strings count as "not chosen"
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<StoryRequestDto> for GenerationParameters {
    type Error = ParameterError;

    fn try_from(dto: StoryRequestDto) -> Result<Self, Self::Error> {
        let params = GenerationParameters::new(
            dto.concept,
            Genre::from_label(&dto.genre),
            dto.length.parse()?,
            Tone::from_label(&dto.tone),
            dto.point_of_view.parse()?,
            dto.creativity,
        );

        Ok(params.with_elements(StoryElements {
            time_period: non_blank(dto.time_period),
            emotional_core: non_blank(dto.emotional_core),
            narrative_structure: non_blank(dto.narrative_structure),
            complexity: non_blank(dto.complexity),
            include_twist: dto.include_twist,
        }))
    }
}

#[derive(Debug, Serialize)]
pub struct StoryResponseDto {
    pub id: String,
    pub content: String,
    pub concept: String,
    pub genre: String,
    pub length: String,
    pub tone: String,
    pub point_of_view: String,
    pub creativity: f64,
    /// e.g. "Medium/Dark/First Person"
    pub settings: String,
    pub model: String,
    pub analytics: StoryAnalytics,
    pub style: StyleProfile,
    pub created_at: String,
}

impl From<GeneratedStory> for StoryResponseDto {
    fn from(story: GeneratedStory) -> Self {
        let settings = story.settings_label();
        let params = story.parameters;
        Self {
            id: story.id.to_string(),
            content: story.content,
            concept: params.concept,
            genre: params.genre.to_string(),
            length: params.length.to_string(),
            tone: params.tone.to_string(),
            point_of_view: params.point_of_view.to_string(),
            creativity: params.creativity,
            settings,
            model: story.model,
            analytics: story.analytics,
            style: story.style,
            created_at: story.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComposeResponseDto {
    pub prompt: String,
    pub profile: StoryProfile,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsRequestDto {
    pub text: String,
    #[serde(default)]
    pub keyword_limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::llm::CreativityTier;
    use crate::domain::value_objects::{ActionLevel, Pacing, PointOfView, StoryLength};

    fn dto() -> StoryRequestDto {
        serde_json::from_value(serde_json::json!({
            "concept": "A clockmaker builds a heart",
            "genre": "Science Fiction",
            "length": "Long",
            "tone": "Light-hearted",
            "point_of_view": "Third Person",
            "creativity": 0.8,
            "time_period": "  ",
            "complexity": "Layered"
        }))
        .unwrap()
    }

    #[test]
    fn test_request_converts_labels() {
        let params = GenerationParameters::try_from(dto()).unwrap();

        assert_eq!(params.genre, Genre::ScienceFiction);
        assert_eq!(params.length, StoryLength::Long);
        assert_eq!(params.tone, Tone::LightHearted);
        assert_eq!(params.point_of_view, PointOfView::ThirdPerson);
        assert_eq!(params.elements.time_period, None);
        assert_eq!(params.elements.complexity.as_deref(), Some("Layered"));
        assert_eq!(params.elements.include_twist, None);
    }

    #[test]
    fn test_creativity_keeps_full_precision() {
        let mut request = dto();
        request.creativity = 0.80000001;
        let params = GenerationParameters::try_from(request).unwrap();

        assert_eq!(params.creativity, 0.80000001);
        assert_eq!(
            CreativityTier::from_level(params.creativity),
            CreativityTier::Maximum
        );
    }

    #[test]
    fn test_unknown_genre_is_kept() {
        let mut request = dto();
        request.genre = "Western".to_string();
        let params = GenerationParameters::try_from(request).unwrap();
        assert_eq!(params.genre, Genre::Other("Western".to_string()));
    }

    #[test]
    fn test_unknown_point_of_view_is_rejected() {
        let mut request = dto();
        request.point_of_view = "Second Person".to_string();
        assert_eq!(
            GenerationParameters::try_from(request),
            Err(ParameterError::UnknownPointOfView("Second Person".to_string()))
        );
    }

    #[test]
    fn test_story_response_flattens_parameters() {
        let params = GenerationParameters::try_from(dto()).unwrap();
        let analytics = StoryAnalytics {
            word_count: 3,
            sentence_count: 1,
            paragraph_count: 1,
            avg_sentence_length: 3.0,
            dialogue_exchange_count: 0,
            estimated_read_minutes: 1,
        };
        let style = StyleProfile {
            dialogue_exchanges: 0,
            action_level: ActionLevel::Low,
            pacing: Pacing::Fast,
        };
        let story = GeneratedStory::new(params, "It ticked twice.", analytics, style, "gemma2-9b-it");
        let id = story.id.to_string();

        let response = StoryResponseDto::from(story);
        assert_eq!(response.id, id);
        assert_eq!(response.genre, "Science Fiction");
        assert_eq!(response.settings, "Long/Light-hearted/Third Person");
        assert_eq!(response.model, "gemma2-9b-it");
    }
}

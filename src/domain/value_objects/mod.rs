//! Value objects - Immutable objects defined by their attributes

mod analytics;
mod generation;
mod ids;
mod settings;

pub use analytics::{ActionLevel, Pacing, ReadingDifficulty, StoryAnalytics, StyleProfile};
pub use generation::{
    GenerationParameters, Genre, ParameterError, PointOfView, StoryElements, StoryLength, Tone,
    MAX_CONCEPT_CHARS, MAX_CREATIVITY, MIN_CREATIVITY,
};
pub use ids::StoryId;
pub use settings::GenerationSettings;

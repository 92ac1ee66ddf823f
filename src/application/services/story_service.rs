//! Story Service - prompt composition, generation and analysis
//!
//! Ties the prompt composer and text analyzer to a text-generation client.
//! The client is injected, so the service can be driven by a mock in tests
//! or by any chat-completion backend behind [`LlmPort`].

use crate::application::ports::outbound::{ChatMessage, LlmPort, LlmRequest};
use crate::application::services::llm::{compose, ComposedPrompt, SYSTEM_PROMPT};
use crate::application::services::text_analyzer::{self, StoryReport};
use crate::domain::entities::GeneratedStory;
use crate::domain::value_objects::{GenerationParameters, GenerationSettings, ParameterError};

/// Service for composing prompts and generating stories
pub struct StoryService<L: LlmPort> {
    llm: L,
    settings: GenerationSettings,
}

impl<L: LlmPort> StoryService<L> {
    pub fn new(llm: L, settings: GenerationSettings) -> Self {
        Self { llm, settings }
    }

    /// Build the generation prompt without calling the client
    pub fn compose(&self, params: &GenerationParameters) -> Result<ComposedPrompt, StoryServiceError> {
        Ok(compose(params)?)
    }

    /// Generate a story and attach its analytics
    ///
    /// Invalid parameters are rejected before any request leaves the process.
    pub async fn generate(
        &self,
        params: GenerationParameters,
    ) -> Result<GeneratedStory, StoryServiceError> {
        let prompt = compose(&params)?;

        tracing::debug!(
            genre = %params.genre,
            length = %params.length,
            tone = %params.tone,
            point_of_view = %params.point_of_view,
            creativity = params.creativity,
            prompt_len = prompt.len(),
            "Requesting story generation"
        );

        let request = LlmRequest::new(vec![ChatMessage::user(prompt.into_string())])
            .with_system_prompt(SYSTEM_PROMPT)
            .with_temperature(params.creativity as f32)
            .with_max_tokens(self.settings.max_tokens)
            .with_top_p(self.settings.top_p)
            .with_frequency_penalty(self.settings.frequency_penalty)
            .with_presence_penalty(self.settings.presence_penalty);

        let response = self.llm.generate(request).await.map_err(|e| {
            tracing::warn!(error = %e, "Story generation request failed");
            StoryServiceError::GenerationFailure(e.to_string())
        })?;

        if response.content.trim().is_empty() {
            tracing::warn!(model = %response.model, "Story generation returned no content");
            return Err(StoryServiceError::GenerationFailure(
                "The model returned an empty story".to_string(),
            ));
        }

        let analytics = text_analyzer::analyze(&response.content);
        let style = text_analyzer::classify_style(&response.content);

        let story = GeneratedStory::new(params, response.content, analytics, style, response.model);
        tracing::info!(
            story_id = %story.id,
            words = story.analytics.word_count,
            tokens_used = response.tokens_used,
            settings = %story.settings_label(),
            "Story generated"
        );

        Ok(story)
    }

    /// Analyze arbitrary text
    pub fn analyze(&self, text: &str, keyword_limit: usize) -> StoryReport {
        text_analyzer::report(text, keyword_limit)
    }
}

/// Errors that can occur in the story service
#[derive(Debug, thiserror::Error)]
pub enum StoryServiceError {
    /// The request itself is unusable
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),
    /// The client failed or returned nothing usable
    #[error("Story generation failed: {0}")]
    GenerationFailure(String),
}

//! Shared application state

use crate::application::services::StoryService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::groq::GroqClient;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub story_service: StoryService<GroqClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let llm_client = GroqClient::new(
            &config.groq_base_url,
            &config.groq_api_key,
            &config.groq_model,
        );
        let story_service = StoryService::new(llm_client, config.generation.clone());

        Self {
            config,
            story_service,
        }
    }
}

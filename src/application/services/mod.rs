//! Application services - Use case implementations
//!
//! Prompt composition, text analytics and the story service that ties them
//! to a text-generation client.

pub mod catalog;
pub mod llm;
pub mod story_service;
pub mod text_analyzer;

pub use story_service::{StoryService, StoryServiceError};

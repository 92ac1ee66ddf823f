//! Prompt building for story generation requests

pub mod fragments;
pub mod prompt_composer;
pub mod template;

#[allow(unused_imports)]
pub use prompt_composer::{compose, ComposedPrompt, CreativityTier, SYSTEM_PROMPT};

//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Groq: chat-completions client behind the LLM port
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod groq;
pub mod http;
pub mod state;

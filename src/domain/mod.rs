//! Domain layer - Core story model with no external service dependencies
//!
//! This layer contains:
//! - Entities: GeneratedStory
//! - Value Objects: generation parameters, analytics, settings, ids

pub mod entities;
pub mod value_objects;

//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize without the domain model depending on request shapes.

pub mod story;

pub use story::*;

//! Domain entities - Core business objects with identity

mod story;

pub use story::GeneratedStory;

//! Generation parameters - the narrative controls a story request is built from

use std::fmt;
use std::str::FromStr;

/// Longest story concept accepted, in characters
pub const MAX_CONCEPT_CHARS: usize = 1000;
/// Lowest accepted creativity level
pub const MIN_CREATIVITY: f64 = 0.1;
/// Highest accepted creativity level
pub const MAX_CREATIVITY: f64 = 1.0;

/// Lowercase a label and drop everything that is not alphanumeric, so
/// "Science Fiction", "science_fiction" and "SCIENCE-FICTION" compare equal.
fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Story genre
///
/// Unrecognized labels are kept as `Other` so the prompt composer can fall
/// back to its generic fragments instead of rejecting the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Genre {
    Fantasy,
    ScienceFiction,
    MysteryThriller,
    Romance,
    Horror,
    Adventure,
    Comedy,
    Drama,
    Other(String),
}

impl Genre {
    /// Every genre with dedicated prompt fragments, in display order
    pub const KNOWN: [Genre; 8] = [
        Genre::Fantasy,
        Genre::ScienceFiction,
        Genre::MysteryThriller,
        Genre::Romance,
        Genre::Horror,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
    ];

    /// Display label, also used as the fragment table key
    pub fn label(&self) -> &str {
        match self {
            Self::Fantasy => "Fantasy",
            Self::ScienceFiction => "Science Fiction",
            Self::MysteryThriller => "Mystery/Thriller",
            Self::Romance => "Romance",
            Self::Horror => "Horror",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Other(label) => label,
        }
    }

    /// Resolve a label; never fails
    pub fn from_label(label: &str) -> Self {
        let key = normalize_label(label);
        Self::KNOWN
            .into_iter()
            .find(|genre| normalize_label(genre.label()) == key)
            .unwrap_or_else(|| Self::Other(label.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Emotional tone of the prose
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Dark,
    LightHearted,
    Dramatic,
    Humorous,
    Other(String),
}

impl Tone {
    pub const KNOWN: [Tone; 5] = [
        Tone::Neutral,
        Tone::Dark,
        Tone::LightHearted,
        Tone::Dramatic,
        Tone::Humorous,
    ];

    pub fn label(&self) -> &str {
        match self {
            Self::Neutral => "Neutral",
            Self::Dark => "Dark",
            Self::LightHearted => "Light-hearted",
            Self::Dramatic => "Dramatic",
            Self::Humorous => "Humorous",
            Self::Other(label) => label,
        }
    }

    /// Resolve a label; never fails
    pub fn from_label(label: &str) -> Self {
        let key = normalize_label(label);
        Self::KNOWN
            .into_iter()
            .find(|tone| normalize_label(tone.label()) == key)
            .unwrap_or_else(|| Self::Other(label.to_string()))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target story length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryLength {
    Short,
    Medium,
    Long,
}

impl StoryLength {
    pub const ALL: [StoryLength; 3] = [StoryLength::Short, StoryLength::Medium, StoryLength::Long];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }

    /// Word range handed to the model
    pub fn word_target(&self) -> &'static str {
        match self {
            Self::Short => "600-800 words",
            Self::Medium => "1200-1500 words",
            Self::Long => "2000-2500 words",
        }
    }

    /// Midpoint of the word range, used for read-time previews
    pub fn word_estimate(&self) -> usize {
        match self {
            Self::Short => 700,
            Self::Medium => 1350,
            Self::Long => 2250,
        }
    }
}

impl FromStr for StoryLength {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|length| normalize_label(length.label()) == key)
            .ok_or_else(|| ParameterError::UnknownLength(s.to_string()))
    }
}

impl fmt::Display for StoryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Narrative perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOfView {
    FirstPerson,
    ThirdPerson,
}

impl PointOfView {
    pub const ALL: [PointOfView; 2] = [PointOfView::FirstPerson, PointOfView::ThirdPerson];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstPerson => "First Person",
            Self::ThirdPerson => "Third Person",
        }
    }
}

impl FromStr for PointOfView {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|pov| normalize_label(pov.label()) == key)
            .ok_or_else(|| ParameterError::UnknownPointOfView(s.to_string()))
    }
}

impl fmt::Display for PointOfView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional descriptive flavor passed through to the prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryElements {
    pub time_period: Option<String>,
    pub emotional_core: Option<String>,
    pub narrative_structure: Option<String>,
    pub complexity: Option<String>,
    pub include_twist: Option<bool>,
}

impl StoryElements {
    pub fn is_empty(&self) -> bool {
        self.time_period.is_none()
            && self.emotional_core.is_none()
            && self.narrative_structure.is_none()
            && self.complexity.is_none()
            && self.include_twist.is_none()
    }
}

/// Everything the prompt composer needs for one story request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParameters {
    pub concept: String,
    pub genre: Genre,
    pub length: StoryLength,
    pub tone: Tone,
    pub point_of_view: PointOfView,
    /// Sampling temperature in [0.1, 1.0], also selects the creativity tier
    pub creativity: f64,
    pub elements: StoryElements,
}

impl GenerationParameters {
    pub fn new(
        concept: impl Into<String>,
        genre: Genre,
        length: StoryLength,
        tone: Tone,
        point_of_view: PointOfView,
        creativity: f64,
    ) -> Self {
        Self {
            concept: concept.into(),
            genre,
            length,
            tone,
            point_of_view,
            creativity,
            elements: StoryElements::default(),
        }
    }

    pub fn with_elements(mut self, elements: StoryElements) -> Self {
        self.elements = elements;
        self
    }

    /// Check the caller-supplied values before anything is sent out
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.concept.trim().is_empty() {
            return Err(ParameterError::EmptyConcept);
        }

        let length = self.concept.chars().count();
        if length > MAX_CONCEPT_CHARS {
            return Err(ParameterError::ConceptTooLong { length });
        }

        // NaN fails the range check as well
        if !(MIN_CREATIVITY..=MAX_CREATIVITY).contains(&self.creativity) {
            return Err(ParameterError::CreativityOutOfRange(self.creativity));
        }

        Ok(())
    }
}

/// A story request the caller has to correct before generation can start
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("Please provide a story concept to bring to life")]
    EmptyConcept,
    #[error("Story concept is too long ({length} characters). Please keep it under {max} characters", max = MAX_CONCEPT_CHARS)]
    ConceptTooLong { length: usize },
    #[error("Creativity level must be between 0.1 and 1.0, got {0}")]
    CreativityOutOfRange(f64),
    #[error("Unknown point of view '{0}': expected 'First Person' or 'Third Person'")]
    UnknownPointOfView(String),
    #[error("Unknown story length '{0}': expected 'Short', 'Medium' or 'Long'")]
    UnknownLength(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(concept: &str, creativity: f64) -> GenerationParameters {
        GenerationParameters::new(
            concept,
            Genre::Fantasy,
            StoryLength::Medium,
            Tone::Neutral,
            PointOfView::ThirdPerson,
            creativity,
        )
    }

    #[test]
    fn test_genre_labels_resolve_leniently() {
        assert_eq!(Genre::from_label("Science Fiction"), Genre::ScienceFiction);
        assert_eq!(Genre::from_label("science_fiction"), Genre::ScienceFiction);
        assert_eq!(Genre::from_label("mystery/thriller"), Genre::MysteryThriller);
        assert_eq!(
            Genre::from_label("Western"),
            Genre::Other("Western".to_string())
        );
        assert_eq!(Genre::from_label("Western").label(), "Western");
    }

    #[test]
    fn test_tone_labels_resolve_leniently() {
        assert_eq!(Tone::from_label("Light-hearted"), Tone::LightHearted);
        assert_eq!(Tone::from_label("lighthearted"), Tone::LightHearted);
        assert_eq!(Tone::from_label("Wistful"), Tone::Other("Wistful".to_string()));
    }

    #[test]
    fn test_point_of_view_is_closed() {
        assert_eq!("First Person".parse::<PointOfView>(), Ok(PointOfView::FirstPerson));
        assert_eq!("third_person".parse::<PointOfView>(), Ok(PointOfView::ThirdPerson));
        assert_eq!(
            "Second Person".parse::<PointOfView>(),
            Err(ParameterError::UnknownPointOfView("Second Person".to_string()))
        );
    }

    #[test]
    fn test_length_is_closed() {
        assert_eq!("long".parse::<StoryLength>(), Ok(StoryLength::Long));
        assert!(matches!(
            "Epic".parse::<StoryLength>(),
            Err(ParameterError::UnknownLength(_))
        ));
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(params("A lighthouse keeper hears a knock", 0.1).validate().is_ok());
        assert!(params("A lighthouse keeper hears a knock", 1.0).validate().is_ok());
        assert!(params(&"x".repeat(MAX_CONCEPT_CHARS), 0.5).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert_eq!(params("   \n", 0.5).validate(), Err(ParameterError::EmptyConcept));
        assert_eq!(
            params(&"x".repeat(MAX_CONCEPT_CHARS + 1), 0.5).validate(),
            Err(ParameterError::ConceptTooLong { length: 1001 })
        );
        assert!(matches!(
            params("concept", 0.05).validate(),
            Err(ParameterError::CreativityOutOfRange(_))
        ));
        assert!(matches!(
            params("concept", 1.2).validate(),
            Err(ParameterError::CreativityOutOfRange(_))
        ));
        assert!(params("concept", f64::NAN).validate().is_err());
    }

    #[test]
    fn test_story_elements_empty() {
        assert!(StoryElements::default().is_empty());
        let elements = StoryElements {
            include_twist: Some(false),
            ..Default::default()
        };
        assert!(!elements.is_empty());
    }
}

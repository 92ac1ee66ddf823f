//! Story prompt composition
//!
//! Turns `GenerationParameters` into the single instruction string sent to
//! the text-generation service. Composition is a pure function of its input:
//! the same parameters always produce the same bytes.

use std::fmt;

use super::fragments::{
    BALANCED_CREATIVITY, ENHANCED_CREATIVITY, FIRST_PERSON_MASTERY, GENRE_MASTERY,
    MAXIMUM_CREATIVITY, SENSORY_DETAILS, THIRD_PERSON_MASTERY, TONE_STYLES,
};
use super::template::{MasterSlot, ProseSlot, MASTER_TEMPLATE, PROSE_TEMPLATE};
use crate::domain::value_objects::{
    GenerationParameters, Genre, ParameterError, PointOfView, StoryElements, StoryLength, Tone,
};

/// System message sent alongside every composed prompt
pub const SYSTEM_PROMPT: &str = "You are a world-class storyteller known for creating deeply engaging, emotionally resonant narratives. Your stories are praised for their authentic characters, immersive settings, and compelling plots that stay with readers long after they finish reading.";

/// The fully interpolated instruction text for one story request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt(String);

impl ComposedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ComposedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Instruction block selected by thresholding the creativity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreativityTier {
    Balanced,
    Enhanced,
    Maximum,
}

impl CreativityTier {
    /// Lower bounds are exclusive: 0.8 is Enhanced, 0.6 is Balanced
    pub fn from_level(level: f64) -> Self {
        if level > 0.8 {
            Self::Maximum
        } else if level > 0.6 {
            Self::Enhanced
        } else {
            Self::Balanced
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Self::Maximum => MAXIMUM_CREATIVITY,
            Self::Enhanced => ENHANCED_CREATIVITY,
            Self::Balanced => BALANCED_CREATIVITY,
        }
    }
}

pub fn sensory_details(genre: &Genre) -> &'static str {
    SENSORY_DETAILS.lookup(genre.label())
}

pub fn genre_mastery(genre: &Genre) -> &'static str {
    GENRE_MASTERY.lookup(genre.label())
}

/// Character guidance; first person focuses on the narrator, third person on the cast
pub fn character_depth(point_of_view: PointOfView, genre: &Genre) -> String {
    let genre = genre.label().to_lowercase();
    match point_of_view {
        PointOfView::FirstPerson => format!(
            "Develop the narrator as a complex, flawed, relatable human being with:
        - Internal contradictions and realistic psychology
        - A distinct voice with unique speech patterns, thoughts, and reactions
        - Specific background details that influence their worldview
        - Emotional vulnerabilities that make them three-dimensional
        - Skills, knowledge, or quirks relevant to the {genre} genre
        - A clear character arc that shows growth or change through the story"
        ),
        PointOfView::ThirdPerson => format!(
            "Create multi-dimensional characters with:
        - Each character having distinct dialogue patterns, mannerisms, and motivations
        - Hidden depths revealed through actions rather than exposition
        - Relationships that feel authentic and complex
        - Backstories that inform but don't overwhelm the present action
        - Character flaws that create realistic conflict and growth opportunities
        - Specific expertise or knowledge that serves the {genre} plot naturally"
        ),
    }
}

pub fn prose_excellence(tone: &Tone, length: StoryLength) -> String {
    let tone_style = TONE_STYLES.lookup(tone.label());
    PROSE_TEMPLATE.render(|slot| match slot {
        ProseSlot::WordTarget => length.word_target(),
        ProseSlot::ToneStyle => tone_style,
    })
}

pub fn creativity_instructions(level: f64) -> &'static str {
    CreativityTier::from_level(level).instructions()
}

pub fn pov_mastery(point_of_view: PointOfView) -> &'static str {
    match point_of_view {
        PointOfView::FirstPerson => FIRST_PERSON_MASTERY,
        PointOfView::ThirdPerson => THIRD_PERSON_MASTERY,
    }
}

/// Optional flavor block, including its trailing blank line
///
/// Returns an empty string when no element is set so the master template
/// renders exactly as it does without the block.
pub fn story_elements(elements: &StoryElements) -> String {
    if elements.is_empty() {
        return String::new();
    }

    let mut block = String::from("STORY ELEMENTS:\n");
    if let Some(period) = &elements.time_period {
        block.push_str(&format!("- Time Period: {}\n", period));
    }
    if let Some(core) = &elements.emotional_core {
        block.push_str(&format!("- Emotional Core: {}\n", core));
    }
    if let Some(structure) = &elements.narrative_structure {
        block.push_str(&format!("- Narrative Structure: {}\n", structure));
    }
    if let Some(complexity) = &elements.complexity {
        block.push_str(&format!("- Narrative Complexity: {}\n", complexity));
    }
    match elements.include_twist {
        Some(true) => {
            block.push_str("- Plot Twist: Include an unexpected but logical story revelation\n")
        }
        Some(false) => block.push_str("- Plot Twist: None, resolve the story without a late reversal\n"),
        None => {}
    }
    block.push('\n');
    block
}

/// Validate the parameters and build the master story prompt
pub fn compose(params: &GenerationParameters) -> Result<ComposedPrompt, ParameterError> {
    params.validate()?;

    let creativity = creativity_instructions(params.creativity);
    let genre = genre_mastery(&params.genre);
    let character = character_depth(params.point_of_view, &params.genre);
    let pov = pov_mastery(params.point_of_view);
    let sensory = sensory_details(&params.genre);
    let prose = prose_excellence(&params.tone, params.length);
    let elements = story_elements(&params.elements);

    let prompt = MASTER_TEMPLATE.render(|slot| match slot {
        MasterSlot::Concept => params.concept.as_str(),
        MasterSlot::Creativity => creativity,
        MasterSlot::GenreMastery => genre,
        MasterSlot::CharacterDepth => character.as_str(),
        MasterSlot::PovMastery => pov,
        MasterSlot::SensoryDetails => sensory,
        MasterSlot::ProseExcellence => prose.as_str(),
        MasterSlot::StoryElements => elements.as_str(),
    });

    Ok(ComposedPrompt(prompt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn librarian(genre: Genre, tone: Tone, pov: PointOfView, creativity: f64) -> GenerationParameters {
        GenerationParameters::new(
            "A librarian discovers that every book they touch reveals the true fate of its previous readers",
            genre,
            StoryLength::Medium,
            tone,
            pov,
            creativity,
        )
    }

    fn default_params() -> GenerationParameters {
        librarian(Genre::Fantasy, Tone::Dark, PointOfView::FirstPerson, 0.7)
    }

    #[test]
    fn test_compose_is_deterministic() {
        let params = default_params();
        let first = compose(&params).unwrap();
        let second = compose(&params).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
    }

    #[test]
    fn test_compose_matches_golden_prompts() {
        let fantasy = compose(&default_params()).unwrap();
        assert_eq!(
            fantasy.as_str(),
            include_str!("testdata/fantasy_dark_first_person.txt")
        );

        let western = GenerationParameters::new(
            "A cartographer discovers their maps are changing",
            Genre::from_label("Western"),
            StoryLength::Long,
            Tone::from_label("Wistful"),
            PointOfView::ThirdPerson,
            0.9,
        );
        assert_eq!(
            compose(&western).unwrap().as_str(),
            include_str!("testdata/western_third_person.txt")
        );
    }

    #[test]
    fn test_compose_section_order() {
        let prompt = compose(&default_params()).unwrap().into_string();

        let markers = [
            "STORY MISSION:",
            "ENHANCED CREATIVITY:",
            "GENRE EXPERTISE REQUIRED:",
            "CHARACTER MASTERY:",
            "FIRST PERSON MASTERY:",
            "SENSORY IMMERSION:",
            "Create exceptional prose",
            "PROFESSIONAL STANDARDS:",
            "NARRATIVE ARCHITECTURE:",
            "EXPERT EXECUTION CHECKLIST:",
            "Now craft your masterpiece.",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|marker| prompt.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(prompt.ends_with("Now craft your masterpiece."));
    }

    #[test]
    fn test_compose_interpolates_fragments() {
        let prompt = compose(&default_params()).unwrap().into_string();

        assert!(prompt.contains(
            "Transform this concept into a masterpiece: \"A librarian discovers that every book"
        ));
        assert!(prompt.contains("Master these fantasy elements:"));
        assert!(prompt.contains("Paint vivid scenes using: ancient stone corridors"));
        assert!(prompt.contains("TARGET LENGTH: 1200-1500 words"));
        assert!(prompt.contains("STYLE MASTERY: Use precise, evocative language"));
        assert!(prompt.contains("quirks relevant to the fantasy genre"));
    }

    #[test]
    fn test_compose_does_not_trim_concept() {
        let mut params = default_params();
        params.concept = "  a ship with no crew  ".to_string();
        let prompt = compose(&params).unwrap().into_string();
        assert!(prompt.contains("masterpiece: \"  a ship with no crew  \"\n\n"));
    }

    #[test]
    fn test_unknown_genre_and_tone_fall_back() {
        let params = librarian(
            Genre::Other("Western".to_string()),
            Tone::Other("Wistful".to_string()),
            PointOfView::ThirdPerson,
            0.5,
        );
        let prompt = compose(&params).unwrap().into_string();

        assert!(prompt.contains(
            "GENRE EXPERTISE REQUIRED:\nApply expert storytelling techniques for maximum emotional impact\n\n"
        ));
        assert!(prompt.contains(
            "Paint vivid scenes using: rich sensory details that immerse the reader completely\n"
        ));
        assert!(prompt.contains(
            "STYLE MASTERY: Craft clear, engaging prose that serves the story perfectly\n"
        ));
        assert!(prompt.contains("serves the western plot naturally"));
    }

    #[test]
    fn test_creativity_tier_boundaries() {
        assert_eq!(CreativityTier::from_level(0.8), CreativityTier::Enhanced);
        assert_eq!(CreativityTier::from_level(0.81), CreativityTier::Maximum);
        assert_eq!(CreativityTier::from_level(0.6), CreativityTier::Balanced);
        assert_eq!(CreativityTier::from_level(0.61), CreativityTier::Enhanced);
        assert_eq!(CreativityTier::from_level(0.1), CreativityTier::Balanced);
        assert_eq!(CreativityTier::from_level(0.80000001), CreativityTier::Maximum);
        assert_eq!(CreativityTier::from_level(0.60000001), CreativityTier::Enhanced);
        assert_eq!(CreativityTier::from_level(1.0), CreativityTier::Maximum);
    }

    #[test]
    fn test_compose_selects_creativity_block() {
        let at = |level| {
            compose(&librarian(Genre::Drama, Tone::Neutral, PointOfView::ThirdPerson, level))
                .unwrap()
                .into_string()
        };

        assert!(at(0.8).contains("ENHANCED CREATIVITY:"));
        assert!(!at(0.8).contains("MAXIMUM CREATIVITY MODE:"));
        assert!(at(0.6).contains("BALANCED APPROACH:"));
        assert!(at(0.81).contains("MAXIMUM CREATIVITY MODE:"));
        assert!(at(0.61).contains("ENHANCED CREATIVITY:"));
    }

    #[test]
    fn test_character_depth_branches_on_pov() {
        let first = character_depth(PointOfView::FirstPerson, &Genre::MysteryThriller);
        let third = character_depth(PointOfView::ThirdPerson, &Genre::ScienceFiction);

        assert!(first.starts_with("Develop the narrator as a complex"));
        assert!(first.contains("\n        - Skills, knowledge, or quirks relevant to the mystery/thriller genre\n"));
        assert!(third.starts_with("Create multi-dimensional characters with:"));
        assert!(third.ends_with("serves the science fiction plot naturally"));
    }

    #[test]
    fn test_pov_mastery_blocks() {
        assert!(pov_mastery(PointOfView::FirstPerson).starts_with("FIRST PERSON MASTERY:"));
        assert!(pov_mastery(PointOfView::ThirdPerson).starts_with("THIRD PERSON MASTERY:"));
    }

    #[test]
    fn test_story_elements_block_is_optional() {
        let plain = compose(&default_params()).unwrap().into_string();
        assert!(!plain.contains("STORY ELEMENTS:"));
        assert!(plain.contains("resonating emotionally\n\nPROFESSIONAL STANDARDS:"));

        let params = default_params().with_elements(StoryElements {
            time_period: Some("Historical".to_string()),
            emotional_core: Some("Discovery".to_string()),
            narrative_structure: None,
            complexity: Some("Layered".to_string()),
            include_twist: Some(true),
        });
        let flavored = compose(&params).unwrap().into_string();
        assert!(flavored.contains(
            "resonating emotionally\n\nSTORY ELEMENTS:\n- Time Period: Historical\n- Emotional Core: Discovery\n- Narrative Complexity: Layered\n- Plot Twist: Include an unexpected but logical story revelation\n\nPROFESSIONAL STANDARDS:"
        ));
    }

    #[test]
    fn test_compose_rejects_invalid_parameters() {
        let mut params = default_params();
        params.concept = String::new();
        assert_eq!(compose(&params), Err(ParameterError::EmptyConcept));

        let mut params = default_params();
        params.creativity = 1.5;
        assert!(matches!(
            compose(&params),
            Err(ParameterError::CreativityOutOfRange(_))
        ));
    }
}

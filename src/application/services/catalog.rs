//! Story catalog - option lists and writing aids for story request forms

use serde::Serialize;

use crate::domain::value_objects::{
    GenerationParameters, Genre, PointOfView, StoryLength, MAX_CONCEPT_CHARS, MAX_CREATIVITY,
    MIN_CREATIVITY,
};

pub const TONES: [&str; 5] = ["Neutral", "Dark", "Light-hearted", "Dramatic", "Humorous"];

pub const TIME_PERIODS: [&str; 4] = ["Contemporary", "Historical", "Future", "Timeless"];

pub const EMOTIONAL_CORES: [&str; 8] = [
    "Love",
    "Loss",
    "Discovery",
    "Redemption",
    "Survival",
    "Growth",
    "Justice",
    "Freedom",
];

pub const NARRATIVE_STRUCTURES: [&str; 4] = ["Linear", "Flashbacks", "Multiple Timeline", "Circular"];

pub const COMPLEXITY_LEVELS: [&str; 3] = ["Straightforward", "Layered", "Complex"];

/// Placeholder concept shown when the genre has no example
pub const FALLBACK_EXAMPLE: &str = "A moment that changes everything...";

const EXAMPLE_CONCEPTS: [(&str, &str); 8] = [
    ("Fantasy", "A librarian discovers that every book they touch reveals the true fate of its previous readers"),
    ("Science Fiction", "Memory merchants sell experiences to the highest bidder, but one memory refuses to be sold"),
    ("Mystery/Thriller", "A forensic accountant finds their own signature on documents from before they were born"),
    ("Romance", "Two people keep meeting in dreams before they meet in real life"),
    ("Horror", "A child's imaginary friend starts leaving physical evidence of their existence"),
    ("Adventure", "A cartographer discovers their maps are changing to show places that don't exist yet"),
    ("Comedy", "A professional mourner accidentally attends the wrong funeral and can't escape"),
    ("Drama", "A parent finds their estranged child's diary and realizes they never knew them at all"),
];

const WRITING_TIPS: [(&str, [&str; 3]); 8] = [
    (
        "Fantasy",
        [
            "Build your magic system with clear rules and limitations",
            "Create cultures that feel lived-in, not just exotic",
            "Ground fantastic elements in emotional reality",
        ],
    ),
    (
        "Science Fiction",
        [
            "Focus on how technology affects human relationships",
            "Make future societies feel like natural progressions",
            "Use science to drive plot, not just provide backdrop",
        ],
    ),
    (
        "Mystery/Thriller",
        [
            "Plant clues that are fair but not obvious",
            "Build tension through pacing and stakes",
            "Create red herrings that feel natural",
        ],
    ),
    (
        "Romance",
        [
            "Build emotional intimacy through vulnerability",
            "Create obstacles from character flaws, not external forces",
            "Show attraction through subtle gestures and chemistry",
        ],
    ),
    (
        "Horror",
        [
            "Build dread through what's NOT shown",
            "Use familiar settings made sinister",
            "Tap into universal fears and anxieties",
        ],
    ),
    (
        "Adventure",
        [
            "Design obstacles that require ingenuity",
            "Use environment as an active story element",
            "Balance action with character development",
        ],
    ),
    (
        "Comedy",
        [
            "Use character-based humor from personality and situation",
            "Time comedic beats for maximum impact",
            "Include heart beneath the humor",
        ],
    ),
    (
        "Drama",
        [
            "Focus on internal conflicts mirroring external situations",
            "Use subtext - what characters don't say",
            "Explore universal themes through specific stories",
        ],
    ),
];

const CHARACTER_ARCHETYPES: [(&str, &str); 12] = [
    ("The Hero", "Brave, determined, grows through challenges"),
    ("The Mentor", "Wise, experienced, guides others"),
    ("The Trickster", "Clever, unpredictable, brings change"),
    ("The Lover", "Passionate, devoted, driven by connection"),
    ("The Innocent", "Optimistic, trusting, sees good in others"),
    ("The Explorer", "Curious, restless, seeks freedom and authenticity"),
    ("The Rebel", "Revolutionary, nonconformist, challenges authority"),
    ("The Creator", "Artistic, imaginative, desires to create something of value"),
    ("The Ruler", "Responsible, authoritative, wants control and order"),
    ("The Caregiver", "Compassionate, generous, wants to help others"),
    ("The Magician", "Visionary, inventive, understands fundamental laws"),
    ("The Sage", "Wise, knowledgeable, seeks truth and understanding"),
];

const PLOT_DEVICES: [&str; 10] = [
    "The MacGuffin - Object that drives the plot",
    "Red Herring - Misleading clue or information",
    "Chekhov's Gun - Element introduced early that becomes important later",
    "Deus Ex Machina - Unexpected solution (use sparingly)",
    "In Media Res - Starting in the middle of action",
    "Flashback - Revealing past events",
    "Foreshadowing - Hinting at future events",
    "Plot Twist - Unexpected revelation that changes everything",
    "Cliffhanger - Ending with unresolved tension",
    "Frame Story - Story within a story",
];

/// Example concept for a genre, or the generic placeholder
pub fn example_concept(genre: &Genre) -> &'static str {
    EXAMPLE_CONCEPTS
        .iter()
        .find(|(label, _)| *label == genre.label())
        .map(|(_, concept)| *concept)
        .unwrap_or(FALLBACK_EXAMPLE)
}

/// Writing tips for a genre; empty for genres without dedicated guidance
pub fn writing_tips(genre: &Genre) -> &'static [&'static str] {
    WRITING_TIPS
        .iter()
        .find(|(label, _)| *label == genre.label())
        .map(|(_, tips)| tips.as_slice())
        .unwrap_or(&[])
}

#[derive(Debug, Clone, Serialize)]
pub struct GenreEntry {
    pub label: &'static str,
    pub example_concept: &'static str,
    pub writing_tips: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LengthEntry {
    pub label: &'static str,
    pub word_target: &'static str,
    pub word_estimate: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Archetype {
    pub name: &'static str,
    pub traits: &'static str,
}

/// Everything a client needs to build a story request form
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub genres: Vec<GenreEntry>,
    pub tones: Vec<&'static str>,
    pub lengths: Vec<LengthEntry>,
    pub points_of_view: Vec<&'static str>,
    pub time_periods: Vec<&'static str>,
    pub emotional_cores: Vec<&'static str>,
    pub narrative_structures: Vec<&'static str>,
    pub complexity_levels: Vec<&'static str>,
    pub character_archetypes: Vec<Archetype>,
    pub plot_devices: Vec<&'static str>,
    pub max_concept_chars: usize,
    pub min_creativity: f64,
    pub max_creativity: f64,
}

pub fn catalog() -> Catalog {
    Catalog {
        genres: EXAMPLE_CONCEPTS
            .iter()
            .map(|&(label, _)| {
                let genre = Genre::from_label(label);
                GenreEntry {
                    label,
                    example_concept: example_concept(&genre),
                    writing_tips: writing_tips(&genre).to_vec(),
                }
            })
            .collect(),
        tones: TONES.to_vec(),
        lengths: StoryLength::ALL
            .iter()
            .map(|length| LengthEntry {
                label: length.label(),
                word_target: length.word_target(),
                word_estimate: length.word_estimate(),
            })
            .collect(),
        points_of_view: PointOfView::ALL.iter().map(PointOfView::label).collect(),
        time_periods: TIME_PERIODS.to_vec(),
        emotional_cores: EMOTIONAL_CORES.to_vec(),
        narrative_structures: NARRATIVE_STRUCTURES.to_vec(),
        complexity_levels: COMPLEXITY_LEVELS.to_vec(),
        character_archetypes: CHARACTER_ARCHETYPES
            .iter()
            .map(|&(name, traits)| Archetype { name, traits })
            .collect(),
        plot_devices: PLOT_DEVICES.to_vec(),
        max_concept_chars: MAX_CONCEPT_CHARS,
        min_creativity: MIN_CREATIVITY,
        max_creativity: MAX_CREATIVITY,
    }
}

/// Preview of a story request shown before generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryProfile {
    pub genre: String,
    pub length: &'static str,
    pub word_target: &'static str,
    pub tone: String,
    pub point_of_view: &'static str,
    pub creativity_percent: u32,
    pub complexity: Option<String>,
    /// Lower end of the read-time range; the upper end is one minute more
    pub estimated_read_minutes: usize,
    pub read_time_display: String,
}

impl StoryProfile {
    pub fn from_parameters(params: &GenerationParameters) -> Self {
        let minutes = (params.length.word_estimate() / 200).max(1);
        Self {
            genre: params.genre.label().to_string(),
            length: params.length.label(),
            word_target: params.length.word_target(),
            tone: params.tone.label().to_string(),
            point_of_view: params.point_of_view.label(),
            creativity_percent: (params.creativity * 100.0) as u32,
            complexity: params.elements.complexity.clone(),
            estimated_read_minutes: minutes,
            read_time_display: format!("{}-{} min", minutes, minutes + 1),
        }
    }
}

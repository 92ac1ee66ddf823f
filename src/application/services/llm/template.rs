//! Slot templates for prompt assembly
//!
//! A template is a fixed, ordered list of literal text and named slots.
//! Rendering walks the list once and asks the caller for each slot's text;
//! nothing is escaped because the output is plain prose.

/// One piece of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<S: 'static> {
    Literal(&'static str),
    Slot(S),
}

/// A fixed sequence of literals and slots
#[derive(Debug)]
pub struct Template<S: 'static> {
    segments: &'static [Segment<S>],
}

impl<S: Copy + 'static> Template<S> {
    pub const fn new(segments: &'static [Segment<S>]) -> Self {
        Self { segments }
    }

    /// Slots in the order they appear
    pub fn slots(&self) -> impl Iterator<Item = S> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(slot) => Some(*slot),
            Segment::Literal(_) => None,
        })
    }

    pub fn render<'a>(&self, fill: impl Fn(S) -> &'a str) -> String {
        let mut output = String::with_capacity(self.literal_len() * 2);
        for segment in self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Slot(slot) => output.push_str(fill(*slot)),
            }
        }
        output
    }

    fn literal_len(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.len(),
                Segment::Slot(_) => 0,
            })
            .sum()
    }
}

/// Slots of the master story prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasterSlot {
    Concept,
    Creativity,
    GenreMastery,
    CharacterDepth,
    PovMastery,
    SensoryDetails,
    ProseExcellence,
    /// Optional flavor block; renders empty when no elements are set
    StoryElements,
}

/// Slots of the prose-excellence section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProseSlot {
    WordTarget,
    ToneStyle,
}

/// mission, creativity tier, genre mastery, character depth, POV mastery,
/// sensory immersion, prose excellence, fixed boilerplate, closing line
pub static MASTER_TEMPLATE: Template<MasterSlot> = Template::new(&[
    Segment::Literal(
        "You are a master storyteller with decades of experience across all genres. Your stories are published in prestigious magazines, win awards, and leave readers breathless. You understand the deep craft of storytelling at a level that few achieve.\n\nSTORY MISSION: Transform this concept into a masterpiece: \"",
    ),
    Segment::Slot(MasterSlot::Concept),
    Segment::Literal("\"\n\n"),
    Segment::Slot(MasterSlot::Creativity),
    Segment::Literal("\n\nGENRE EXPERTISE REQUIRED:\n"),
    Segment::Slot(MasterSlot::GenreMastery),
    Segment::Literal("\n\nCHARACTER MASTERY:\n"),
    Segment::Slot(MasterSlot::CharacterDepth),
    Segment::Literal("\n\n"),
    Segment::Slot(MasterSlot::PovMastery),
    Segment::Literal("\n\nSENSORY IMMERSION:\nPaint vivid scenes using: "),
    Segment::Slot(MasterSlot::SensoryDetails),
    Segment::Literal(
        "\nEvery scene should feel tangible and immediate. Readers should feel like they're experiencing, not just reading.\n\n",
    ),
    Segment::Slot(MasterSlot::ProseExcellence),
    Segment::Literal("\n\n"),
    Segment::Slot(MasterSlot::StoryElements),
    Segment::Literal(
        "PROFESSIONAL STANDARDS:
- Every sentence must earn its place - cut ruthlessly
- Create subtext in dialogue - characters say one thing, mean another
- Use conflict in every scene, even quiet moments
- Build story questions that make readers unable to stop
- Create emotional resonance that lingers after reading
- Establish clear stakes that matter to both character and reader

NARRATIVE ARCHITECTURE:
- OPENING: Grab immediately with character in motion or conflict
- DEVELOPMENT: Escalate conflict while deepening character
- CLIMAX: Create a moment that changes everything
- RESOLUTION: Satisfy emotionally while leaving some mystery

EXPERT EXECUTION CHECKLIST:
\u{2713} Every character has a clear want and obstacle
\u{2713} Every scene advances plot AND character
\u{2713} Dialogue sounds natural when read aloud
\u{2713} Setting serves mood and theme, not just backdrop
\u{2713} Emotional beats feel earned, not manipulated
\u{2713} Ending feels both surprising and inevitable
\u{2713} Prose flows with natural rhythm and varies in pace
\u{2713} Specific details create universal emotions

Remember: You're not just telling a story - you're creating an experience that will haunt readers long after they finish. Make every word count. Make every moment matter.

Now craft your masterpiece.",
    ),
]);

pub static PROSE_TEMPLATE: Template<ProseSlot> = Template::new(&[
    Segment::Literal("Create exceptional prose with these techniques:\n    \n    TARGET LENGTH: "),
    Segment::Slot(ProseSlot::WordTarget),
    Segment::Literal(" - This is your sweet spot for maximum impact\n    \n    STYLE MASTERY: "),
    Segment::Slot(ProseSlot::ToneStyle),
    Segment::Literal(
        "\n    \n    ADVANCED TECHNIQUES:
    - Open with a hook that immediately establishes character, conflict, or atmosphere
    - Use the \"show don't tell\" principle relentlessly - actions and dialogue over exposition
    - Employ specific, concrete details rather than abstract descriptions
    - Create rhythm through sentence variety - short punchy sentences mixed with flowing longer ones
    - End paragraphs with compelling hooks that pull readers forward
    - Use active voice and strong verbs to create energy and immediacy
    - Weave backstory naturally through action and dialogue, never in information dumps
    - Create transitions that feel seamless and maintain narrative flow
    - Build to a climax that feels both surprising and inevitable
    - Craft an ending that resolves the plot while resonating emotionally",
    ),
]);

//! Prompt fragments - fixed text blocks selected by narrative controls
//!
//! Each table maps a display label to a block of guidance text and carries
//! a default that is returned for any label it does not know. Multi-line
//! fragments keep their embedded indentation: composed prompts must stay
//! byte-identical to what earlier releases produced.

/// A label-keyed table of fragments with a default entry
///
/// Lookups are total: a missing label yields `default`, never an error.
#[derive(Debug)]
pub struct FragmentTable {
    entries: &'static [(&'static str, &'static str)],
    default: &'static str,
}

impl FragmentTable {
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        default: &'static str,
    ) -> Self {
        Self { entries, default }
    }

    pub fn lookup(&self, label: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(key, _)| *key == label)
            .map(|(_, text)| *text)
            .unwrap_or(self.default)
    }

    pub fn default_text(&self) -> &'static str {
        self.default
    }
}

/// Sensory palette per genre, interpolated into the immersion section
pub static SENSORY_DETAILS: FragmentTable = FragmentTable::new(
    &[
        (
            "Fantasy",
            "ancient stone corridors echoing with whispers, the metallic taste of magic in the air, glowing runes that pulse with warmth, the musty scent of old grimoires, silk robes rustling against skin",
        ),
        (
            "Science Fiction",
            "the sterile hum of life support systems, cold metal surfaces under fingertips, the acrid smell of ozone after energy discharge, holographic displays casting blue light on faces, synthetic air recycling through vents",
        ),
        (
            "Mystery/Thriller",
            "creaking floorboards in empty houses, the weight of eyes watching from shadows, coffee growing cold in forgotten cups, rain pattering against windows, the sharp scent of fear-induced adrenaline",
        ),
        (
            "Romance",
            "the warmth of intertwined fingers, soft candlelight dancing across skin, the lingering scent of perfume on clothes, whispered words that make hearts race, silk sheets cool against bare skin",
        ),
        (
            "Horror",
            "the suffocating silence before something terrible happens, cold sweat beading on trembling skin, the metallic taste of fear, shadows that seem to move in peripheral vision, the smell of decay and forgotten time",
        ),
        (
            "Adventure",
            "wind whipping through hair on mountain peaks, the burn of muscles pushed to their limit, exotic spices filling marketplace air, leather worn smooth by countless journeys, the sound of waves against wooden hulls",
        ),
        (
            "Comedy",
            "the uncontrollable giggle that starts in the belly, coffee spilling in perfectly timed disasters, the ridiculous squeak of rubber shoes on polished floors, the warm feeling of shared laughter, absurd coincidences that defy logic",
        ),
        (
            "Drama",
            "tears that blur vision and salt the lips, the hollow ache of words left unsaid, trembling hands reaching for connection, the weight of silence in hospital waiting rooms, rain that mirrors inner storms",
        ),
    ],
    "rich sensory details that immerse the reader completely",
);

/// Craft guidance per genre
pub static GENRE_MASTERY: FragmentTable = FragmentTable::new(
    &[
        (
            "Fantasy",
            "Master these fantasy elements:
        - Create magic systems with clear rules, limitations, and costs
        - Build cultures with unique customs, languages, and belief systems
        - Design creatures that feel both wondrous and believable
        - Weave mythology naturally into the plot without info-dumping
        - Balance familiar fantasy tropes with fresh, unexpected twists
        - Show the impact of magic on society, economy, and daily life
        - Use archaic or formal language sparingly for atmosphere without alienating readers",
        ),
        (
            "Science Fiction",
            "Execute advanced sci-fi techniques:
        - Ground futuristic technology in believable scientific principles
        - Explore the social and ethical implications of technological advancement
        - Create future societies that feel like natural progressions of current trends
        - Use scientific concepts to drive plot rather than just provide backdrop
        - Balance technical details with human storytelling
        - Address how technology changes human relationships and identity
        - Incorporate current scientific discoveries and theories authentically",
        ),
        (
            "Mystery/Thriller",
            "Deploy expert mystery mechanics:
        - Plant clues that are fair but not obvious, rewarding careful readers
        - Create red herrings that feel natural, not forced
        - Build escalating tension through pacing, stakes, and revelation timing
        - Develop a logical solution that's surprising yet inevitable
        - Use misdirection through character assumptions and biases
        - Create multiple layers of mystery that interconnect meaningfully
        - Balance action with investigation and character development",
        ),
        (
            "Romance",
            "Craft compelling romantic tension:
        - Build emotional intimacy through vulnerability and shared experiences
        - Create obstacles that arise from character flaws, not external manipulation
        - Show attraction through subtle gestures, meaningful looks, and chemistry
        - Develop relationship progression that feels authentic and earned
        - Balance romantic scenes with individual character growth
        - Use dialogue that reveals personality while building romantic tension
        - Create moments of genuine connection that transcend physical attraction",
        ),
        (
            "Horror",
            "Master psychological and atmospheric horror:
        - Build dread through what's not shown rather than graphic descriptions
        - Use familiar settings made sinister through subtle wrongness
        - Create horror that taps into universal fears and anxieties
        - Escalate tension through pacing, building to carefully timed releases
        - Develop threats that represent deeper psychological or social fears
        - Use sensory details to create unsettling atmosphere
        - Balance supernatural elements with psychological realism",
        ),
        (
            "Adventure",
            "Create thrilling adventure elements:
        - Design obstacles that require ingenuity, not just action
        - Build exotic locations that feel authentic and immersive
        - Create stakes that matter personally to the characters
        - Balance action sequences with character moments and plot development
        - Use geography and environment as active elements in the story
        - Design challenges that showcase character strengths and growth
        - Maintain momentum while allowing for emotional and plot development",
        ),
        (
            "Comedy",
            "Execute sophisticated humor techniques:
        - Use character-based humor that arises from personality and situation
        - Create comedy through misunderstandings, timing, and escalation
        - Balance different types of humor: wit, situational, character-based, observational
        - Use callbacks and running gags that build throughout the story
        - Create absurd situations grounded in recognizable human behavior
        - Time comedic beats for maximum impact, using rhythm and pacing
        - Include heart beneath the humor for emotional resonance",
        ),
        (
            "Drama",
            "Craft emotionally powerful drama:
        - Focus on internal conflicts that mirror external situations
        - Create realistic dialogue that reveals character while advancing plot
        - Build emotional stakes through relationships and personal growth
        - Use subtext and what characters don't say as powerfully as what they do
        - Explore universal themes through specific, personal stories
        - Balance hope and struggle for authentic emotional journeys
        - Create moments of quiet revelation alongside dramatic confrontations",
        ),
    ],
    "Apply expert storytelling techniques for maximum emotional impact",
);

/// Prose style guidance per tone
pub static TONE_STYLES: FragmentTable = FragmentTable::new(
    &[
        (
            "Dark",
            "Use precise, evocative language with underlying tension. Employ shorter sentences during intense moments, longer flowing sentences for reflection. Choose words that carry emotional weight.",
        ),
        (
            "Light-hearted",
            "Write with buoyant rhythm and playful language. Use varied sentence structures that feel musical. Include precise details that spark joy or amusement.",
        ),
        (
            "Dramatic",
            "Employ powerful, emotional language with strong imagery. Use sentence rhythm to match emotional intensity. Choose words that resonate with deeper meaning.",
        ),
        (
            "Humorous",
            "Craft sentences with comedic timing. Use unexpected word choices and juxtaposition. Vary rhythm for comedic effect - quick builds, perfect pauses.",
        ),
        (
            "Neutral",
            "Use clear, engaging prose that serves the story. Vary sentence length naturally. Choose precise words that create vivid imagery without calling attention to themselves.",
        ),
    ],
    "Craft clear, engaging prose that serves the story perfectly",
);

pub const FIRST_PERSON_MASTERY: &str = "FIRST PERSON MASTERY:
        - Create an authentic, distinctive narrative voice
        - Use introspection naturally without over-explaining
        - Show the narrator's personality through word choice and observation
        - Reveal information as the narrator discovers or remembers it
        - Balance internal thoughts with external action and dialogue";

pub const THIRD_PERSON_MASTERY: &str = "THIRD PERSON MASTERY:
        - Maintain consistent point of view (limited or omniscient)
        - Use selective focus to control reader attention and emotion
        - Reveal character thoughts and motivations through action and dialogue
        - Create intimacy through close psychological distance when needed
        - Balance multiple character perspectives if using multiple viewpoints";

pub const MAXIMUM_CREATIVITY: &str = "MAXIMUM CREATIVITY MODE:
        - Take bold, unexpected narrative risks
        - Subvert genre expectations in surprising ways
        - Create unique narrative structures or perspectives
        - Blend genres if it serves the story
        - Invent fresh metaphors and original imagery";

pub const ENHANCED_CREATIVITY: &str = "ENHANCED CREATIVITY:
        - Add original twists to familiar elements
        - Create unexpected character connections
        - Use unique angles on common themes
        - Include surprising but logical plot developments";

pub const BALANCED_CREATIVITY: &str = "BALANCED APPROACH:
        - Focus on solid storytelling fundamentals
        - Create engaging but accessible narratives
        - Use proven techniques with personal touches";

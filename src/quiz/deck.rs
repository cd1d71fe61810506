//! Vocabulary deck

/// A word with its definition and three distractors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabEntry {
    pub word: &'static str,
    pub correct: &'static str,
    pub wrong: [&'static str; 3],
}

/// Built-in quiz deck
pub const VOCABULARY: &[VocabEntry] = &[
    VocabEntry {
        word: "obstreperous",
        correct: "Noisy and difficult to control",
        wrong: [
            "Having few words; terse",
            "Causing doubt or uncertainty",
            "Able to be handled easily",
        ],
    },
    VocabEntry {
        word: "mellifluous",
        correct: "Sweet or musical; pleasant to hear",
        wrong: [
            "Extremely harsh sounding",
            "Relating to honey production",
            "Tending to break into parts",
        ],
    },
    VocabEntry {
        word: "perspicacious",
        correct: "Having keen mental perception and understanding",
        wrong: [
            "Slow to perceive or understand",
            "Marked by excessive pride",
            "Full of small holes",
        ],
    },
    VocabEntry {
        word: "laconic",
        correct: "Using very few words",
        wrong: [
            "Full of elaborate detail",
            "Very talkative",
            "Carefully measured pronunciation",
        ],
    },
    VocabEntry {
        word: "pellucid",
        correct: "Transparently clear in style or meaning",
        wrong: [
            "Extremely heavy",
            "Rough or uneven texture",
            "Tending to cause sleep",
        ],
    },
];

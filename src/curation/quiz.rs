//! Style quiz data, tag tallying and persona selection

use crate::catalog::Tag;
use indexmap::IndexMap;

/// A selectable quiz option carrying its descriptive tags
#[derive(Clone, Copy, Debug)]
pub struct QuizOption {
    /// Stable option identifier
    pub id: &'static str,
    /// Display text
    pub text: &'static str,
    /// Tags tallied when this option is selected
    pub tags: [Tag; 2],
}

/// A single quiz question with three options
#[derive(Clone, Copy, Debug)]
pub struct QuizQuestion {
    /// Question number, 1-based
    pub id: u32,
    /// Display prompt
    pub prompt: &'static str,
    /// The selectable options
    pub options: [QuizOption; 3],
}

/// The fixed five-question style quiz
pub const QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 1,
        prompt: "Which aesthetic speaks to your soul?",
        options: [
            QuizOption {
                id: "minimalist",
                text: "Clean & Minimalist",
                tags: [Tag::Timeless, Tag::Sustainable],
            },
            QuizOption {
                id: "luxurious",
                text: "Rich & Luxurious",
                tags: [Tag::Luxury, Tag::Handcrafted],
            },
            QuizOption {
                id: "artisanal",
                text: "Artisanal & Unique",
                tags: [Tag::Handcrafted, Tag::LimitedEdition],
            },
        ],
    },
    QuizQuestion {
        id: 2,
        prompt: "What defines your ideal living space?",
        options: [
            QuizOption {
                id: "serene",
                text: "Serene & Peaceful",
                tags: [Tag::Sustainable, Tag::Timeless],
            },
            QuizOption {
                id: "sophisticated",
                text: "Sophisticated & Elegant",
                tags: [Tag::Luxury, Tag::Timeless],
            },
            QuizOption {
                id: "eclectic",
                text: "Eclectic & Personal",
                tags: [Tag::Handcrafted, Tag::LimitedEdition],
            },
        ],
    },
    QuizQuestion {
        id: 3,
        prompt: "Which texture draws you in?",
        options: [
            QuizOption {
                id: "smooth",
                text: "Smooth & Refined",
                tags: [Tag::Luxury, Tag::Timeless],
            },
            QuizOption {
                id: "natural",
                text: "Natural & Organic",
                tags: [Tag::Sustainable, Tag::Handcrafted],
            },
            QuizOption {
                id: "textured",
                text: "Rich & Textured",
                tags: [Tag::Handcrafted, Tag::Luxury],
            },
        ],
    },
    QuizQuestion {
        id: 4,
        prompt: "What occasion inspires your style choices?",
        options: [
            QuizOption {
                id: "everyday",
                text: "Everyday Elegance",
                tags: [Tag::Timeless, Tag::Sustainable],
            },
            QuizOption {
                id: "special",
                text: "Special Moments",
                tags: [Tag::Luxury, Tag::LimitedEdition],
            },
            QuizOption {
                id: "creative",
                text: "Creative Expression",
                tags: [Tag::Handcrafted, Tag::LimitedEdition],
            },
        ],
    },
    QuizQuestion {
        id: 5,
        prompt: "Which color palette resonates with you?",
        options: [
            QuizOption {
                id: "neutral",
                text: "Neutral & Earthy",
                tags: [Tag::Timeless, Tag::Sustainable],
            },
            QuizOption {
                id: "rich",
                text: "Rich & Deep",
                tags: [Tag::Luxury, Tag::Handcrafted],
            },
            QuizOption {
                id: "warm",
                text: "Warm & Inviting",
                tags: [Tag::Handcrafted, Tag::Timeless],
            },
        ],
    },
];

/// Persona lookup order; ties between tag counts resolve to the earliest entry
pub const PERSONA_TAG_ORDER: [Tag; 5] = [
    Tag::Luxury,
    Tag::Handcrafted,
    Tag::Timeless,
    Tag::Sustainable,
    Tag::LimitedEdition,
];

/// One of the five canned style personas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StylePersona {
    /// Dominant `luxury` preference
    LuxuryConnoisseur,
    /// Dominant `handcrafted` preference
    ArtisanAppreciator,
    /// Dominant `timeless` preference (also the default)
    ClassicCurator,
    /// Dominant `sustainable` preference
    ConsciousCollector,
    /// Dominant `limited edition` preference
    ExclusiveExplorer,
}

impl StylePersona {
    /// Persona selected by a dominant tag
    pub const fn for_tag(tag: Tag) -> Self {
        match tag {
            Tag::Luxury => Self::LuxuryConnoisseur,
            Tag::Handcrafted => Self::ArtisanAppreciator,
            Tag::Timeless => Self::ClassicCurator,
            Tag::Sustainable => Self::ConsciousCollector,
            Tag::LimitedEdition => Self::ExclusiveExplorer,
        }
    }

    /// Display title
    pub const fn title(self) -> &'static str {
        match self {
            Self::LuxuryConnoisseur => "Luxury Connoisseur",
            Self::ArtisanAppreciator => "Artisan Appreciator",
            Self::ClassicCurator => "Classic Curator",
            Self::ConsciousCollector => "Conscious Collector",
            Self::ExclusiveExplorer => "Exclusive Explorer",
        }
    }

    /// Persona description shown on quiz completion
    pub const fn description(self) -> &'static str {
        match self {
            Self::LuxuryConnoisseur => {
                "You appreciate the finest things in life, with an eye for exceptional quality and sophisticated design."
            }
            Self::ArtisanAppreciator => {
                "You value unique, handmade pieces that tell a story and showcase exceptional craftsmanship."
            }
            Self::ClassicCurator => {
                "You prefer enduring elegance and pieces that transcend trends, building a lasting collection."
            }
            Self::ConsciousCollector => {
                "You prioritize ethical and sustainable choices, seeking beauty that aligns with your values."
            }
            Self::ExclusiveExplorer => {
                "You seek rare and unique pieces that set you apart, building a truly distinctive collection."
            }
        }
    }
}

/// Look up an option within a question by its identifier
pub fn find_option(question: &QuizQuestion, option_id: &str) -> Option<QuizOption> {
    question
        .options
        .iter()
        .find(|option| option.id == option_id)
        .copied()
}

/// Tally tag frequency across answered questions
///
/// `answers` pairs a question index (0-based into [`QUESTIONS`]) with the
/// selected option id. Unknown indices and ids are skipped.
pub fn score_answers(answers: &[(usize, &str)]) -> IndexMap<Tag, usize> {
    let mut tally: IndexMap<Tag, usize> = IndexMap::new();

    for &(question_index, option_id) in answers {
        let Some(question) = QUESTIONS.get(question_index) else {
            continue;
        };
        let Some(option) = find_option(question, option_id) else {
            continue;
        };
        for tag in option.tags {
            *tally.entry(tag).or_insert(0) += 1;
        }
    }

    tally
}

/// Select the persona for a tag tally
///
/// The highest-count tag wins; equal counts resolve to the earliest entry
/// of [`PERSONA_TAG_ORDER`]. An empty tally yields the Classic Curator
/// default.
pub fn persona_for(tally: &IndexMap<Tag, usize>) -> StylePersona {
    let mut best: Option<(Tag, usize)> = None;

    for &tag in &PERSONA_TAG_ORDER {
        let count = tally.get(&tag).copied().unwrap_or(0);
        if count > 0 && best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((tag, count));
        }
    }

    best.map_or(StylePersona::ClassicCurator, |(tag, _)| {
        StylePersona::for_tag(tag)
    })
}

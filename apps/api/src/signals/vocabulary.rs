//! Curated vocabularies for keyword selection and corpus aggregation.
//!
//! Plain read-only data. Order within each list is priority order: earlier
//! entries win when several match the same text.

/// Words that can never be part of a highlighted phrase: pronouns, articles,
/// auxiliary verbs, contraction fragments, filler function words, and first
/// names seen in sample testimonials.
pub const EXCLUDED_WORDS: &[&str] = &[
    // Pronouns and determiners
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our", "ours",
    "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom", "whose",
    "which", "what", "that", "this", "these", "those", "someone", "everyone", "anyone",
    "everybody", "somebody", "anybody", "something", "everything", "anything",
    // Articles
    "a", "an", "the",
    // Auxiliary and modal verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "get", "gets", "got",
    // Contraction fragments
    "don", "doesn", "didn", "isn", "wasn", "aren", "weren", "won", "wouldn", "couldn",
    "shouldn", "haven", "hasn", "hadn", "can't", "don't", "won't", "isn't", "it's", "i'm",
    "i've", "i'd", "i'll", "you're", "you've", "you'll", "they're", "they've", "we're",
    "we've", "she's", "he's", "that's", "there's", "let's", "s", "t", "ll", "ve", "re", "d", "m",
    // Filler function words long enough to survive the fallback length check
    "with", "from", "about", "into", "than", "then", "there", "here", "when", "where", "while",
    "just", "also", "very", "really", "always", "every", "much", "many", "more", "most", "some",
    "such", "only", "even", "both", "each", "other", "again", "because", "through", "without",
    "working", "worked", "work", "works",
    // First names from sample data
    "maya", "alex", "sarah", "john", "james", "priya", "jordan", "sam", "chris", "emily",
    "michael", "david", "daniel", "olivia", "emma", "liam", "noah", "sophia", "ava", "ethan",
    "taylor", "morgan", "jamie", "casey", "riley", "rahul", "aisha", "wei", "lucas", "nina",
    "marcus", "elena", "omar", "grace", "leo",
];

/// Multi-word phrases checked before single adjectives when selecting
/// per-record keywords.
pub const IMPACT_PHRASES: &[&str] = &[
    "above and beyond",
    "clear communicator",
    "great communicator",
    "calm under pressure",
    "attention to detail",
    "problem solver",
    "team player",
    "natural leader",
    "quick learner",
    "fast learner",
    "strategic thinker",
    "creative thinker",
    "critical thinking",
    "trusted advisor",
    "great mentor",
    "deep expertise",
    "high standards",
    "sound judgment",
    "positive energy",
    "emotional intelligence",
    "genuinely cares",
    "detail oriented",
    "highly organized",
    "big picture",
    "owns outcomes",
    "steady hand",
    "safe space",
];

/// Single-word adjectives that read as a strong trait when highlighted.
pub const IMPACT_ADJECTIVES: &[&str] = &[
    "reliable",
    "thoughtful",
    "exceptional",
    "calm",
    "patient",
    "dependable",
    "brilliant",
    "insightful",
    "empathetic",
    "meticulous",
    "proactive",
    "resourceful",
    "supportive",
    "collaborative",
    "creative",
    "curious",
    "humble",
    "honest",
    "trustworthy",
    "consistent",
    "adaptable",
    "decisive",
    "inspiring",
    "encouraging",
    "knowledgeable",
    "dedicated",
    "diligent",
    "organized",
    "generous",
    "genuine",
    "passionate",
    "responsive",
    "strategic",
    "talented",
    "thorough",
    "transparent",
    "versatile",
    "articulate",
    "approachable",
    "rigorous",
    "steady",
    "kind",
    "warm",
];

/// Action verbs; per-record selection keeps at most one of these.
pub const IMPACT_VERBS: &[&str] = &[
    "delivered",
    "transformed",
    "exceeded",
    "championed",
    "spearheaded",
    "launched",
    "shipped",
    "built",
    "designed",
    "created",
    "solved",
    "rescued",
    "unblocked",
    "streamlined",
    "simplified",
    "accelerated",
    "elevated",
    "improved",
    "mentored",
    "coached",
    "guided",
    "inspired",
    "taught",
    "led",
    "drove",
];

/// Corpus-level working-style patterns: how someone works with others.
pub const WORKING_STYLE_PHRASES: &[&str] = &[
    "clear communicator",
    "great communicator",
    "communicates clearly",
    "team player",
    "attention to detail",
    "detail oriented",
    "problem solver",
    "quick learner",
    "fast learner",
    "calm under pressure",
    "easy to work with",
    "asks great questions",
    "takes ownership",
    "follows through",
    "thoughtful feedback",
    "open to feedback",
    "great listener",
    "good listener",
    "self-starter",
    "hard-working",
    "hardworking",
    "collaborative",
    "organized",
    "reliable",
    "dependable",
    "proactive",
    "patient",
    "thoughtful",
    "empathetic",
    "curious",
    "humble",
    "supportive",
    "responsive",
    "transparent",
    "consistent",
    "adaptable",
    "meticulous",
    "creative",
    "flexible",
    "honest",
    "positive",
    "calm",
    "kind",
    "generous",
    "teamwork",
    "communication",
    "collaboration",
    "ownership",
    "leadership",
    "mentorship",
    "empathy",
    "patience",
    "integrity",
    "accountability",
    "creativity",
    "curiosity",
    "humor",
];

/// Corpus-level contextual/impact patterns: what someone achieved and the
/// situations people describe.
pub const CONTEXTUAL_PHRASES: &[&str] = &[
    "went above and beyond",
    "above and beyond",
    "made a difference",
    "huge impact",
    "real impact",
    "saved the day",
    "raised the bar",
    "exceeded expectations",
    "game changer",
    "go-to person",
    "highly recommend",
    "would hire again",
    "learned so much",
    "helped me grow",
    "made me better",
    "taught me",
    "under pressure",
    "tight deadline",
    "tight deadlines",
    "ahead of schedule",
    "on time",
    "under budget",
    "turned around",
    "cross-functional",
    "stakeholders",
    "customers",
    "onboarding",
    "deadline",
    "launch",
    "migration",
    "outage",
    "crisis",
    "roadmap",
    "strategy",
    "culture",
    "morale",
    "trust",
    "growth",
    "confidence",
    "delivered",
    "shipped",
    "launched",
    "mentored",
    "scaled",
    "hired",
];

/// Returns true when `word` (any casing) is in [`EXCLUDED_WORDS`].
pub fn is_excluded(word: &str) -> bool {
    let lower = word.to_lowercase();
    EXCLUDED_WORDS.contains(&lower.as_str())
}

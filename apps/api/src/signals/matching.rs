//! Word-bounded, case-insensitive literal matching.
//!
//! Every phrase is escaped and wrapped as `(?i)\b...\b`, so callers never
//! deal with regex syntax. Offsets are byte offsets into the original text
//! and always land on char boundaries.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

/// Compiled regex size cap. Phrases are short literals; anything that blows
/// past this is not a phrase worth matching.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// A phrase paired with its compiled word-bounded pattern.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    phrase: String,
    pattern: Regex,
}

impl PhraseMatcher {
    /// Compiles a matcher for `phrase`. Returns `None` for blank phrases or
    /// phrases that cannot be compiled; those are dropped silently.
    pub fn new(phrase: &str) -> Option<Self> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return None;
        }
        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(phrase)))
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .ok()?;
        Some(Self {
            phrase: phrase.to_string(),
            pattern,
        })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// All non-overlapping occurrences, left to right.
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        self.pattern.find_iter(text).map(|m| m.range()).collect()
    }
}

/// Compiles a fixed vocabulary once. Entries that fail to compile are skipped.
pub fn compile_all(phrases: &[&str]) -> Vec<PhraseMatcher> {
    phrases.iter().filter_map(|p| PhraseMatcher::new(p)).collect()
}

/// True when `phrase` occurs in `text` as a whole word or word sequence,
/// ignoring case.
pub fn occurs_in(text: &str, phrase: &str) -> bool {
    PhraseMatcher::new(phrase).is_some_and(|m| m.is_match(text))
}

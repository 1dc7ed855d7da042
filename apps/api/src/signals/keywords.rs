//! Keyword Selector — picks up to four salient phrases from a single testimonial.
//!
//! Selection runs in strict tier order and stops once four phrases are held:
//! 1. Up to three caller tags (1–2 words)            → `Theme`
//! 2. Curated impact phrases, then impact adjectives → `WorkingStyle`
//! 3. At most one impact verb                        → `Contextual`
//! 4. Fallback word, only when 1–3 found nothing     → `Contextual`
//!
//! Every phrase must occur word-bounded in the body, must not sit inside the
//! first three words (the skip zone), and must not contain an excluded word.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::signals::matching::{compile_all, occurs_in, PhraseMatcher};
use crate::signals::tier::{CandidatePhrase, Tier};
use crate::signals::vocabulary::{is_excluded, IMPACT_ADJECTIVES, IMPACT_PHRASES, IMPACT_VERBS};

pub const MAX_KEYWORDS: usize = 4;
const MAX_TAGS_CONSIDERED: usize = 3;
const MAX_TAG_WORDS: usize = 2;
const SKIP_ZONE_WORDS: usize = 3;
const MIN_FALLBACK_CHARS: usize = 4;

static IMPACT_PHRASE_MATCHERS: Lazy<Vec<PhraseMatcher>> = Lazy::new(|| compile_all(IMPACT_PHRASES));
static IMPACT_ADJECTIVE_MATCHERS: Lazy<Vec<PhraseMatcher>> =
    Lazy::new(|| compile_all(IMPACT_ADJECTIVES));
static IMPACT_VERB_MATCHERS: Lazy<Vec<PhraseMatcher>> = Lazy::new(|| compile_all(IMPACT_VERBS));

/// Selects 0–4 keywords for `body`, ordered by tier then discovery order.
///
/// Never fails: an empty or whitespace-only body yields an empty list, and
/// any candidate that does not literally occur in `body` is dropped.
pub fn select_keywords(body: &str, tags: &[String]) -> Vec<CandidatePhrase> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let mut selection = Selection::new(body);

    for tag in tags.iter().take(MAX_TAGS_CONSIDERED) {
        let tag = tag.trim();
        let words = tag.split_whitespace().count();
        if words == 0 || words > MAX_TAG_WORDS {
            continue;
        }
        selection.offer(tag, Tier::Theme);
    }

    for matcher in IMPACT_PHRASE_MATCHERS.iter() {
        if selection.is_full() {
            break;
        }
        if matcher.is_match(body) {
            selection.offer(matcher.phrase(), Tier::WorkingStyle);
        }
    }

    // Skip adjectives already inside a picked phrase ("calm" in "calm under pressure").
    for matcher in IMPACT_ADJECTIVE_MATCHERS.iter() {
        if selection.is_full() {
            break;
        }
        if matcher.is_match(body) && !selection.covers(matcher) {
            selection.offer(matcher.phrase(), Tier::WorkingStyle);
        }
    }

    if !selection.is_full() {
        for matcher in IMPACT_VERB_MATCHERS.iter() {
            if matcher.is_match(body) && selection.offer(matcher.phrase(), Tier::Contextual) {
                break;
            }
        }
    }

    if selection.is_empty() {
        for word in fallback_words(body) {
            if selection.offer(word, Tier::Contextual) {
                break;
            }
        }
    }

    selection.finish()
}

/// Lower-cased first three whitespace-delimited tokens, single-space joined.
pub fn skip_zone(body: &str) -> String {
    body.split_whitespace()
        .take(SKIP_ZONE_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True when `phrase` may be highlighted: it is not wholly inside the skip
/// zone and none of its words is excluded.
pub fn passes_guards(phrase: &str, skip_zone: &str) -> bool {
    let lower = phrase.trim().to_lowercase();
    if lower.is_empty() || skip_zone.contains(&lower) {
        return false;
    }
    !lower.split_whitespace().any(is_excluded)
}

/// Words after the skip zone that are long enough and not capitalized (a
/// rough proper-noun filter), in body order. Exclusion and occurrence checks
/// happen when the word is offered.
fn fallback_words<'a>(body: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    body.split_whitespace()
        .skip(SKIP_ZONE_WORDS)
        .map(trim_punctuation)
        .filter(|word| {
            word.chars().count() >= MIN_FALLBACK_CHARS
                && !word.chars().next().is_some_and(char::is_uppercase)
        })
}

fn trim_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Accumulates accepted keywords, enforcing the guards, the literal-occurrence
/// check, case-insensitive uniqueness, and the size cap.
struct Selection<'a> {
    body: &'a str,
    skip_zone: String,
    seen: HashSet<String>,
    picked: Vec<CandidatePhrase>,
}

impl<'a> Selection<'a> {
    fn new(body: &'a str) -> Self {
        Self {
            body,
            skip_zone: skip_zone(body),
            seen: HashSet::new(),
            picked: Vec::with_capacity(MAX_KEYWORDS),
        }
    }

    fn is_full(&self) -> bool {
        self.picked.len() >= MAX_KEYWORDS
    }

    fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    /// True when `matcher` occurs inside a longer phrase already picked.
    fn covers(&self, matcher: &PhraseMatcher) -> bool {
        self.picked
            .iter()
            .any(|k| k.phrase != matcher.phrase() && matcher.is_match(&k.phrase))
    }

    /// Returns true if the phrase was accepted.
    fn offer(&mut self, phrase: &str, tier: Tier) -> bool {
        if self.is_full() {
            return false;
        }
        let phrase = phrase.trim().to_lowercase();
        if self.seen.contains(&phrase) || !passes_guards(&phrase, &self.skip_zone) {
            return false;
        }
        if !occurs_in(self.body, &phrase) {
            tracing::debug!(%phrase, "dropping keyword absent from body");
            return false;
        }
        self.seen.insert(phrase.clone());
        self.picked.push(CandidatePhrase::new(phrase, tier));
        true
    }

    fn finish(mut self) -> Vec<CandidatePhrase> {
        // Offers arrive tier by tier; the stable sort only guards that contract.
        self.picked.sort_by(|a, b| a.tier.cmp_priority(b.tier));
        self.picked.truncate(MAX_KEYWORDS);
        self.picked
    }
}

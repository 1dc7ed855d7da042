//! Corpus Signal Aggregator — what people consistently say across a profile's testimonials.
//!
//! Counts, per label, the number of distinct records that mention it:
//! - every distinct tag (tag list hit or word-bounded body hit) → `Theme`
//! - the working-style dictionary (substring of body or a tag)  → `WorkingStyle`
//! - the contextual/impact dictionary (same rule)               → `Contextual`
//!
//! A label mentioned by fewer than two records is not a signal.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::record::TextRecord;
use crate::signals::matching::PhraseMatcher;
use crate::signals::tier::{CandidatePhrase, Tier};
use crate::signals::vocabulary::{CONTEXTUAL_PHRASES, WORKING_STYLE_PHRASES};

pub const MIN_SIGNAL_COUNT: u32 = 2;

/// A corpus-level signal: `count` distinct records mention `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalEntry {
    pub label: String,
    pub count: u32,
    /// Source of the label; used for tie-breaks and downstream highlighting.
    pub tier: Tier,
}

impl SignalEntry {
    /// Converts the signal into a highlight candidate carrying its count.
    pub fn to_candidate(&self) -> CandidatePhrase {
        CandidatePhrase {
            phrase: self.label.clone(),
            tier: self.tier,
            frequency: self.count,
        }
    }
}

/// Ranks tags and curated phrases by how many records mention them.
///
/// Sorted by count descending; ties keep tags before working-style before
/// contextual, and first-seen (tags) or dictionary order within a tier.
/// A label already counted from a higher tier is not repeated.
pub fn aggregate_signals(records: &[TextRecord]) -> Vec<SignalEntry> {
    let mut ranking = Ranking::default();

    for tag in distinct_tags(records) {
        let Some(matcher) = PhraseMatcher::new(&tag) else {
            continue;
        };
        let count = count_records(records, |record| {
            record.tags.iter().any(|t| normalize(t) == tag) || matcher.is_match(record.body())
        });
        ranking.push(tag, count, Tier::Theme);
    }

    let folded: Vec<FoldedRecord> = records.iter().map(FoldedRecord::new).collect();
    for (dictionary, tier) in [
        (WORKING_STYLE_PHRASES, Tier::WorkingStyle),
        (CONTEXTUAL_PHRASES, Tier::Contextual),
    ] {
        for phrase in dictionary {
            let count = count_records(&folded, |record| record.mentions(phrase));
            ranking.push(phrase.to_string(), count, tier);
        }
    }

    ranking.finish()
}

/// Lower-cased, trimmed, non-empty tags in first-seen order.
fn distinct_tags(records: &[TextRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .flat_map(|r| r.tags.iter())
        .map(|t| normalize(t))
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}

fn normalize(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Lower-cased copy of a record for plain substring lookups.
struct FoldedRecord {
    body: String,
    tags: Vec<String>,
}

impl FoldedRecord {
    fn new(record: &TextRecord) -> Self {
        Self {
            body: record.body().to_lowercase(),
            tags: record.tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Dictionary phrases match as substrings, so "reliable" also counts
    /// "unreliable".
    fn mentions(&self, phrase: &str) -> bool {
        self.body.contains(phrase) || self.tags.iter().any(|t| t.contains(phrase))
    }
}

fn count_records<R>(records: &[R], hit: impl Fn(&R) -> bool) -> u32 {
    let count = records.iter().filter(|r| hit(r)).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[derive(Default)]
struct Ranking {
    labels: HashSet<String>,
    entries: Vec<SignalEntry>,
}

impl Ranking {
    fn push(&mut self, label: String, count: u32, tier: Tier) {
        if count < MIN_SIGNAL_COUNT || !self.labels.insert(label.clone()) {
            return;
        }
        self.entries.push(SignalEntry { label, count, tier });
    }

    fn finish(mut self) -> Vec<SignalEntry> {
        // Stable: equal (count, tier) keeps insertion order.
        self.entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.tier.cmp_priority(b.tier))
        });
        self.entries
    }
}

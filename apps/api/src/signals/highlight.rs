//! Splits a testimonial into plain and marked segments.
//!
//! Pure computation only. Turning segments into markup is the job of
//! `signals::render`.

use serde::{Deserialize, Serialize};

use crate::signals::matching::PhraseMatcher;
use crate::signals::tier::{CandidatePhrase, Tier};

/// A run of the original text, either untouched or marked for emphasis.
/// Concatenating every segment's text reproduces the body exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Plain { text: String },
    /// `text` keeps the body's casing, not the candidate's.
    Marked { text: String, tier: Tier },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Plain { text: text.into() }
    }

    pub fn marked(text: impl Into<String>, tier: Tier) -> Self {
        Segment::Marked {
            text: text.into(),
            tier,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Marked { text, .. } => text,
        }
    }

    pub fn is_marked(&self) -> bool {
        matches!(self, Segment::Marked { .. })
    }
}

/// One occurrence of a candidate in the body. Offsets are bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub phrase: String,
    pub start: usize,
    pub len: usize,
    pub tier: Tier,
}

impl Match {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Marks up to `max_highlights` candidate occurrences in `body`.
///
/// Overlaps resolve by tier, then by position: matches are visited
/// theme-first, left to right within a tier, and one is kept only when it
/// starts at or after the end of the previously kept match.
pub fn render_highlighted(
    body: &str,
    candidates: &[CandidatePhrase],
    max_highlights: usize,
) -> Vec<Segment> {
    if body.is_empty() || candidates.is_empty() {
        return vec![Segment::plain(body)];
    }

    let kept = resolve_overlaps(find_matches(body, candidates), max_highlights);
    if kept.is_empty() {
        return vec![Segment::plain(body)];
    }

    split_segments(body, &kept).unwrap_or_else(|| vec![Segment::plain(body)])
}

/// Every word-bounded, case-insensitive occurrence of every non-blank candidate.
pub fn find_matches(body: &str, candidates: &[CandidatePhrase]) -> Vec<Match> {
    candidates
        .iter()
        .filter_map(|c| PhraseMatcher::new(&c.phrase).map(|m| (m, c.tier)))
        .flat_map(|(matcher, tier)| {
            matcher
                .find_all(body)
                .into_iter()
                .map(move |range| Match {
                    phrase: matcher.phrase().to_string(),
                    start: range.start,
                    len: range.len(),
                    tier,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Greedy tier-then-position selection, capped at `max_highlights`.
/// Returns the kept matches in left-to-right order.
pub fn resolve_overlaps(mut matches: Vec<Match>, max_highlights: usize) -> Vec<Match> {
    matches.sort_by(|a, b| {
        a.tier
            .cmp_priority(b.tier)
            .then_with(|| a.start.cmp(&b.start))
    });

    let mut kept: Vec<Match> = Vec::new();
    let mut last_end = 0;
    for candidate in matches {
        if kept.len() >= max_highlights {
            break;
        }
        if candidate.start >= last_end {
            last_end = candidate.end();
            kept.push(candidate);
        }
    }

    kept.sort_by_key(|m| m.start);
    kept
}

/// `None` if any kept range falls outside `body` or off a char boundary.
fn split_segments(body: &str, kept: &[Match]) -> Option<Vec<Segment>> {
    let mut segments = Vec::with_capacity(kept.len() * 2 + 1);
    let mut cursor = 0;
    for m in kept {
        let before = body.get(cursor..m.start)?;
        if !before.is_empty() {
            segments.push(Segment::plain(before));
        }
        segments.push(Segment::marked(body.get(m.start..m.end())?, m.tier));
        cursor = m.end();
    }
    let rest = body.get(cursor..)?;
    if !rest.is_empty() {
        segments.push(Segment::plain(rest));
    }
    Some(segments)
}

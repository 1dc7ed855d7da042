//! Priority tiers shared by keyword selection, aggregation, and highlighting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Priority class of a phrase. Declaration order is priority order:
/// `Theme` outranks `WorkingStyle`, which outranks `Contextual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Caller-supplied tags (selected traits).
    Theme,
    /// Curated impact adjectives and working-style phrases.
    WorkingStyle,
    /// Impact verbs, contextual phrases, and the fallback word.
    Contextual,
}

impl Tier {
    /// Lower value wins overlap resolution and ranking ties.
    pub fn priority(self) -> u8 {
        match self {
            Tier::Theme => 0,
            Tier::WorkingStyle => 1,
            Tier::Contextual => 2,
        }
    }

    /// Orders two tiers so that the higher-priority tier sorts first.
    pub fn cmp_priority(self, other: Tier) -> Ordering {
        self.priority().cmp(&other.priority())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Theme => "theme",
            Tier::WorkingStyle => "working-style",
            Tier::Contextual => "contextual",
        }
    }
}

/// A phrase proposed for highlighting, with its tier and corpus frequency.
///
/// Per-record selection always reports `frequency = 1`; aggregated signals
/// carry their record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePhrase {
    pub phrase: String,
    pub tier: Tier,
    #[serde(default = "default_frequency")]
    pub frequency: u32,
}

fn default_frequency() -> u32 {
    1
}

impl CandidatePhrase {
    pub fn new(phrase: impl Into<String>, tier: Tier) -> Self {
        Self {
            phrase: phrase.into(),
            tier,
            frequency: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_outranks_everything() {
        assert_eq!(Tier::Theme.cmp_priority(Tier::WorkingStyle), Ordering::Less);
        assert_eq!(Tier::Theme.cmp_priority(Tier::Contextual), Ordering::Less);
        assert_eq!(
            Tier::Contextual.cmp_priority(Tier::WorkingStyle),
            Ordering::Greater
        );
    }

    #[test]
    fn test_derived_ord_agrees_with_priority() {
        let mut tiers = vec![Tier::Contextual, Tier::Theme, Tier::WorkingStyle];
        tiers.sort();
        assert_eq!(tiers, vec![Tier::Theme, Tier::WorkingStyle, Tier::Contextual]);
        for pair in tiers.windows(2) {
            assert_eq!(pair[0].cmp(&pair[1]), pair[0].cmp_priority(pair[1]));
        }
    }

    #[test]
    fn test_tier_serde_names() {
        assert_eq!(
            serde_json::to_string(&Tier::WorkingStyle).unwrap(),
            r#""working-style""#
        );
        let tier: Tier = serde_json::from_str(r#""theme""#).unwrap();
        assert_eq!(tier, Tier::Theme);
        assert_eq!(Tier::Contextual.as_str(), "contextual");
    }

    #[test]
    fn test_candidate_frequency_defaults_to_one() {
        let candidate: CandidatePhrase =
            serde_json::from_str(r#"{"phrase": "calm", "tier": "theme"}"#).unwrap();
        assert_eq!(candidate.frequency, 1);
        assert_eq!(candidate, CandidatePhrase::new("calm", Tier::Theme));
    }
}

//! Axum route handlers for the Signals API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::record::TextRecord;
use crate::signals::{
    aggregate_signals, render::to_html, render_highlighted, select_keywords, CandidatePhrase,
    Segment, SignalEntry,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<CandidatePhrase>,
}

#[derive(Debug, Deserialize)]
pub struct AggregateRequest {
    #[serde(default)]
    pub records: Vec<TextRecord>,
}

#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    pub signals: Vec<SignalEntry>,
    pub record_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct HighlightRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub candidates: Vec<CandidatePhrase>,
    pub max_highlights: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HighlightResponse {
    pub segments: Vec<Segment>,
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct CardsRequest {
    #[serde(default)]
    pub records: Vec<TextRecord>,
    pub max_highlights: Option<usize>,
    /// Also mark corpus signals in each card, after the card's own keywords.
    #[serde(default)]
    pub highlight_signals: bool,
}

/// One testimonial ready for display.
#[derive(Debug, Serialize)]
pub struct Card {
    pub id: String,
    pub keywords: Vec<CandidatePhrase>,
    pub segments: Vec<Segment>,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct CardsResponse {
    pub cards: Vec<Card>,
    pub signals: Vec<SignalEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/signals/keywords
///
/// Selects up to four keywords for a single testimonial.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let body = request.body.unwrap_or_default();
    check_body(&state.config, &body)?;
    check_tags(&state.config, &request.tags)?;

    let keywords = select_keywords(&body, &request.tags);
    debug!(
        tags = request.tags.len(),
        keywords = keywords.len(),
        "keywords selected"
    );

    Ok(Json(KeywordsResponse { keywords }))
}

/// POST /api/v1/signals/aggregate
///
/// Ranks what a whole collection of testimonials consistently says.
pub async fn handle_aggregate(
    State(state): State<AppState>,
    Json(request): Json<AggregateRequest>,
) -> Result<Json<AggregateResponse>, AppError> {
    check_records(&state.config, &request.records)?;

    let record_count = request.records.len();
    let signals = tokio::task::spawn_blocking(move || aggregate_signals(&request.records))
        .await
        .map_err(|e| AppError::Internal(e.into()))?;
    debug!(record_count, signals = signals.len(), "signals aggregated");

    Ok(Json(AggregateResponse {
        signals,
        record_count,
    }))
}

/// POST /api/v1/signals/highlight
///
/// Splits a testimonial into plain and marked segments for the given candidates.
pub async fn handle_highlight(
    State(state): State<AppState>,
    Json(request): Json<HighlightRequest>,
) -> Result<Json<HighlightResponse>, AppError> {
    let body = request.body.unwrap_or_default();
    check_body(&state.config, &body)?;
    check_candidates(&state.config, &request.candidates)?;
    let max_highlights = resolve_max_highlights(&state.config, request.max_highlights)?;

    let segments = render_highlighted(&body, &request.candidates, max_highlights);
    let html = to_html(&segments);
    debug!(
        candidates = request.candidates.len(),
        marked = segments.iter().filter(|s| s.is_marked()).count(),
        "body highlighted"
    );

    Ok(Json(HighlightResponse { segments, html }))
}

/// POST /api/v1/signals/cards
///
/// Full profile pipeline: per-record keyword selection and highlighting,
/// plus the corpus-level signal ranking.
pub async fn handle_cards(
    State(state): State<AppState>,
    Json(request): Json<CardsRequest>,
) -> Result<Json<CardsResponse>, AppError> {
    check_records(&state.config, &request.records)?;
    let max_highlights = resolve_max_highlights(&state.config, request.max_highlights)?;

    let highlight_signals = request.highlight_signals;
    let response = tokio::task::spawn_blocking(move || {
        build_cards(&request.records, max_highlights, highlight_signals)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;
    debug!(
        cards = response.cards.len(),
        signals = response.signals.len(),
        "cards built"
    );

    Ok(Json(response))
}

fn build_cards(
    records: &[TextRecord],
    max_highlights: usize,
    highlight_signals: bool,
) -> CardsResponse {
    let signals = aggregate_signals(records);
    let signal_candidates: Vec<CandidatePhrase> = if highlight_signals {
        signals.iter().map(SignalEntry::to_candidate).collect()
    } else {
        Vec::new()
    };

    let cards = records
        .iter()
        .map(|record| {
            let keywords = select_keywords(record.body(), &record.tags);
            let mut candidates = keywords.clone();
            candidates.extend(signal_candidates.iter().cloned());
            let segments = render_highlighted(record.body(), &candidates, max_highlights);
            let html = to_html(&segments);
            Card {
                id: record.id.clone(),
                keywords,
                segments,
                html,
            }
        })
        .collect();

    CardsResponse { cards, signals }
}

// ────────────────────────────────────────────────────────────────────────────
// Request validation
// ────────────────────────────────────────────────────────────────────────────

fn check_body(config: &Config, body: &str) -> Result<(), AppError> {
    let chars = body.chars().count();
    if chars > config.max_body_chars {
        return Err(AppError::PayloadTooLarge(format!(
            "body is {chars} characters, limit is {}",
            config.max_body_chars
        )));
    }
    Ok(())
}

fn check_records(config: &Config, records: &[TextRecord]) -> Result<(), AppError> {
    if records.len() > config.max_records {
        return Err(AppError::PayloadTooLarge(format!(
            "at most {} records per request, got {}",
            config.max_records,
            records.len()
        )));
    }
    records.iter().try_for_each(|r| {
        check_body(config, r.body())?;
        check_tags(config, &r.tags)
    })
}

/// Each distinct tag is matched against every record in the corpus.
fn check_tags(config: &Config, tags: &[String]) -> Result<(), AppError> {
    if tags.len() > config.max_tags {
        return Err(AppError::PayloadTooLarge(format!(
            "at most {} tags per record, got {}",
            config.max_tags,
            tags.len()
        )));
    }
    if let Some(chars) = tags
        .iter()
        .map(|t| t.chars().count())
        .find(|&chars| chars > config.max_tag_chars)
    {
        return Err(AppError::PayloadTooLarge(format!(
            "tag is {chars} characters, limit is {}",
            config.max_tag_chars
        )));
    }
    Ok(())
}

fn check_candidates(config: &Config, candidates: &[CandidatePhrase]) -> Result<(), AppError> {
    if candidates.len() > config.max_candidates {
        return Err(AppError::PayloadTooLarge(format!(
            "at most {} candidates per request, got {}",
            config.max_candidates,
            candidates.len()
        )));
    }
    Ok(())
}

fn resolve_max_highlights(config: &Config, requested: Option<usize>) -> Result<usize, AppError> {
    match requested {
        None => Ok(config.default_max_highlights),
        Some(0) => Err(AppError::Validation(
            "max_highlights must be at least 1".to_string(),
        )),
        Some(n) if n > config.max_highlights_limit => Err(AppError::Validation(format!(
            "max_highlights must be at most {}",
            config.max_highlights_limit
        ))),
        Some(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::tier::Tier;

    #[test]
    fn test_resolve_max_highlights() {
        let config = Config::default();
        assert_eq!(resolve_max_highlights(&config, None).unwrap(), 5);
        assert_eq!(resolve_max_highlights(&config, Some(3)).unwrap(), 3);
        assert_eq!(resolve_max_highlights(&config, Some(20)).unwrap(), 20);
        assert!(matches!(
            resolve_max_highlights(&config, Some(0)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            resolve_max_highlights(&config, Some(21)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_check_records_limits() {
        let config = Config {
            max_records: 2,
            max_body_chars: 10,
            ..Config::default()
        };
        let ok = vec![TextRecord::new("1", "calm", &[]), TextRecord::default()];
        assert!(check_records(&config, &ok).is_ok());

        let too_many = vec![TextRecord::default(); 3];
        assert!(matches!(
            check_records(&config, &too_many),
            Err(AppError::PayloadTooLarge(_))
        ));

        let too_long = vec![TextRecord::new("1", "calm and reliable", &[])];
        assert!(matches!(
            check_records(&config, &too_long),
            Err(AppError::PayloadTooLarge(_))
        ));
    }

    #[test]
    fn test_check_records_limits_tags() {
        let config = Config {
            max_tags: 2,
            max_tag_chars: 8,
            ..Config::default()
        };
        let ok = vec![TextRecord::new("1", "calm", &["calm", "reliable"])];
        assert!(check_records(&config, &ok).is_ok());

        let too_many = vec![TextRecord::new("1", "calm", &["calm", "kind", "humble"])];
        assert!(matches!(
            check_records(&config, &too_many),
            Err(AppError::PayloadTooLarge(_))
        ));

        let too_long = vec![TextRecord::new("1", "calm", &["calm under pressure"])];
        assert!(matches!(
            check_records(&config, &too_long),
            Err(AppError::PayloadTooLarge(_))
        ));
    }

    #[test]
    fn test_check_candidates_uses_configured_limit() {
        let config = Config {
            max_candidates: 1,
            ..Config::default()
        };
        let one = vec![CandidatePhrase::new("calm", Tier::Theme)];
        assert!(check_candidates(&config, &one).is_ok());

        let two = vec![
            CandidatePhrase::new("calm", Tier::Theme),
            CandidatePhrase::new("kind", Tier::WorkingStyle),
        ];
        assert!(matches!(
            check_candidates(&config, &two),
            Err(AppError::PayloadTooLarge(_))
        ));
    }

    #[test]
    fn test_body_limit_counts_chars_not_bytes() {
        let config = Config {
            max_body_chars: 4,
            ..Config::default()
        };
        assert!(check_body(&config, "éééé").is_ok());
        assert!(check_body(&config, "ééééé").is_err());
    }

    #[test]
    fn test_build_cards_runs_full_pipeline() {
        let records = vec![
            TextRecord::new("a", "Working with Maya felt calm and reliable.", &["Calm"]),
            TextRecord::new("b", "Honestly the most reliable person on call.", &[]),
        ];
        let response = build_cards(&records, 5, false);

        assert_eq!(response.cards.len(), 2);
        let first = &response.cards[0];
        assert_eq!(first.id, "a");
        assert_eq!(first.keywords[0], CandidatePhrase::new("calm", Tier::Theme));
        let rebuilt: String = first.segments.iter().map(Segment::text).collect();
        assert_eq!(rebuilt, records[0].body());
        assert!(first.html.contains("<mark class=\"kudos-theme\">calm</mark>"));

        let reliable = response
            .signals
            .iter()
            .find(|s| s.label == "reliable")
            .expect("reliable is mentioned twice");
        assert_eq!(reliable.count, 2);
    }

    #[test]
    fn test_build_cards_can_mark_corpus_signals() {
        let records = vec![
            TextRecord::new("a", "Across two sprints she was patient through the launch.", &[]),
            TextRecord::new("b", "Patient mentor, and we hit the launch date.", &[]),
        ];
        let plain = build_cards(&records, 5, false);
        let with_signals = build_cards(&records, 5, true);

        let marked = |card: &Card| -> Vec<String> {
            card.segments
                .iter()
                .filter(|s| s.is_marked())
                .map(|s| s.text().to_lowercase())
                .collect()
        };
        assert!(!marked(&plain.cards[0]).contains(&"launch".to_string()));
        assert!(marked(&with_signals.cards[0]).contains(&"launch".to_string()));
        assert!(marked(&with_signals.cards[1]).contains(&"launch".to_string()));
    }
}

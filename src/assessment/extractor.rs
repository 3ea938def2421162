//! Turn free-form model output into an [`Assessment`].
//!
//! Parsing never fails: a missing percentage falls back to a random score
//! in `[10, 49]`, and an answer whose fragments are all empty or about risk
//! yields a single default recommendation. Text without any enumeration
//! marker is one fragment and is kept whole.

use super::patterns::{risk_pattern, ENUMERATION_DELIMITER};
use super::random::RandomSource;
use crate::models::{Assessment, AssessmentSource, Condition, MAX_RISK};

pub const MAX_RECOMMENDATIONS: usize = 5;

pub const DEFAULT_RECOMMENDATION: &str =
    "Consult with a healthcare professional for personalized advice";

/// Fallback score is `floor(uniform(0, 40)) + 10`.
const FALLBACK_SPAN: f64 = 40.0;
const FALLBACK_FLOOR: u8 = 10;

/// Fragments mentioning this word are risk statements, not advice.
const RISK_WORD: &str = "risk";

/// Extract all three scores, the recommendations, and keep the whole text
/// as the explanation. Draws randomness only for conditions without a
/// percentage, in diabetes, hypertension, depression order.
pub fn extract_assessment<R: RandomSource>(text: &str, mut rng: R) -> Assessment {
    let mut fallbacks = 0usize;
    let scores = Condition::ALL.map(|c| match parse_risk_percentage(text, c) {
        Some(score) => score,
        None => {
            fallbacks += 1;
            fallback_risk(&mut rng)
        }
    });

    let recommendations = extract_recommendations(text);

    tracing::debug!(
        ?scores,
        fallbacks,
        recommendations = recommendations.len(),
        "Model response extracted"
    );

    Assessment::from_scores(
        scores,
        recommendations,
        text.to_string(),
        AssessmentSource::Model,
    )
}

/// Percentage for `condition`, or a random score in `[10, 49]` if absent.
pub fn extract_risk_percentage<R: RandomSource>(text: &str, condition: Condition, rng: R) -> u8 {
    parse_risk_percentage(text, condition).unwrap_or_else(|| fallback_risk(rng))
}

/// First `<condition> ... <digits>%` in `text`, clamped to 100.
///
/// A digit run too long for `u64` saturates to 100.
pub fn parse_risk_percentage(text: &str, condition: Condition) -> Option<u8> {
    let caps = risk_pattern(condition).regex.captures(text)?;
    let digits = caps.get(1)?.as_str();
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some(value.min(MAX_RISK as u64) as u8)
}

fn fallback_risk<R: RandomSource>(mut rng: R) -> u8 {
    let offset = rng.uniform(FALLBACK_SPAN).floor() as u8;
    FALLBACK_FLOOR + offset.min(FALLBACK_SPAN as u8 - 1)
}

/// Split on enumeration markers, trim, drop empty and risk-related
/// fragments, keep the first five.
pub fn extract_recommendations(text: &str) -> Vec<String> {
    let recommendations: Vec<String> = ENUMERATION_DELIMITER
        .split(text)
        .map(trim_fragment)
        .filter(|item| !item.is_empty() && !item.to_lowercase().contains(RISK_WORD))
        .take(MAX_RECOMMENDATIONS)
        .map(String::from)
        .collect();

    if recommendations.is_empty() {
        vec![DEFAULT_RECOMMENDATION.to_string()]
    } else {
        recommendations
    }
}

/// Whitespace and byte-order marks on both ends.
fn trim_fragment(fragment: &str) -> &str {
    fragment.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

//! Keyword risk estimator: heuristic scoring used when no model answer is
//! available.
//!
//! score = min(round(count / table_len * 70 + uniform(0, 30)), 100)

use super::keywords::{KeywordMatch, KeywordTables, REFERENCE_TABLES};
use super::random::RandomSource;
use crate::models::{Assessment, AssessmentSource, Condition, HealthInput, MAX_RISK};

/// Share of the score driven by keyword density.
pub const KEYWORD_WEIGHT: f64 = 70.0;
/// Width of the random component.
pub const RANDOM_SPAN: f64 = 30.0;
/// A condition's specific advice is added above this score.
pub const SPECIFIC_ADVICE_THRESHOLD: u8 = 30;
/// Professional consultation is advised when any score exceeds this.
pub const CONSULT_THRESHOLD: u8 = 50;

pub const BASELINE_RECOMMENDATIONS: [&str; 2] = [
    "Maintain a balanced diet rich in fruits, vegetables, and whole grains.",
    "Stay physically active with at least 150 minutes of moderate exercise weekly.",
];

pub const CONSULT_RECOMMENDATION: &str =
    "Consult with a healthcare professional for a comprehensive evaluation.";

pub const EXPLANATION_PREAMBLE: &str =
    "Based on your input, our AI analysis has identified potential risk factors:\n\n";

pub const EXPLANATION_DISCLAIMER: &str = "\nPlease note that this assessment is based solely on the text you provided and is not a medical diagnosis. \
For a comprehensive evaluation, consult with a healthcare professional.";

/// Condition-specific advice, two items each.
pub fn specific_recommendations(condition: Condition) -> [&'static str; 2] {
    match condition {
        Condition::Diabetes => [
            "Monitor your blood sugar levels regularly.",
            "Limit intake of refined carbohydrates and sugary foods.",
        ],
        Condition::Hypertension => [
            "Reduce sodium intake to help manage blood pressure.",
            "Practice stress-reduction techniques such as meditation.",
        ],
        Condition::Depression => [
            "Consider mindfulness practices to improve mental wellbeing.",
            "Maintain social connections and seek support when needed.",
        ],
    }
}

/// Heuristic estimator over a set of keyword tables.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRiskEstimator {
    tables: KeywordTables,
}

impl Default for KeywordRiskEstimator {
    fn default() -> Self {
        Self::new(REFERENCE_TABLES)
    }
}

impl KeywordRiskEstimator {
    pub fn new(tables: KeywordTables) -> Self {
        Self { tables }
    }

    /// Score `input`, drawing one random sample per condition in
    /// diabetes, hypertension, depression order. Never fails.
    pub fn estimate<R: RandomSource>(&self, input: &HealthInput, mut rng: R) -> Assessment {
        let matches = self.tables.scan(&input.text);
        let scores = matches
            .each_ref()
            .map(|m| risk_score(m.count(), self.tables.table(m.condition).len(), &mut rng));

        tracing::debug!(
            diabetes_matches = matches[0].count(),
            hypertension_matches = matches[1].count(),
            depression_matches = matches[2].count(),
            ?scores,
            "Keyword estimate computed"
        );

        Assessment::from_scores(
            scores,
            build_recommendations(scores),
            build_explanation(&matches),
            AssessmentSource::Heuristic,
        )
    }
}

/// `min(round(count / total * 70 + uniform(0, 30)), 100)`.
///
/// An empty table contributes no keyword share.
pub fn risk_score<R: RandomSource>(count: usize, total: usize, mut rng: R) -> u8 {
    let base = if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * KEYWORD_WEIGHT
    };
    let random = rng.uniform(RANDOM_SPAN);
    let score = (base + random).round().clamp(0.0, MAX_RISK as f64);
    score as u8
}

/// Baseline, then per-condition advice in condition order, then the
/// consultation line.
pub fn build_recommendations(scores: [u8; 3]) -> Vec<String> {
    let mut recommendations: Vec<String> =
        BASELINE_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect();

    for condition in Condition::ALL {
        if scores[condition.index()] > SPECIFIC_ADVICE_THRESHOLD {
            recommendations.extend(specific_recommendations(condition).map(String::from));
        }
    }

    if scores.iter().any(|&s| s > CONSULT_THRESHOLD) {
        recommendations.push(CONSULT_RECOMMENDATION.to_string());
    }

    recommendations
}

/// Preamble, one sentence per condition with at least one match, disclaimer.
pub fn build_explanation(matches: &[KeywordMatch]) -> String {
    let mut explanation = String::from(EXPLANATION_PREAMBLE);
    for m in matches.iter().filter(|m| m.count() > 0) {
        explanation.push_str(&format!(
            "For {name}: We detected {count} keywords related to {name} risk factors.\n",
            name = m.condition,
            count = m.count(),
        ));
    }
    explanation.push_str(EXPLANATION_DISCLAIMER);
    explanation
}

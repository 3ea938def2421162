use serde::{Deserialize, Serialize};

use super::enums::{AssessmentSource, Condition};

/// Upper bound of every risk score.
pub const MAX_RISK: u8 = 100;

/// Normalized output of both assessment strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub diabetes_risk: u8,
    pub hypertension_risk: u8,
    pub depression_risk: u8,
    /// Generation order is preserved; duplicates are allowed.
    pub recommendations: Vec<String>,
    pub explanation: String,
    pub source: AssessmentSource,
}

impl Assessment {
    /// Build an assessment from per-condition scores in [`Condition::ALL`] order.
    ///
    /// Scores above [`MAX_RISK`] are clamped.
    pub fn from_scores(
        scores: [u8; 3],
        recommendations: Vec<String>,
        explanation: String,
        source: AssessmentSource,
    ) -> Self {
        let [diabetes, hypertension, depression] = scores.map(|s| s.min(MAX_RISK));
        Self {
            diabetes_risk: diabetes,
            hypertension_risk: hypertension,
            depression_risk: depression,
            recommendations,
            explanation,
            source,
        }
    }

    pub fn risk(&self, condition: Condition) -> u8 {
        match condition {
            Condition::Diabetes => self.diabetes_risk,
            Condition::Hypertension => self.hypertension_risk,
            Condition::Depression => self.depression_risk,
        }
    }

    pub fn scores(&self) -> [u8; 3] {
        Condition::ALL.map(|c| self.risk(c))
    }
}

use serde::{Deserialize, Serialize};

use super::enums::PhysicalActivity;
use crate::assessment::AssessmentError;

/// Free-text health narrative plus optional structured fields.
///
/// Input to the keyword estimator. Only `text` drives scoring; the
/// structured fields travel with the request for callers that log or
/// display them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthInput {
    pub text: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Centimetres.
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub medical_history: Option<String>,
}

impl HealthInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, weight_kg: f64, height_cm: f64) -> Self {
        self.weight = Some(weight_kg);
        self.height = Some(height_cm);
        self
    }

    /// Reject physically meaningless measurements. Empty text is accepted.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        check_measure("weight", self.weight)?;
        check_measure("height", self.height)
    }
}

/// Structured request for the model path.
///
/// Used only to build the prompt; extraction never looks at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHealthData {
    pub symptoms: String,
    pub age: u32,
    pub gender: String,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    pub smoker: bool,
    pub physical_activity: PhysicalActivity,
    pub medical_history: String,
    /// Extracted text of uploaded documents.
    #[serde(default)]
    pub medical_documents: Vec<String>,
}

impl UserHealthData {
    pub fn validate(&self) -> Result<(), AssessmentError> {
        check_measure("weight", Some(self.weight))?;
        check_measure("height", Some(self.height))
    }
}

impl From<&UserHealthData> for HealthInput {
    fn from(data: &UserHealthData) -> Self {
        HealthInput {
            text: data.symptoms.clone(),
            age: Some(data.age),
            gender: Some(data.gender.clone()),
            weight: Some(data.weight),
            height: Some(data.height),
            medical_history: Some(data.medical_history.clone()),
        }
    }
}

fn check_measure(field: &str, value: Option<f64>) -> Result<(), AssessmentError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(AssessmentError::InvalidInput(format!(
            "{field} must be a non-negative number, got {v}"
        ))),
        _ => Ok(()),
    }
}

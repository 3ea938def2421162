use std::time::Instant;

use super::estimator::KeywordRiskEstimator;
use super::extractor::extract_assessment;
use super::prompt::build_assessment_prompt;
use super::random::RandomSource;
use super::types::LlmClient;
use super::AssessmentError;
use crate::models::{Assessment, HealthInput, UserHealthData};

/// Runs the model path and, when asked, falls back to the keyword estimator.
pub struct HealthAnalyzer<C> {
    client: C,
    model: String,
    estimator: KeywordRiskEstimator,
}

impl<C: LlmClient> HealthAnalyzer<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            estimator: KeywordRiskEstimator::default(),
        }
    }

    pub fn with_estimator(mut self, estimator: KeywordRiskEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    /// The model name being used.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Prompt the model and extract an assessment from its answer.
    ///
    /// A single request, no retry: upstream failures are returned unchanged.
    pub fn analyze_with_model<R: RandomSource>(
        &self,
        data: &UserHealthData,
        rng: R,
    ) -> Result<Assessment, AssessmentError> {
        data.validate()?;

        let prompt = build_assessment_prompt(data);
        let start = Instant::now();
        let text = self.client.generate(&self.model, &prompt)?;

        tracing::info!(
            model = %self.model,
            elapsed_ms = start.elapsed().as_millis() as u64,
            response_len = text.len(),
            "Model assessment received"
        );

        Ok(extract_assessment(&text, rng))
    }

    /// Model path first; on an upstream failure, the keyword estimate of
    /// the same request. Invalid input is still returned as an error.
    pub fn analyze_with_fallback<R: RandomSource>(
        &self,
        data: &UserHealthData,
        mut rng: R,
    ) -> Result<Assessment, AssessmentError> {
        match self.analyze_with_model(data, &mut rng) {
            Ok(assessment) => Ok(assessment),
            Err(e) if e.is_external() => {
                tracing::warn!(model = %self.model, error = %e, "Model assessment failed, using keyword estimate");
                Ok(self.estimate(&HealthInput::from(data), rng))
            }
            Err(e) => Err(e),
        }
    }

    /// Keyword estimate without contacting the model.
    pub fn estimate<R: RandomSource>(&self, input: &HealthInput, rng: R) -> Assessment {
        self.estimator.estimate(input, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::gemini::MockLlmClient;
    use crate::assessment::random::FixedRandom;
    use crate::models::{AssessmentSource, PhysicalActivity};

    fn data() -> UserHealthData {
        UserHealthData {
            symptoms: "Constant thirst, frequent urination and blurred vision".into(),
            age: 58,
            gender: "female".into(),
            weight: 95.0,
            height: 160.0,
            smoker: false,
            physical_activity: PhysicalActivity::Low,
            medical_history: "Gestational diabetes".into(),
            medical_documents: vec!["Fasting glucose 7.9 mmol/L".into()],
        }
    }

    #[test]
    fn model_path_extracts_from_response() {
        let client = MockLlmClient::new(
            "Diabetes risk: 72%\nHypertension: 40%\nDepression: 15%\n\n- Cut sugary drinks\n- Walk after meals",
        );
        let analyzer = HealthAnalyzer::new(&client, "gemini-2.0-flash");
        let a = analyzer.analyze_with_model(&data(), FixedRandom::zero()).unwrap();

        assert_eq!(a.scores(), [72, 40, 15]);
        assert_eq!(a.source, AssessmentSource::Model);
        assert_eq!(a.recommendations, vec!["Cut sugary drinks", "Walk after meals"]);

        let prompts = client.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("- Symptoms: Constant thirst"));
        assert!(prompts[0].contains("Fasting glucose 7.9 mmol/L"));
    }

    #[test]
    fn model_failure_propagates_unchanged() {
        let error = AssessmentError::ServiceError {
            status: 503,
            body: "overloaded".into(),
        };
        let client = MockLlmClient::failing(error.clone());
        let analyzer = HealthAnalyzer::new(client, "gemini-2.0-flash");
        let err = analyzer.analyze_with_model(&data(), FixedRandom::zero()).unwrap_err();
        assert_eq!(err, error);
    }

    #[test]
    fn fallback_uses_keyword_estimate() {
        let client = MockLlmClient::failing(AssessmentError::Connection("http://x".into()));
        let analyzer = HealthAnalyzer::new(&client, "gemini-2.0-flash");
        let a = analyzer.analyze_with_fallback(&data(), FixedRandom::zero()).unwrap();

        assert_eq!(a.source, AssessmentSource::Heuristic);
        // thirst, urination, blurred vision: 3/12 * 70 = 17.5 -> 18
        assert_eq!(a.diabetes_risk, 18);
        // blurred vision: 1/12 * 70 = 5.83 -> 6
        assert_eq!(a.hypertension_risk, 6);
        assert_eq!(a.depression_risk, 0);
        assert_eq!(client.prompts().len(), 1);
    }

    #[test]
    fn fallback_not_used_when_model_succeeds() {
        let client = MockLlmClient::new("No structured answer");
        let analyzer = HealthAnalyzer::new(client, "gemini-2.0-flash");
        let a = analyzer.analyze_with_fallback(&data(), FixedRandom::zero()).unwrap();
        assert_eq!(a.source, AssessmentSource::Model);
        assert_eq!(a.scores(), [10, 10, 10]);
        assert_eq!(a.explanation, "No structured answer");
    }

    #[test]
    fn invalid_input_is_not_masked_by_fallback() {
        let client = MockLlmClient::new("Diabetes 10%");
        let analyzer = HealthAnalyzer::new(&client, "gemini-2.0-flash");
        let mut bad = data();
        bad.weight = -1.0;
        let err = analyzer.analyze_with_fallback(&bad, FixedRandom::zero()).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidInput(_)));
        assert!(client.prompts().is_empty());
    }

    #[test]
    fn boxed_client_works() {
        let client: Box<dyn LlmClient> = Box::new(MockLlmClient::new("Depression: 33%"));
        let analyzer = HealthAnalyzer::new(client, "m");
        let a = analyzer.analyze_with_model(&data(), FixedRandom::zero()).unwrap();
        assert_eq!(a.depression_risk, 33);
        assert_eq!(analyzer.model(), "m");
    }
}

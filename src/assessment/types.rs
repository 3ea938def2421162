use std::sync::Arc;

use super::AssessmentError;

/// Generative model client abstraction (allows mocking)
pub trait LlmClient {
    /// Send `prompt` to `model` and return the raw text answer.
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AssessmentError>;
}

impl<C: LlmClient + ?Sized> LlmClient for Box<C> {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AssessmentError> {
        (**self).generate(model, prompt)
    }
}

impl<C: LlmClient + ?Sized> LlmClient for Arc<C> {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AssessmentError> {
        (**self).generate(model, prompt)
    }
}

impl<C: LlmClient + ?Sized> LlmClient for &C {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AssessmentError> {
        (**self).generate(model, prompt)
    }
}

use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::LlmClient;
use super::AssessmentError;
use crate::config::AppConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Blocking HTTP client for the Gemini `generateContent` endpoint.
///
/// Must not be created or dropped on an async runtime thread; run it
/// inside `spawn_blocking`.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, AssessmentError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AssessmentError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            timeout_secs,
        })
    }

    /// Client from application config. Fails when no API key is set.
    pub fn from_config(config: &AppConfig) -> Result<Self, AssessmentError> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            AssessmentError::NotConfigured(format!("{} is not set", crate::config::ENV_API_KEY))
        })?;
        Self::new(&config.base_url, api_key, config.timeout_secs)
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

/// Request body for `models/{model}:generateContent`
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Response body from `generateContent`
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Concatenated text parts of the first candidate.
pub fn parse_generate_response(body: &str) -> Result<String, AssessmentError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| AssessmentError::ResponseParsing(e.to_string()))?;

    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AssessmentError::ResponseParsing("No candidates in response".into()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AssessmentError::ResponseParsing("Candidate has no text".into()));
    }
    Ok(text)
}

impl LlmClient for GeminiClient {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AssessmentError> {
        let url = self.endpoint(model);
        let body = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(model, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    AssessmentError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    AssessmentError::Timeout(self.timeout_secs)
                } else {
                    AssessmentError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AssessmentError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().map_err(|e| {
            if e.is_timeout() {
                AssessmentError::Timeout(self.timeout_secs)
            } else {
                AssessmentError::ResponseParsing(e.to_string())
            }
        })?;

        parse_generate_response(&body)
    }
}

/// Mock LLM client for testing — returns a configurable response.
pub struct MockLlmClient {
    response: Result<String, AssessmentError>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A client whose every call fails with `error`.
    pub fn failing(error: AssessmentError) -> Self {
        Self {
            response: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl LlmClient for MockLlmClient {
    fn generate(&self, _model: &str, prompt: &str) -> Result<String, AssessmentError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.response.clone()
    }
}

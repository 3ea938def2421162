pub mod types;
pub mod keywords;
pub mod random;
pub mod estimator;
pub mod patterns;
pub mod extractor;
pub mod prompt;
pub mod gemini;
pub mod orchestrator;

pub use types::*;
pub use keywords::*;
pub use random::*;
pub use estimator::*;
pub use patterns::*;
pub use extractor::*;
pub use prompt::*;
pub use gemini::*;
pub use orchestrator::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("Model service is not reachable at {0}")]
    Connection(String),

    #[error("Model request timed out after {0}s")]
    Timeout(u64),

    #[error("Model service returned error (status {status}): {body}")]
    ServiceError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Model service is not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AssessmentError {
    /// True for failures of the upstream model call, as opposed to
    /// problems with the caller's request.
    pub fn is_external(&self) -> bool {
        !matches!(self, AssessmentError::InvalidInput(_))
    }
}

use std::sync::{Arc, OnceLock};

use crate::assessment::{AssessmentError, GeminiClient, KeywordRiskEstimator, LlmClient};
use crate::config::AppConfig;

/// A model client shared by every request.
pub type SharedClient = Arc<dyn LlmClient + Send + Sync>;

/// Builds the model client. Called on a blocking thread.
pub type ClientFactory = Arc<dyn Fn() -> Result<SharedClient, AssessmentError> + Send + Sync>;

/// Model client built on first use and reused by later requests.
///
/// A failed build is not cached; the next request tries again.
#[derive(Clone)]
pub struct ModelClient {
    factory: ClientFactory,
    cached: Arc<OnceLock<SharedClient>>,
}

impl ModelClient {
    pub fn new(factory: ClientFactory) -> Self {
        Self {
            factory,
            cached: Arc::new(OnceLock::new()),
        }
    }

    /// The shared client, building it if needed.
    ///
    /// Must run on a blocking thread: building a blocking HTTP client
    /// inside the async runtime panics.
    pub fn get(&self) -> Result<SharedClient, AssessmentError> {
        if let Some(client) = self.cached.get() {
            return Ok(Arc::clone(client));
        }
        let built = (self.factory)()?;
        tracing::debug!("Model client initialized");
        Ok(Arc::clone(self.cached.get_or_init(|| built)))
    }
}

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<AppConfig>,
    pub estimator: KeywordRiskEstimator,
    model_client: Option<ModelClient>,
}

impl ApiContext {
    /// Context backed by the Gemini client when an API key is configured.
    pub fn new(config: AppConfig) -> Self {
        let model_client = config.model_enabled().then(|| {
            let config = config.clone();
            ModelClient::new(Arc::new(move || {
                GeminiClient::from_config(&config).map(|c| Arc::new(c) as SharedClient)
            }))
        });

        Self {
            config: Arc::new(config),
            estimator: KeywordRiskEstimator::default(),
            model_client,
        }
    }

    /// Context with an explicit client factory (tests, alternative backends).
    pub fn with_client_factory(config: AppConfig, factory: ClientFactory) -> Self {
        Self {
            config: Arc::new(config),
            estimator: KeywordRiskEstimator::default(),
            model_client: Some(ModelClient::new(factory)),
        }
    }

    pub fn model_client(&self) -> Option<&ModelClient> {
        self.model_client.as_ref()
    }

    pub fn model_enabled(&self) -> bool {
        self.model_client.is_some()
    }
}

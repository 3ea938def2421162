use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "HealthInsight";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_API_KEY: &str = "HEALTHINSIGHT_GEMINI_API_KEY";
pub const ENV_MODEL: &str = "HEALTHINSIGHT_GEMINI_MODEL";
pub const ENV_BASE_URL: &str = "HEALTHINSIGHT_GEMINI_URL";
pub const ENV_TIMEOUT_SECS: &str = "HEALTHINSIGHT_TIMEOUT_SECS";
pub const ENV_BIND: &str = "HEALTHINSIGHT_BIND";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "healthinsight=info,tower_http=warn"
}

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key. `None` disables the model path.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub bind_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            bind_addr: default_bind_addr(),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults with a warning.
    /// Empty strings are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(value = %raw, "Invalid {ENV_TIMEOUT_SECS}, using default");
                    DEFAULT_TIMEOUT_SECS
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let bind_addr = match get(ENV_BIND) {
            Some(raw) => raw.parse::<SocketAddr>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid {ENV_BIND}, using default");
                default_bind_addr()
            }),
            None => default_bind_addr(),
        };

        Self {
            api_key: get(ENV_API_KEY),
            model: get(ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs,
            bind_addr,
        }
    }

    /// Whether a model call can be attempted at all.
    pub fn model_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Result, TranscribeError};
use crate::types::Model;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";
pub const API_KEY_ENV: &str = "GROQ_API_KEY";
pub const API_TIMEOUT: Duration = Duration::from_secs(60);

pub const SUPPORTED_EXTENSIONS: [&str; 7] =
    [".mp3", ".mp4", ".mpeg", ".mpga", ".m4a", ".wav", ".webm"];

/// Thresholds a file must satisfy before it is uploaded
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub max_size_mb: f64,
    pub min_duration_seconds: f64,
    /// Shorter files are still billed for this many seconds
    pub min_billed_seconds: f64,
    /// Lowercase, dot-prefixed extensions
    pub extensions: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            max_size_mb: 25.0,
            min_duration_seconds: 0.01,
            min_billed_seconds: 10.0,
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Policy {
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }
}

/// Everything the Groq client needs, passed in explicitly
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub model: Model,
    pub timeout: Duration,
    pub policy: Policy,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TranscribeError::MissingCredential);
        }

        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: Model::default(),
            timeout: API_TIMEOUT,
            policy: Policy::default(),
        })
    }

    /// Reads the credential from `GROQ_API_KEY`
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| TranscribeError::MissingCredential)?;
        Self::new(api_key)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Key shortened to its first 3 and last 4 characters, for logs
    pub fn masked_api_key(&self) -> String {
        let key: Vec<char> = self.api_key.expose_secret().chars().collect();
        if key.len() <= 7 {
            return "***".to_string();
        }
        let head: String = key[..3].iter().collect();
        let tail: String = key[key.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

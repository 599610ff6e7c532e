//! Configuration for strategy and remote-mode selection
//!
//! Resolved once at process start from environment variables:
//! - `VALIDATION_STRATEGY`: "local" (default) or "remote"
//! - `GEMINI_API_KEY`: presence selects Direct mode; absent in production
//!   deployments where the key lives behind the backend function
//! - `VALIDATOR_BACKEND_URL`: delegated-mode endpoint override
//! - `GEMINI_MODEL`: model id override

use std::time::Duration;
use tracing::info;

/// Default delegated endpoint (netlify dev serves functions locally)
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8888/.netlify/functions/validate";

/// Default Gemini model for direct mode
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Which validation strategy the process uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Deterministic in-process geometry check
    Local,
    /// Model-backed check (direct or delegated, see [`RemoteMode`])
    Remote,
}

/// Transport mode for the remote strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteMode {
    /// No credential: forward to the backend-owned function
    Delegated,
    /// Credential present: call the Gemini endpoint directly (local dev)
    Direct,
}

/// Remote strategy configuration
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Gemini API key; None in any deployed context
    pub api_key: Option<String>,
    /// Delegated-mode endpoint
    pub backend_url: String,
    /// Gemini model id for direct mode
    pub model: String,
    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(api_key: Option<String>, backend_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            backend_url: backend_url.into(),
            model: model.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Read remote configuration from the environment
    pub fn from_env() -> Self {
        let backend_url = std::env::var("VALIDATOR_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        Self::new(get_gemini_key(), backend_url, model)
    }

    /// Direct when a credential is present, Delegated otherwise
    pub fn mode(&self) -> RemoteMode {
        if self.api_key.is_some() {
            RemoteMode::Direct
        } else {
            RemoteMode::Delegated
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_BACKEND_URL, DEFAULT_GEMINI_MODEL)
    }
}

/// Full process configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub strategy: StrategyKind,
    pub remote: RemoteConfig,
}

impl ValidatorConfig {
    pub fn from_env() -> Self {
        let strategy = match std::env::var("VALIDATION_STRATEGY").as_deref() {
            Ok("remote") => StrategyKind::Remote,
            _ => StrategyKind::Local,
        };
        Self {
            strategy,
            remote: RemoteConfig::from_env(),
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Local,
            remote: RemoteConfig::default(),
        }
    }
}

/// Get Gemini API key from environment.
/// Security: the key itself is NEVER logged.
fn get_gemini_key() -> Option<String> {
    let key = std::env::var("GEMINI_API_KEY").ok()?;
    if key.is_empty() || key == "YOUR_API_KEY" {
        return None;
    }
    info!("🔑 GEMINI_API_KEY configured (key hidden for security)");
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection_by_credential() {
        let delegated = RemoteConfig::new(None, DEFAULT_BACKEND_URL, DEFAULT_GEMINI_MODEL);
        assert_eq!(delegated.mode(), RemoteMode::Delegated);

        let direct = RemoteConfig::new(
            Some("sk-test".to_string()),
            DEFAULT_BACKEND_URL,
            DEFAULT_GEMINI_MODEL,
        );
        assert_eq!(direct.mode(), RemoteMode::Direct);
    }

    #[test]
    fn test_default_config_is_local_delegated() {
        let config = ValidatorConfig::default();
        assert_eq!(config.strategy, StrategyKind::Local);
        assert_eq!(config.remote.mode(), RemoteMode::Delegated);
        assert_eq!(config.remote.backend_url, DEFAULT_BACKEND_URL);
    }
}

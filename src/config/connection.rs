use crate::core::ConfigProvider;
use crate::utils::error::{AnimatorError, Result};
use crate::utils::validation::{self, Validate};
use std::path::Path;

pub const ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT";
pub const API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";
pub const DEPLOYMENT_ENV: &str = "AZURE_OPENAI_DEPLOYMENT_NAME";
pub const API_VERSION_ENV: &str = "AZURE_OPENAI_API_VERSION";

pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_AZURE_OPENAI_ENDPOINT_URL";
pub const API_KEY_PLACEHOLDER: &str = "YOUR_AZURE_OPENAI_API_KEY";
pub const DEPLOYMENT_PLACEHOLDER: &str = "YOUR_DEPLOYMENT_NAME";

pub const DEFAULT_API_VERSION: &str = "2024-02-01";
pub const DEFAULT_TEMPERATURE: f32 = 0.6;
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Connection and generation parameters for the chat-completion endpoint.
#[derive(Clone, PartialEq)]
pub struct ConnectionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub deployment_name: String,
    pub api_version: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ConnectionConfig {
    /// Reads the process environment. Unset variables fall back to their
    /// placeholders. Call [`load_dotenv`] beforehand to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str, fallback: &str| lookup(name).unwrap_or_else(|| fallback.to_string());

        Self {
            endpoint: read(ENDPOINT_ENV, ENDPOINT_PLACEHOLDER),
            api_key: read(API_KEY_ENV, API_KEY_PLACEHOLDER),
            deployment_name: read(DEPLOYMENT_ENV, DEPLOYMENT_PLACEHOLDER),
            api_version: read(API_VERSION_ENV, DEFAULT_API_VERSION),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn placeholder_fields(&self) -> Vec<String> {
        placeholder_fields(self)
    }

    pub fn is_configured(&self) -> bool {
        self.placeholder_fields().is_empty()
    }
}

/// Loads `.env` from the working directory into the process environment.
/// Must run before any `${VAR}` in a config file is resolved.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }
}

/// Loads a specific env file. Variables already set in the process win.
pub fn load_env_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    dotenv::from_path(path).map_err(|e| AnimatorError::ConfigParseError {
        message: format!("Cannot load env file {}: {}", path.display(), e),
    })?;
    tracing::debug!("Loaded environment from {}", path.display());
    Ok(())
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// The api key never reaches the logs.
impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("deployment_name", &self.deployment_name)
            .field("api_version", &self.api_version)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Names of connection parameters that still hold their placeholder value.
pub fn placeholder_fields<C: ConfigProvider + ?Sized>(config: &C) -> Vec<String> {
    [
        ("endpoint", config.endpoint(), ENDPOINT_PLACEHOLDER),
        ("api_key", config.api_key(), API_KEY_PLACEHOLDER),
        ("deployment_name", config.deployment_name(), DEPLOYMENT_PLACEHOLDER),
    ]
    .into_iter()
    .filter(|(_, value, placeholder)| value == placeholder)
    .map(|(field, _, _)| field.to_string())
    .collect()
}

impl ConfigProvider for ConnectionConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn deployment_name(&self) -> &str {
        &self.deployment_name
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

impl Validate for ConnectionConfig {
    /// Placeholders pass here; they are rejected when a request is attempted.
    fn validate(&self) -> Result<()> {
        if self.endpoint != ENDPOINT_PLACEHOLDER {
            validation::validate_url("endpoint", &self.endpoint)?;
        }
        validation::validate_non_empty_string("api_key", &self.api_key)?;
        validation::validate_non_empty_string("deployment_name", &self.deployment_name)?;
        validation::validate_non_empty_string("api_version", &self.api_version)?;
        validation::validate_range("temperature", self.temperature, 0.0, 2.0)?;
        validation::validate_positive_number("max_tokens", self.max_tokens, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_are_placeholders() {
        let config = ConnectionConfig::default();
        assert_eq!(config.endpoint, ENDPOINT_PLACEHOLDER);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(
            config.placeholder_fields(),
            vec!["endpoint", "api_key", "deployment_name"]
        );
        assert!(!config.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides_placeholders() {
        let config = ConnectionConfig::from_lookup(lookup_from(&[
            (ENDPOINT_ENV, "https://example.openai.azure.com"),
            (API_KEY_ENV, "secret"),
            (DEPLOYMENT_ENV, "gpt-4o"),
            (API_VERSION_ENV, "2024-06-01"),
        ]));

        assert!(config.is_configured());
        assert_eq!(config.deployment_name, "gpt-4o");
        assert_eq!(config.api_version, "2024-06-01");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_configuration_reports_remaining_placeholders() {
        let config = ConnectionConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "secret")]));
        assert_eq!(config.placeholder_fields(), vec!["endpoint", "deployment_name"]);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ConnectionConfig::default();
        config.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = ConnectionConfig::default();
        config.temperature = 3.0;
        assert!(config.validate().is_err());

        let mut config = ConnectionConfig::default();
        config.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = ConnectionConfig::default();
        config.api_key = "super-secret".to_string();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

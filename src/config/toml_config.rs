use crate::config::connection::ConnectionConfig;
use crate::utils::error::{AnimatorError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env reference pattern"));

/// Optional file-based settings. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub azure: AzureConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AzureConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub deployment_name: Option<String>,
    pub api_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub preview: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnimatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AnimatorError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_REFERENCE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Overlays file values on `base`. Values still holding an unresolved
    /// `${VAR}` reference are skipped.
    pub fn apply_to(&self, base: &mut ConnectionConfig) {
        let azure = &self.azure;
        overlay(&mut base.endpoint, &azure.endpoint, "azure.endpoint");
        overlay(&mut base.api_key, &azure.api_key, "azure.api_key");
        overlay(
            &mut base.deployment_name,
            &azure.deployment_name,
            "azure.deployment_name",
        );
        overlay(&mut base.api_version, &azure.api_version, "azure.api_version");

        if let Some(temperature) = self.generation.temperature {
            base.temperature = temperature;
        }
        if let Some(max_tokens) = self.generation.max_tokens {
            base.max_tokens = max_tokens;
        }
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    pub fn preview_enabled(&self) -> bool {
        self.output.preview.unwrap_or(false)
    }
}

fn overlay(target: &mut String, value: &Option<String>, field: &str) {
    match value {
        Some(v) if ENV_REFERENCE.is_match(v) => {
            tracing::warn!("⚠️ Ignoring {}: unresolved environment reference {}", field, v);
        }
        Some(v) => *target = v.clone(),
        None => {}
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(temperature) = self.generation.temperature {
            validation::validate_range("generation.temperature", temperature, 0.0, 2.0)?;
        }
        if let Some(max_tokens) = self.generation.max_tokens {
            validation::validate_positive_number("generation.max_tokens", max_tokens, 1)?;
        }
        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }
        Ok(())
    }
}

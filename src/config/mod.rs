pub mod cli;
pub mod connection;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::{connection::ConnectionConfig, toml_config::TomlConfig};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "svg-animator")]
#[command(about = "Bring a static SVG to life with an Azure OpenAI deployment")]
pub struct CliConfig {
    /// Path to the static SVG file
    #[arg(long, conflicts_with = "svg_code")]
    pub svg_file: Option<String>,

    /// Inline SVG source
    #[arg(long)]
    pub svg_code: Option<String>,

    /// What the graphic shows
    #[arg(long, default_value = "")]
    pub description: String,

    /// How the animation should look
    #[arg(long, default_value = "")]
    pub animation: String,

    /// Fill any missing input with the built-in robot sample
    #[arg(long)]
    pub sample: bool,

    /// Directory for animated_graphic.svg (default: ./output)
    #[arg(long)]
    pub output_path: Option<String>,

    /// Optional TOML file with [azure], [generation] and [output] tables
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the deployment name
    #[arg(long)]
    pub deployment: Option<String>,

    #[arg(long)]
    pub temperature: Option<f32>,

    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Also write an HTML preview page next to the SVG
    #[arg(long)]
    pub preview: bool,

    /// Echo the animated SVG to stdout
    #[arg(long)]
    pub print: bool,

    /// Show the prompt and settings without calling the model
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log process CPU/memory per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Environment first, then the config file, then command-line flags.
    pub fn resolve_connection(
        &self,
        mut base: ConnectionConfig,
        file: Option<&TomlConfig>,
    ) -> ConnectionConfig {
        if let Some(file) = file {
            file.apply_to(&mut base);
        }
        if let Some(deployment) = &self.deployment {
            base.deployment_name = deployment.clone();
        }
        if let Some(temperature) = self.temperature {
            base.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            base.max_tokens = max_tokens;
        }
        base
    }

    pub fn resolve_output_path(&self, file: Option<&TomlConfig>) -> String {
        self.output_path
            .clone()
            .or_else(|| file.and_then(|f| f.output_path().map(str::to_string)))
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string())
    }

    pub fn preview_enabled(&self, file: Option<&TomlConfig>) -> bool {
        self.preview || file.map(|f| f.preview_enabled()).unwrap_or(false)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        if let Some(path) = &self.svg_file {
            validation::validate_path("svg_file", path)?;
        }
        if let Some(temperature) = self.temperature {
            validation::validate_range("temperature", temperature, 0.0, 2.0)?;
        }
        if let Some(max_tokens) = self.max_tokens {
            validation::validate_positive_number("max_tokens", max_tokens, 1)?;
        }
        Ok(())
    }
}

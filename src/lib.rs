pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::presentation::{PresentedResult, ResultPresenter};
pub use crate::config::{cli::LocalStorage, connection::ConnectionConfig, toml_config::TomlConfig};
pub use crate::core::{
    animator::Animator,
    client::AzureOpenAiClient,
    sanitizer::{is_acceptable, sanitize},
};
pub use crate::domain::model::{AnimationOutcome, AnimationRequest};
pub use crate::utils::error::{AnimatorError, Result};

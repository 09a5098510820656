use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnimatorError {
    #[error("Model request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Model transport error: {message}")]
    TransportError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: placeholder value still set for {}", .fields.join(", "))]
    ConfigurationError { fields: Vec<String> },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Missing input: {field}")]
    MissingInputError { field: String },

    #[error("Model output is not a valid SVG document")]
    InvalidOutputError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Network,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnimatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnimatorError::ConfigurationError { .. }
            | AnimatorError::InvalidConfigValueError { .. }
            | AnimatorError::ConfigParseError { .. } => ErrorCategory::Configuration,
            AnimatorError::MissingInputError { .. } => ErrorCategory::Input,
            AnimatorError::ApiError(_) | AnimatorError::TransportError { .. } => {
                ErrorCategory::Network
            }
            AnimatorError::InvalidOutputError => ErrorCategory::Output,
            AnimatorError::IoError(_) | AnimatorError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AnimatorError::ConfigurationError { .. } => {
                "Set AZURE_OPENAI_ENDPOINT, AZURE_OPENAI_API_KEY and AZURE_OPENAI_DEPLOYMENT_NAME in the environment, a .env file or the --config file".to_string()
            }
            AnimatorError::InvalidConfigValueError { field, .. } => {
                format!("Check the value of '{}'", field)
            }
            AnimatorError::ConfigParseError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            AnimatorError::MissingInputError { field } => {
                format!("Provide a non-empty value for '{}'", field)
            }
            AnimatorError::ApiError(_) | AnimatorError::TransportError { .. } => {
                "Check the endpoint, credentials and network connectivity, then try again".to_string()
            }
            AnimatorError::InvalidOutputError => {
                "Try a different description or check the original SVG code".to_string()
            }
            AnimatorError::IoError(_) => "Check file paths and permissions".to_string(),
            AnimatorError::SerializationError(_) => {
                "The endpoint returned an unexpected payload; verify the deployment name and API version".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AnimatorError::ConfigurationError { .. } => {
                "Azure OpenAI credentials are not configured.".to_string()
            }
            AnimatorError::MissingInputError { .. } => {
                "Please fill in all fields to continue.".to_string()
            }
            AnimatorError::ApiError(e) => {
                format!("An error occurred with the API request: {}", e)
            }
            AnimatorError::TransportError { message } => {
                format!("An error occurred with the API request: {}", message)
            }
            AnimatorError::InvalidOutputError => {
                "Could not create a valid SVG animation.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnimatorError>;

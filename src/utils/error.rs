use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("GOOGLE_API_KEY environment variable not set")]
    MissingCredential,

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{stage} returned no parseable JSON object: {raw}")]
    MalformedModelOutput { stage: &'static str, raw: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl PlannerError {
    /// Truncated raw model output keeps diagnostics readable when the
    /// model rambles.
    pub fn malformed(stage: &'static str, raw: &str) -> Self {
        const MAX_RAW: usize = 400;
        let raw = if raw.len() > MAX_RAW {
            let cut = raw
                .char_indices()
                .take_while(|(i, _)| *i < MAX_RAW)
                .last()
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);
            format!("{}...", &raw[..cut])
        } else {
            raw.to_string()
        };
        PlannerError::MalformedModelOutput { stage, raw }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::MissingCredential => {
                "No API credential found. Set GOOGLE_API_KEY before running.".to_string()
            }
            PlannerError::ApiError(_) | PlannerError::ApiStatus { .. } => {
                format!("The model API call failed: {}", self)
            }
            PlannerError::MalformedModelOutput { stage, .. } => format!(
                "The model response for {} could not be understood. Try again or rephrase the goal.",
                stage
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

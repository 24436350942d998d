//! Error types for SocialGen.

use thiserror::Error;

/// Primary error type for all SocialGen operations.
#[derive(Error, Debug)]
pub enum SocialGenError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Text generation failed: {0}")]
    TextGeneration(String),

    #[error("Image generation failed: {0}")]
    ImageGeneration(String),
}

impl SocialGenError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Message suitable for surfacing directly to the user.
    ///
    /// Credential problems get a hint about the API key, since that is the
    /// one thing the user can actually fix from the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Authentication(_) | Self::Configuration(_) => {
                format!("{self} — 请检查 API Key 配置")
            }
            _ => self.to_string(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SocialGenError>;

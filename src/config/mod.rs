//! Gateway configuration (explicit values > environment).

use bon::Builder;

use crate::error::{Result, SocialGenError};

/// Default text model.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
/// Default image model.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
/// Hosted API base.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the hosted-model gateway.
///
/// Built explicitly via the builder, or from the process environment with
/// [`GatewayConfig::from_env`]. The API key is required up front so no
/// request is ever attempted without a credential.
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct GatewayConfig {
    /// API access key for the hosted models.
    pub api_key: String,
    /// API base URL. Overridable so tests can point at a local server.
    #[builder(default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    /// Text model identifier.
    #[builder(default = DEFAULT_TEXT_MODEL.to_string())]
    pub text_model: String,
    /// Image model identifier.
    #[builder(default = DEFAULT_IMAGE_MODEL.to_string())]
    pub image_model: String,
}

impl GatewayConfig {
    /// Load from the process environment (`.env` honored).
    ///
    /// `GEMINI_API_KEY` is preferred, `GOOGLE_API_KEY` accepted. Optional
    /// overrides: `SOCIALGEN_BASE_URL`, `SOCIALGEN_TEXT_MODEL`,
    /// `SOCIALGEN_IMAGE_MODEL`.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                SocialGenError::Configuration(
                    "Missing GEMINI_API_KEY (or GOOGLE_API_KEY)".into(),
                )
            })?;

        Ok(Self {
            api_key,
            base_url: env_or("SOCIALGEN_BASE_URL", DEFAULT_BASE_URL),
            text_model: env_or("SOCIALGEN_TEXT_MODEL", DEFAULT_TEXT_MODEL),
            image_model: env_or("SOCIALGEN_IMAGE_MODEL", DEFAULT_IMAGE_MODEL),
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_model_defaults() {
        let config = GatewayConfig::builder().api_key("k").build();
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn builder_values_override_defaults() {
        let config = GatewayConfig::builder()
            .api_key("k")
            .base_url("http://localhost:9")
            .text_model("gemini-x")
            .build();
        assert_eq!(config.base_url, "http://localhost:9");
        assert_eq!(config.text_model, "gemini-x");
    }

    #[test]
    fn from_env_requires_an_api_key() {
        // The only test in the crate touching these vars, so no interference.
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("GOOGLE_API_KEY");
        assert!(matches!(
            GatewayConfig::from_env(),
            Err(SocialGenError::Configuration(_))
        ));

        std::env::set_var("GEMINI_API_KEY", "from-env");
        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(config.api_key, "from-env");
        std::env::remove_var("GEMINI_API_KEY");
    }
}

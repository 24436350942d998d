//! Gemini (copy) and Imagen (artwork) gateway.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::{Result, SocialGenError};
use crate::types::{AspectRatio, CopySet, Platform, Tone};

use super::http::{shared_client, status_to_error};
use super::ContentGateway;

/// Gateway to the Google Generative Language API.
pub struct GeminiGateway {
    config: GatewayConfig,
}

impl GeminiGateway {
    /// Build a gateway from explicit configuration.
    ///
    /// Fails fast on an empty credential so no request is ever attempted
    /// without one.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(SocialGenError::Configuration("API key is empty".into()));
        }
        Ok(Self { config })
    }

    /// Build a gateway from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env()?)
    }

    fn system_instruction(tone: Tone) -> String {
        format!(
            "You are a world-class social media manager for a Chinese audience.\n\
             Your task is to generate social media content for LinkedIn, Twitter, and Instagram based on a user's idea.\n\
             \n\
             Language: The post content MUST be in Simplified Chinese (简体中文).\n\
             Tone: Adapt the writing style strictly to the requested tone: {tone}.\n\
             \n\
             Guidelines per platform:\n\
             1. LinkedIn: Professional, insightful, longer form, uses professional hashtags. Structured for readability.\n\
             2. Twitter (X): Short, punchy, engaging, under 280 characters equivalent impact. Uses trending hashtags.\n\
             3. Instagram: Visual-focused storytelling, engaging hook, uses line breaks and many relevant hashtags at the bottom.\n\
             \n\
             Image Prompts: Provide a creative, high-quality image generation prompt for EACH platform. \
             The prompt should be in ENGLISH to ensure best compatibility with image models. \
             The image should visually represent the post's core message and tone."
        )
    }

    /// JSON schema forcing exactly one `{text, imagePrompt}` pair per platform.
    fn copy_response_schema() -> serde_json::Value {
        let platform_schema = serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "text": {
                    "type": "STRING",
                    "description": "The social media post content in Chinese."
                },
                "imagePrompt": {
                    "type": "STRING",
                    "description": "A detailed English prompt for an AI image generator that matches the post's theme."
                }
            },
            "required": ["text", "imagePrompt"]
        });

        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for platform in Platform::ALL {
            properties.insert(platform.to_string(), platform_schema.clone());
            required.push(serde_json::Value::String(platform.to_string()));
        }

        serde_json::json!({
            "type": "OBJECT",
            "properties": properties,
            "required": required
        })
    }
}

#[async_trait]
impl ContentGateway for GeminiGateway {
    async fn generate_copy(&self, idea: &str, tone: Tone) -> Result<CopySet> {
        let body = serde_json::json!({
            "systemInstruction": {
                "parts": [{ "text": Self::system_instruction(tone) }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": format!("Idea: {idea}\nTone: {tone}") }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::copy_response_schema(),
            },
        });
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.text_model, self.config.api_key
        );

        debug!(model = %self.config.text_model, %tone, "generate_copy");

        let resp = shared_client().post(&url).json(&body).send().await?;
        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: GeminiResponse = resp.json().await?;
        let candidate = data.candidates.into_iter().next().ok_or_else(|| {
            SocialGenError::TextGeneration("no candidates in model response".into())
        })?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.is_empty() {
            return Err(SocialGenError::TextGeneration(
                "model returned no text".into(),
            ));
        }

        serde_json::from_str(&strip_code_fences(&text)).map_err(|e| {
            SocialGenError::TextGeneration(format!("unparseable structured result: {e}"))
        })
    }

    async fn generate_image(&self, prompt: &str, aspect_ratio: AspectRatio) -> Result<String> {
        let body = serde_json::json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": aspect_ratio.as_str(),
                "outputMimeType": "image/jpeg",
            },
        });
        let url = format!(
            "{}/models/{}:predict?key={}",
            self.config.base_url, self.config.image_model, self.config.api_key
        );

        debug!(model = %self.config.image_model, %aspect_ratio, "generate_image");

        let resp = shared_client().post(&url).json(&body).send().await?;
        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: PredictResponse = resp.json().await?;
        let image = data
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| SocialGenError::ImageGeneration("no image generated".into()))?;

        let mime = image.mime_type.unwrap_or_else(|| "image/jpeg".to_string());
        Ok(format!("data:{mime};base64,{}", image.bytes_base64_encoded))
    }
}

/// Strip markdown code fences from a JSON response.
fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("```") {
        let without_opening = if let Some(rest) = trimmed.strip_prefix("```json") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("```") {
            rest
        } else {
            trimmed
        };
        if let Some(stripped) = without_opening.strip_suffix("```") {
            return stripped.trim().to_string();
        }
        return without_opening.trim().to_string();
    }
    trimmed.to_string()
}

// Internal response envelopes

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: String,
    mime_type: Option<String>,
}

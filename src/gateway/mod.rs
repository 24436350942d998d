//! The boundary abstraction over the hosted text and image models.

pub mod gemini;
pub mod http;

pub use gemini::GeminiGateway;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{AspectRatio, CopySet, Tone};

/// Contract between the orchestrator and the hosted generation models.
///
/// Both operations are request/response: no streaming, no partial results,
/// at most one logical attempt per call. Retries, if any, are the caller's
/// decision.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Generate platform-tailored copy for all three platforms at once.
    async fn generate_copy(&self, idea: &str, tone: Tone) -> Result<CopySet>;

    /// Generate a single image for `prompt` at the given aspect ratio,
    /// returning a displayable image reference.
    async fn generate_image(&self, prompt: &str, aspect_ratio: AspectRatio) -> Result<String>;
}

//! Convenience re-exports for common use.

pub use crate::config::GatewayConfig;
pub use crate::error::{Result, SocialGenError};
pub use crate::gateway::{ContentGateway, GeminiGateway};
pub use crate::session::ContentSession;
pub use crate::types::{
    AspectRatio, ContentSet, CopySet, GenerationRequest, GenerationStatus, Platform,
    PlatformContent, PlatformCopy, SessionState, Tone,
};

//! Generation inputs and the text call's structured result.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Platform;

/// Writing tone applied across all three platforms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Tone {
    Professional,
    Witty,
    Urgent,
    Emotional,
    Minimalist,
}

impl Tone {
    /// The five selectable tones.
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Witty,
        Tone::Urgent,
        Tone::Emotional,
        Tone::Minimalist,
    ];

    /// Bilingual selector label.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "专业商务 (Professional)",
            Tone::Witty => "幽默风趣 (Witty)",
            Tone::Urgent => "紧迫感 (Urgent)",
            Tone::Emotional => "情感共鸣 (Emotional)",
            Tone::Minimalist => "极简主义 (Minimalist)",
        }
    }
}

/// A single generation cycle's immutable input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub idea: String,
    pub tone: Tone,
}

impl GenerationRequest {
    pub fn new(idea: impl Into<String>, tone: Tone) -> Self {
        Self {
            idea: idea.into(),
            tone,
        }
    }

    /// Whether the idea has any non-whitespace content.
    pub fn has_idea(&self) -> bool {
        !self.idea.trim().is_empty()
    }
}

/// One platform's slice of the text call result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCopy {
    pub text: String,
    pub image_prompt: String,
}

/// The text call's structured result: exactly one entry per platform.
///
/// A missing key is a deserialization failure, so a value of this type can
/// never be partially populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopySet {
    pub linkedin: PlatformCopy,
    pub twitter: PlatformCopy,
    pub instagram: PlatformCopy,
}

impl CopySet {
    /// The copy generated for `platform`.
    pub fn get(&self, platform: Platform) -> &PlatformCopy {
        match platform {
            Platform::LinkedIn => &self.linkedin,
            Platform::Twitter => &self.twitter,
            Platform::Instagram => &self.instagram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_parses_case_insensitively() {
        assert_eq!("professional".parse::<Tone>().unwrap(), Tone::Professional);
        assert_eq!("Witty".parse::<Tone>().unwrap(), Tone::Witty);
        assert!("casual".parse::<Tone>().is_err());
    }

    #[test]
    fn whitespace_idea_is_not_an_idea() {
        assert!(!GenerationRequest::new("   \t", Tone::Urgent).has_idea());
        assert!(GenerationRequest::new(" AI咖啡机 ", Tone::Urgent).has_idea());
    }

    #[test]
    fn copy_set_requires_every_platform() {
        let missing_instagram = serde_json::json!({
            "linkedin": {"text": "a", "imagePrompt": "b"},
            "twitter": {"text": "c", "imagePrompt": "d"},
        });
        assert!(serde_json::from_value::<CopySet>(missing_instagram).is_err());
    }

    #[test]
    fn copy_set_deserializes_camel_case_prompts() {
        let value = serde_json::json!({
            "linkedin": {"text": "a", "imagePrompt": "la"},
            "twitter": {"text": "b", "imagePrompt": "tw"},
            "instagram": {"text": "c", "imagePrompt": "ig"},
        });
        let set: CopySet = serde_json::from_value(value).unwrap();
        assert_eq!(set.get(Platform::Instagram).image_prompt, "ig");
    }
}

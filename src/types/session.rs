//! Session state shared between the orchestrator and the presentation layer.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::{AspectRatio, Platform, PlatformCopy};

/// Where the current generation cycle stands.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
    Complete,
}

/// Per-platform record of generated copy and artwork state.
///
/// `image_loading = true` means `image_url` is stale or absent and must not
/// be displayed. `ticket` identifies the image request whose resolution is
/// allowed to land here; a completion carrying any other ticket is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformContent {
    pub text: String,
    pub image_prompt: String,
    pub aspect_ratio: AspectRatio,
    pub image_url: Option<String>,
    pub image_loading: bool,
    pub ticket: u64,
}

impl PlatformContent {
    /// Seed a fresh entry from the text call's copy, with artwork pending.
    pub fn pending(platform: Platform, copy: &PlatformCopy, ticket: u64) -> Self {
        Self {
            text: copy.text.clone(),
            image_prompt: copy.image_prompt.clone(),
            aspect_ratio: platform.aspect_ratio(),
            image_url: None,
            image_loading: true,
            ticket,
        }
    }

    /// Character count shown next to the copy.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// The results mapping: structurally whole, one entry per platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSet {
    pub linkedin: PlatformContent,
    pub twitter: PlatformContent,
    pub instagram: PlatformContent,
}

impl ContentSet {
    pub fn get(&self, platform: Platform) -> &PlatformContent {
        match platform {
            Platform::LinkedIn => &self.linkedin,
            Platform::Twitter => &self.twitter,
            Platform::Instagram => &self.instagram,
        }
    }

    pub fn get_mut(&mut self, platform: Platform) -> &mut PlatformContent {
        match platform {
            Platform::LinkedIn => &mut self.linkedin,
            Platform::Twitter => &mut self.twitter,
            Platform::Instagram => &mut self.instagram,
        }
    }

    /// Iterate entries in the fixed platform order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PlatformContent)> {
        Platform::ALL
            .into_iter()
            .map(move |platform| (platform, self.get(platform)))
    }

    /// Whether any platform still has artwork in flight.
    pub fn any_image_loading(&self) -> bool {
        Platform::ALL.iter().any(|&platform| self.get(platform).image_loading)
    }
}

/// The whole session, replaced copy-on-write on every update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub status: GenerationStatus,
    pub results: Option<ContentSet>,
    pub error: Option<String>,
}

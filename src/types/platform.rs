//! Target platforms and their fixed artwork geometry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A supported social platform.
///
/// The set is closed: the text-generation contract hard-codes exactly these
/// three keys, so there is no runtime discovery or extension. Serialized
/// names double as the structured-output keys of the text call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    Twitter,
    Instagram,
}

impl Platform {
    /// All platforms, in seeding and fan-out order.
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Twitter, Platform::Instagram];

    /// The fixed artwork aspect ratio for this platform.
    pub fn aspect_ratio(self) -> AspectRatio {
        match self {
            Platform::LinkedIn | Platform::Twitter => AspectRatio::Widescreen,
            Platform::Instagram => AspectRatio::Portrait,
        }
    }

    /// Human-facing platform name.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter (X)",
            Platform::Instagram => "Instagram",
        }
    }
}

/// Artwork aspect ratio accepted by the image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    /// Wire representation expected by the image API.
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Square => "1:1",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

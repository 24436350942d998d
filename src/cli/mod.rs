//! CLI argument surface for the `socialgen` binary.

use clap::Parser;

use crate::types::Tone;

/// SocialGen CLI
#[derive(Parser, Debug)]
#[command(
    name = "socialgen",
    version,
    about = "One idea in — LinkedIn, Twitter and Instagram copy with matching artwork out"
)]
pub struct Cli {
    /// The idea to generate content for
    pub idea: String,

    /// Writing tone (professional, witty, urgent, emotional, minimalist)
    #[arg(short, long, default_value = "professional")]
    pub tone: String,

    /// Directory where generated artwork is written
    #[arg(short, long, default_value = "artwork")]
    pub out_dir: std::path::PathBuf,
}

impl Cli {
    /// Parse the tone flag, listing accepted values on failure.
    pub fn parse_tone(&self) -> Result<Tone, String> {
        self.tone.parse::<Tone>().map_err(|_| {
            let accepted: Vec<String> = Tone::ALL
                .iter()
                .map(|tone| tone.to_string().to_lowercase())
                .collect();
            format!(
                "Invalid tone '{}'. Accepted: {}",
                self.tone,
                accepted.join(", ")
            )
        })
    }
}

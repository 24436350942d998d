//! SocialGen — multi-platform social media content generation.
//!
//! One idea in, three platform-tailored posts out: copy for LinkedIn,
//! Twitter and Instagram from a hosted text model, plus matching artwork
//! per platform from a hosted image model. The text call resolves first and
//! seeds the session; the three image calls then run independently and
//! merge into their own slots in whatever order they complete.
//!
//! # Quick Start
//!
//! ```no_run
//! use socialgen::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> socialgen::error::Result<()> {
//! let gateway = Arc::new(GeminiGateway::from_env()?);
//! let session = ContentSession::new(gateway);
//! session
//!     .submit(GenerationRequest::new("AI coffee machine", Tone::Professional))
//!     .await?;
//! for (platform, entry) in session.state().results.unwrap().iter() {
//!     println!("{}: {}", platform.display_name(), entry.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod prelude;
pub mod session;
pub mod types;

//! Core types for SocialGen.

pub mod content;
pub mod platform;
pub mod session;

pub use content::*;
pub use platform::*;
pub use session::*;

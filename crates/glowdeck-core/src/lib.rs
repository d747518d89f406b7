#![forbid(unsafe_code)]

//! Headless helpers behind the glowdeck dashboards.
//!
//! - `numeric`: clamping and range normalization
//! - `visuals`: glow/pulse tones derived from a meter value
//! - `youtube` and `control_deck`: strict YouTube link parsing and the embed URL built from it
//! - `persona`: prompt and status label formatting
//! - `performance`: rolling frame-rate sampling for the workstation HUD
//!
//! All functions are synchronous and side-effect free. Invalid ranges surface as
//! [`Error::InvalidRange`]; "nothing found" is an `Option`, never an error.

pub mod config;
pub mod control_deck;
pub mod error;
mod js;
pub mod numeric;
pub mod performance;
pub mod persona;
pub mod visuals;
pub mod youtube;

pub use config::DeckConfig;
pub use control_deck::{LoadStatus, LoadTone, get_load_status, sanitize_embed_url};
pub use error::{Error, Result};
pub use numeric::{clamp, normalize, normalize_percent};
pub use performance::FrameRateMonitor;
pub use persona::{compose_persona_prompt, format_status};
pub use visuals::{GlowStrength, PulseTone, calculate_glow_strength, get_pulse_tone};
pub use youtube::extract_youtube_id;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Control Deck helpers: the video hub's embed URLs and the workstation load readout.

use crate::js::{js_number, js_round};
use crate::numeric::clamp;
use crate::youtube::extract_youtube_id;
use serde::{Deserialize, Serialize};

const EMBED_PREFIX: &str = "https://www.youtube.com/embed/";
const EMBED_QUERY: &str = "?rel=0";

const CALM_BELOW: f64 = 0.35;
const STABLE_BELOW: f64 = 0.7;

/// Builds an iframe `src` for untrusted video link input.
///
/// The result always points at `www.youtube.com/embed/`, whatever host the input named; input
/// that does not yield a video id gives `None`.
pub fn sanitize_embed_url(url: &str) -> Option<String> {
    let id = extract_youtube_id(url)?;
    Some(format!("{EMBED_PREFIX}{id}{EMBED_QUERY}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadTone {
    Cool,
    Balanced,
    Warm,
}

impl LoadTone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Balanced => "balanced",
            Self::Warm => "warm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadStatus {
    pub label: &'static str,
    pub description: String,
    pub tone: LoadTone,
}

/// Classifies the HUD load (`0..=1`, clamped) into Calm, Stable or Strained.
pub fn get_load_status(fps: f64, load: f64) -> LoadStatus {
    let load = clamp(load, 0.0, 1.0);
    let description = format!(
        "{} fps • {}% glow load",
        js_number(fps),
        js_number(js_round(load * 100.0))
    );

    let (label, tone) = if load < CALM_BELOW {
        ("Calm", LoadTone::Cool)
    } else if load < STABLE_BELOW {
        ("Stable", LoadTone::Balanced)
    } else {
        ("Strained", LoadTone::Warm)
    };

    LoadStatus {
        label,
        description,
        tone,
    }
}

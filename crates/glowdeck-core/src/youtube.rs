//! Strict YouTube link parsing.
//!
//! Only three hosts are ever accepted (see [`ALLOWED_HOSTS`]). Anything else, including
//! look-alike subdomains and other video sites, yields `None`. Adding a host here changes what
//! the embed builder will trust, so the list is a constant rather than configuration.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Hostnames accepted after a leading `www.` is stripped.
pub const ALLOWED_HOSTS: [&str; 3] = ["youtube.com", "m.youtube.com", "youtu.be"];

const SHORT_LINK_HOST: &str = "youtu.be";
const EMBED_PATH_PREFIXES: [&str; 2] = ["/embed/", "/shorts/"];

fn video_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("valid regex"))
}

/// Whether `candidate` has the shape of a video id: exactly 11 of `[A-Za-z0-9_-]`.
pub fn is_video_id(candidate: &str) -> bool {
    video_id_regex().is_match(candidate)
}

fn parse_link(cleaned: &str) -> Option<Url> {
    let parsed = if cleaned.starts_with("http") {
        Url::parse(cleaned)
    } else {
        Url::parse(&format!("https://{cleaned}"))
    };
    match parsed {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::trace!(%err, "video link is not a URL");
            None
        }
    }
}

/// Extracts the video id from a bare id, a `watch?v=` URL, a `youtu.be` short link, or an
/// `/embed/` or `/shorts/` URL. Never panics; every failure is `None`.
pub fn extract_youtube_id(input: &str) -> Option<String> {
    let cleaned = input.trim();
    if cleaned.is_empty() {
        return None;
    }
    if is_video_id(cleaned) {
        return Some(cleaned.to_string());
    }

    let parsed = parse_link(cleaned)?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if !ALLOWED_HOSTS.contains(&host) {
        tracing::debug!(host, "video link host is not allow-listed");
        return None;
    }

    // Only the first `v` counts, even when a later one would be valid.
    if let Some(id) = parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
    {
        if is_video_id(&id) {
            return Some(id);
        }
    }

    let path = parsed.path();
    let last_segment = path.split('/').filter(|s| !s.is_empty()).last()?;
    if !is_video_id(last_segment) {
        return None;
    }

    if host == SHORT_LINK_HOST {
        return Some(last_segment.to_string());
    }
    if EMBED_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return Some(last_segment.to_string());
    }

    None
}

//! Prompt composition for Repomind personas and status chip labels.

pub const PROMPT_SEPARATOR: &str = " — ";

const UNKNOWN_STATUS: &str = "Unknown";

/// Joins the non-blank trimmed parts with [`PROMPT_SEPARATOR`]. All blank gives `""`.
pub fn compose_persona_prompt(base: &str, tone: &str, focus: &str) -> String {
    [base, tone, focus]
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(PROMPT_SEPARATOR)
}

/// `"ONLiNe"` becomes `"Online"`; a blank label becomes `"Unknown"`.
pub fn format_status(status: &str) -> String {
    let cleaned = status.trim();
    let mut chars = cleaned.chars();
    let Some(first) = chars.next() else {
        return UNKNOWN_STATUS.to_string();
    };

    let mut out = String::with_capacity(cleaned.len());
    out.extend(first.to_uppercase());
    out.push_str(&chars.as_str().to_lowercase());
    out
}

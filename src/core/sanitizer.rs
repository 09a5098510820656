//! Turns a model's free-form reply into markup a renderer will accept.
//!
//! Each step repairs one known failure mode of generated SVG: commentary or
//! Markdown fences around the document, non-breaking spaces, unquoted
//! attribute values and attributes left with an empty value. The steps run in
//! a fixed order and the whole pipeline is idempotent.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Opening tag marker every accepted document must start with.
pub const SVG_ROOT_MARKER: &str = "<svg";

const NBSP: char = '\u{a0}';

static FENCED_SVG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)```[a-z0-9_+\-]*\s*(<svg.*?</svg>)\s*```").expect("fence pattern")
});

// Quoted values are matched as a whole so their contents are never rewritten.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z0-9:\-]+)=("[^"]*"|'[^']*'|[^"'\s>]+)"#).expect("attribute pattern")
});

static EMPTY_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+[A-Za-z0-9:\-]+="""#).expect("empty attribute pattern"));

/// Sanitize raw model text. Absent or empty input yields an empty string.
pub fn sanitize(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|text| !text.is_empty()) else {
        tracing::debug!("No model text to sanitize");
        return String::new();
    };

    let extracted = extract_fenced_svg(raw);
    let normalized = normalize_whitespace(extracted);
    let quoted = quote_attribute_values(&normalized);
    let cleaned = remove_empty_attributes(&quoted);

    // An empty attribute on the fence line (```svg title="") hides the fence
    // from the first extraction.
    extract_fenced_svg(&cleaned).to_string()
}

/// Returns the `<svg>…</svg>` payload of the first fenced block, or the input unchanged.
pub fn extract_fenced_svg(text: &str) -> &str {
    match FENCED_SVG.captures(text).and_then(|caps| caps.get(1)) {
        Some(inner) => {
            tracing::debug!(
                "Extracted fenced SVG ({} of {} bytes)",
                inner.len(),
                text.len()
            );
            inner.as_str()
        }
        None => text,
    }
}

pub fn normalize_whitespace(text: &str) -> String {
    text.replace(NBSP, " ").trim().to_string()
}

/// `transform=scale(2)` becomes `transform="scale(2)"`.
pub fn quote_attribute_values(text: &str) -> String {
    ATTRIBUTE
        .replace_all(text, |caps: &Captures| {
            let value = &caps[2];
            if value.starts_with('"') || value.starts_with('\'') {
                caps[0].to_string()
            } else {
                format!("{}=\"{}\"", &caps[1], value)
            }
        })
        .into_owned()
}

/// Drops `name=""` together with the whitespace in front of it.
pub fn remove_empty_attributes(text: &str) -> String {
    EMPTY_ATTRIBUTE.replace_all(text, "").into_owned()
}

/// Whether sanitized output may be rendered and offered for download.
pub fn is_acceptable(sanitized: &str) -> bool {
    sanitized.trim().starts_with(SVG_ROOT_MARKER)
}

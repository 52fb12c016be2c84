//! Pure text/URL helpers used by the page template at build time.

use serde_json::{Map, Value};

lazy_static! {
    static ref VIDEO_ID_REGEX: regex::Regex = regex::Regex::new(
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]{11})"
    )
    .unwrap();
}

/// Extract the 11-character video id from a YouTube-style URL.
pub fn video_id(url: &str) -> Option<String> {
    VIDEO_ID_REGEX
        .captures(url)
        .map(|caps| caps[1].to_owned())
}

/// Append tracking parameters for a template-placed link, tagged with the
/// episode it belongs to and an optional medium label.
pub fn tracking_url(url: &str, episode: u32, medium: Option<&str>) -> String {
    if url.is_empty() {
        return String::new();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}utm_source={}&utm_medium={}&utm_campaign=ep{}",
        url,
        separator,
        crate::annotate::UTM_SOURCE,
        medium.unwrap_or("website"),
        episode
    )
}

/// Escape a string for embedding inside a JSON string literal.
pub fn json_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Shorten text to at most `max` characters, replacing the cut tail with an
/// ellipsis and trimming any whitespace left at the cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Does the string begin with an HTTP(S) scheme?
pub fn is_http(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

/// Does any value in the mapping count as present? Null, false, empty
/// strings and zero do not.
pub fn has_any(map: &Map<String, Value>) -> bool {
    map.values().any(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

/// Uppercase the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

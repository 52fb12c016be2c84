pub const UTM_SOURCE: &str = "tms.show";
pub const UTM_MEDIUM: &str = "episode-card";
pub const UTM_CAMPAIGN: &str = "podcast-discovery";

/// Append the fixed attribution parameters to an outbound URL.
///
/// Not idempotent: annotating an already-annotated URL duplicates the
/// parameters, so call this exactly once per URL per render.
pub fn annotate(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}utm_source={}&utm_medium={}&utm_campaign={}",
        url, separator, UTM_SOURCE, UTM_MEDIUM, UTM_CAMPAIGN
    )
}

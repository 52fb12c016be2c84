use serde::Deserialize;
use serde_json::{Map, Value};

/// One episode's metadata as supplied by the data endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct EpisodeRecord {
    pub episode: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    // Keyed by platform name; preserve_order keeps the source declaration order.
    #[serde(default)]
    pub links: Option<Map<String, Value>>,
}

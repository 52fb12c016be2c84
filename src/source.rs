use crate::error::{PageError, Result};
use crate::models::EpisodeRecord;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Fixed location of the episode document, relative to the site base URL.
pub const EPISODES_PATH: &str = "/episodes.json";

#[derive(Deserialize)]
struct EpisodesDoc {
    // A document without an "episodes" key is an empty collection.
    #[serde(default)]
    episodes: Vec<EpisodeRecord>,
}

#[allow(async_fn_in_trait)]
pub trait Source {
    async fn fetch_episodes(&self) -> Vec<EpisodeRecord>;
}

pub struct HttpSource {
    net: Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        HttpSource {
            net: Client::new(),
            endpoint: format!("{}{}", base_url.as_ref().trim_end_matches('/'), EPISODES_PATH),
        }
    }

    async fn try_fetch(&self) -> Result<Vec<EpisodeRecord>> {
        let response = self.net.get(&self.endpoint).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(
                PageError(format!("Status code was not 200 OK.\nCode: {}", status)).into(),
            );
        }
        let text = response.text().await?;
        decode(&text)
    }
}

fn decode(text: &str) -> Result<Vec<EpisodeRecord>> {
    let doc = serde_json::from_str::<EpisodesDoc>(text)?;
    Ok(doc.episodes)
}

impl Source for HttpSource {
    /// Fetch the episode collection. Any transport, status or decode failure
    /// degrades to an empty collection with a diagnostic; the caller never
    /// sees an error.
    async fn fetch_episodes(&self) -> Vec<EpisodeRecord> {
        match self.try_fetch().await {
            Ok(episodes) => episodes,
            Err(err) => {
                log::error!("error loading episodes: {}", err);
                Vec::new()
            }
        }
    }
}

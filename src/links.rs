use crate::annotate::annotate;
use crate::models::LinkUnit;
use crate::transforms::capitalize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Read-only mapping from platform name to icon asset reference.
///
/// The platform set is fixed and closed; adding one means editing the
/// default table below. The registry is built once at startup and never
/// mutated afterwards.
pub struct PlatformIconRegistry {
    icons: HashMap<&'static str, &'static str>,
}

impl PlatformIconRegistry {
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        PlatformIconRegistry {
            icons: entries.iter().copied().collect(),
        }
    }

    pub fn icon(&self, platform: &str) -> Option<&'static str> {
        self.icons.get(platform).copied()
    }
}

lazy_static! {
    /// Platform icons from the simple-icons CDN.
    pub static ref PLATFORM_ICONS: PlatformIconRegistry = PlatformIconRegistry::new(&[
        ("youtube", "https://cdn.jsdelivr.net/npm/simple-icons@13.21.0/icons/youtube.svg"),
        ("spotify", "https://cdn.jsdelivr.net/npm/simple-icons@13.21.0/icons/spotify.svg"),
        ("apple", "https://cdn.jsdelivr.net/npm/simple-icons@13.21.0/icons/applepodcasts.svg"),
        ("instagram", "https://cdn.jsdelivr.net/npm/simple-icons@13.21.0/icons/instagram.svg"),
        ("tiktok", "https://cdn.jsdelivr.net/npm/simple-icons@13.21.0/icons/tiktok.svg"),
        ("substack", "https://cdn.jsdelivr.net/npm/simple-icons@13.21.0/icons/substack.svg"),
    ]);
}

/// Builds the outbound link panel for one episode.
pub struct LinkPanelBuilder<'a> {
    registry: &'a PlatformIconRegistry,
}

impl<'a> LinkPanelBuilder<'a> {
    pub fn new(registry: &'a PlatformIconRegistry) -> Self {
        LinkPanelBuilder { registry }
    }

    /// Map platform entries to link units, in the mapping's declaration
    /// order. Entries with an empty or non-string URL, or a platform the
    /// registry does not know, are dropped silently. An empty result means
    /// no panel should exist at all.
    pub fn build(&self, links: &Map<String, Value>) -> Vec<LinkUnit> {
        links
            .iter()
            .filter_map(|(platform, url)| {
                let url = url.as_str().filter(|u| !u.is_empty())?;
                let icon = self.registry.icon(platform)?;
                Some(LinkUnit {
                    platform: platform.clone(),
                    label: capitalize(platform),
                    href: annotate(url),
                    icon: icon.to_owned(),
                })
            })
            .collect()
    }
}

use crate::links::{LinkPanelBuilder, PlatformIconRegistry};
use crate::models::{DisplayUnit, EpisodeRecord, IconDirective};
use crate::transforms::is_http;

/// Shown when an episode declares no icon of its own.
pub const DEFAULT_ICON: &str = "🎙️";

/// Maps one episode record into a display unit. Infallible: every missing
/// optional field just omits its section.
pub struct CardBuilder<'a> {
    links: LinkPanelBuilder<'a>,
}

impl<'a> CardBuilder<'a> {
    pub fn new(registry: &'a PlatformIconRegistry) -> Self {
        CardBuilder {
            links: LinkPanelBuilder::new(registry),
        }
    }

    pub fn build(&self, record: &EpisodeRecord) -> DisplayUnit {
        DisplayUnit {
            anchor: format!("ep{}", record.episode),
            number: record.episode,
            icon: resolve_icon(record.icon.as_deref()),
            // A blank title renders blank; validating it is upstream's job.
            title: record.title.clone(),
            description: record
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
            links: record
                .links
                .as_ref()
                .map(|map| self.links.build(map))
                .unwrap_or_default(),
        }
    }
}

fn resolve_icon(icon: Option<&str>) -> IconDirective {
    match icon {
        Some(url) if is_http(url) => IconDirective::Image(url.to_owned()),
        Some(glyph) if !glyph.is_empty() => IconDirective::Glyph(glyph.to_owned()),
        _ => IconDirective::Glyph(DEFAULT_ICON.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::PLATFORM_ICONS;
    use serde_json::json;

    fn record(number: u32) -> EpisodeRecord {
        EpisodeRecord {
            episode: number,
            title: format!("Episode title {}", number),
            description: None,
            icon: None,
            links: None,
        }
    }

    fn builder() -> CardBuilder<'static> {
        CardBuilder::new(&PLATFORM_ICONS)
    }

    #[test]
    fn anchor_derives_from_episode_number() {
        let unit = builder().build(&record(12));
        assert_eq!(unit.anchor, "ep12");
        assert_eq!(unit.number, 12);
    }

    #[test]
    fn icon_url_becomes_image_directive() {
        let mut rec = record(1);
        rec.icon = Some("https://x/y.png".to_owned());
        assert_eq!(
            builder().build(&rec).icon,
            IconDirective::Image("https://x/y.png".to_owned())
        );
    }

    #[test]
    fn icon_glyph_stays_text() {
        let mut rec = record(1);
        rec.icon = Some("🎙".to_owned());
        assert_eq!(
            builder().build(&rec).icon,
            IconDirective::Glyph("🎙".to_owned())
        );
    }

    #[test]
    fn absent_icon_falls_back_to_default() {
        assert_eq!(
            builder().build(&record(1)).icon,
            IconDirective::Glyph(DEFAULT_ICON.to_owned())
        );
    }

    #[test]
    fn description_attached_only_when_trimmed_non_empty() {
        let mut rec = record(1);
        rec.description = Some("  \n ".to_owned());
        assert_eq!(builder().build(&rec).description, None);

        rec.description = Some("  real words  ".to_owned());
        assert_eq!(
            builder().build(&rec).description,
            Some("real words".to_owned())
        );
    }

    #[test]
    fn no_links_means_empty_panel() {
        assert!(builder().build(&record(1)).links.is_empty());

        let mut rec = record(1);
        rec.links = json!({ "myspace": "https://m/1", "spotify": "" })
            .as_object()
            .cloned();
        assert!(builder().build(&rec).links.is_empty());
    }

    #[test]
    fn recognized_links_are_attached() {
        let mut rec = record(1);
        rec.links = json!({ "spotify": "https://s/1" }).as_object().cloned();
        let unit = builder().build(&rec);
        assert_eq!(unit.links.len(), 1);
        assert_eq!(unit.links[0].platform, "spotify");
    }
}

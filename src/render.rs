use crate::card::CardBuilder;
use crate::links::PlatformIconRegistry;
use crate::models::DisplayUnit;
use crate::order::order;
use crate::source::Source;

/// Shown whether the fetch failed or genuinely returned zero episodes; the
/// two cases are not distinguished on the page.
pub const NO_DATA_NOTICE: &str =
    "Unable to load episodes. Please check your connection and try again.";

/// Vertical offset applied when scrolling a deep-linked card into view.
pub const SCROLL_OFFSET: i32 = -80;

/// The surface the renderer mounts into. This is the only seam that touches
/// the live page; everything before it is pure data.
pub trait Mount {
    fn show_loading(&mut self);
    fn show_notice(&mut self, message: &str);
    /// Mount units in order, replacing whatever was shown before. Must not
    /// return until the surface has settled, so that highlight and scroll
    /// calls issued afterwards can rely on final layout.
    fn attach(&mut self, units: &[DisplayUnit]);
    fn clear_highlights(&mut self);
    /// Mark the unit with this anchor. Returns false if none is mounted.
    fn highlight(&mut self, anchor: &str) -> bool;
    fn scroll_to(&mut self, anchor: &str, offset: i32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Rendered,
    Empty,
}

/// Drives one full page pass: fetch, order, build, mount, deep-link.
/// A page lifetime performs exactly one pass; there is no live update.
pub struct ViewRenderer<'a, M: Mount> {
    cards: CardBuilder<'a>,
    mount: M,
    state: ViewState,
}

impl<'a, M: Mount> ViewRenderer<'a, M> {
    pub fn new(registry: &'a PlatformIconRegistry, mount: M) -> Self {
        ViewRenderer {
            cards: CardBuilder::new(registry),
            mount,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn mount(&self) -> &M {
        &self.mount
    }

    pub async fn run(&mut self, source: &impl Source, fragment: Option<&str>) -> ViewState {
        self.mount.show_loading();
        let episodes = source.fetch_episodes().await;

        if episodes.is_empty() {
            self.mount.show_notice(NO_DATA_NOTICE);
            self.state = ViewState::Empty;
            return self.state;
        }

        let units: Vec<DisplayUnit> = order(episodes)
            .iter()
            .map(|record| self.cards.build(record))
            .collect();
        log::debug!("mounting {} episode cards", units.len());
        self.mount.attach(&units);
        self.state = ViewState::Rendered;

        self.resolve_deep_link(fragment);
        self.state
    }

    /// Highlight and scroll to the card named by the page fragment, if any.
    /// Only fragments of the form `ep<N>` are recognized.
    fn resolve_deep_link(&mut self, fragment: Option<&str>) {
        let anchor = match fragment {
            Some(f) => f.trim_start_matches('#'),
            None => return,
        };
        if !is_episode_anchor(anchor) {
            return;
        }
        self.mount.clear_highlights();
        if self.mount.highlight(anchor) {
            self.mount.scroll_to(anchor, SCROLL_OFFSET);
        }
    }
}

fn is_episode_anchor(anchor: &str) -> bool {
    match anchor.strip_prefix("ep") {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::PLATFORM_ICONS;
    use crate::models::EpisodeRecord;

    struct StubSource {
        episodes: Vec<EpisodeRecord>,
    }

    impl Source for StubSource {
        async fn fetch_episodes(&self) -> Vec<EpisodeRecord> {
            self.episodes.clone()
        }
    }

    #[derive(Default)]
    struct RecordingMount {
        loading_shown: bool,
        notice: Option<String>,
        mounted: Vec<String>,
        highlighted: Option<String>,
        scrolled: Option<(String, i32)>,
    }

    impl Mount for RecordingMount {
        fn show_loading(&mut self) {
            self.loading_shown = true;
        }
        fn show_notice(&mut self, message: &str) {
            self.notice = Some(message.to_owned());
        }
        fn attach(&mut self, units: &[DisplayUnit]) {
            self.mounted = units.iter().map(|u| u.anchor.clone()).collect();
        }
        fn clear_highlights(&mut self) {
            self.highlighted = None;
        }
        fn highlight(&mut self, anchor: &str) -> bool {
            if self.mounted.iter().any(|a| a == anchor) {
                self.highlighted = Some(anchor.to_owned());
                return true;
            }
            false
        }
        fn scroll_to(&mut self, anchor: &str, offset: i32) {
            self.scrolled = Some((anchor.to_owned(), offset));
        }
    }

    fn ep(number: u32) -> EpisodeRecord {
        EpisodeRecord {
            episode: number,
            title: format!("t{}", number),
            description: None,
            icon: None,
            links: None,
        }
    }

    fn renderer() -> ViewRenderer<'static, RecordingMount> {
        ViewRenderer::new(&PLATFORM_ICONS, RecordingMount::default())
    }

    #[tokio::test]
    async fn empty_source_mounts_only_the_notice() {
        let source = StubSource { episodes: vec![] };
        let mut view = renderer();
        let state = view.run(&source, None).await;
        assert_eq!(state, ViewState::Empty);
        let mount = view.mount();
        assert!(mount.loading_shown);
        assert_eq!(mount.notice.as_deref(), Some(NO_DATA_NOTICE));
        assert!(mount.mounted.is_empty());
    }

    #[tokio::test]
    async fn mounts_cards_newest_first() {
        let source = StubSource {
            episodes: vec![ep(1), ep(3), ep(2)],
        };
        let mut view = renderer();
        let state = view.run(&source, None).await;
        assert_eq!(state, ViewState::Rendered);
        assert_eq!(view.mount().mounted, vec!["ep3", "ep2", "ep1"]);
        assert_eq!(view.mount().notice, None);
    }

    #[tokio::test]
    async fn deep_link_highlights_and_scrolls_the_target() {
        let source = StubSource {
            episodes: vec![ep(1), ep(2), ep(3)],
        };
        let mut view = renderer();
        view.run(&source, Some("#ep2")).await;
        let mount = view.mount();
        assert_eq!(mount.highlighted.as_deref(), Some("ep2"));
        assert_eq!(mount.scrolled, Some(("ep2".to_owned(), SCROLL_OFFSET)));
    }

    #[tokio::test]
    async fn unknown_fragment_is_ignored() {
        let source = StubSource {
            episodes: vec![ep(1)],
        };
        let mut view = renderer();
        view.run(&source, Some("#about")).await;
        assert_eq!(view.mount().highlighted, None);
        assert_eq!(view.mount().scrolled, None);
    }

    #[tokio::test]
    async fn fragment_for_unmounted_episode_scrolls_nowhere() {
        let source = StubSource {
            episodes: vec![ep(1)],
        };
        let mut view = renderer();
        view.run(&source, Some("ep9")).await;
        assert_eq!(view.mount().highlighted, None);
        assert_eq!(view.mount().scrolled, None);
    }

    #[test]
    fn recognizes_episode_anchors_only() {
        assert!(is_episode_anchor("ep7"));
        assert!(is_episode_anchor("ep42"));
        assert!(!is_episode_anchor("ep"));
        assert!(!is_episode_anchor("epx"));
        assert!(!is_episode_anchor("about"));
    }
}

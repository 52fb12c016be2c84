//! The concrete mount surface: splices rendered episode cards into a static
//! HTML page template.

use crate::models::{DisplayUnit, IconDirective, LinkUnit};
use crate::render::Mount;

/// Id of the element the cards are mounted into.
pub const CONTAINER_ID: &str = "episodes-container";

const LOADING_MARKUP: &str = r#"<p class="loading">Loading episodes...</p>"#;

/// A page template opened at its mount container. Whatever the container
/// holds in the template (text or element placeholders) is cleared on mount.
pub struct HtmlSurface {
    before: String,
    after: String,
    units: Vec<DisplayUnit>,
    notice: Option<String>,
    loading: bool,
    highlighted: Option<String>,
    scroll: Option<(String, i32)>,
}

impl HtmlSurface {
    /// Locate the mount container in a template. `None` means the template
    /// has no such element and rendering must be aborted.
    pub fn locate(template: &str, container_id: &str) -> Option<Self> {
        let marker = format!("id=\"{}\"", container_id);
        let at = template.find(&marker)?;
        let tag_start = template[..at].rfind('<')?;
        let tag: String = template[tag_start + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        let open_end = at + template[at..].find('>')? + 1;
        let close = container_close(template, open_end, &tag)?;
        Some(HtmlSurface {
            before: template[..open_end].to_owned(),
            after: template[close..].to_owned(),
            units: Vec::new(),
            notice: None,
            loading: false,
            highlighted: None,
            scroll: None,
        })
    }

    /// Produce the full page with the current container content.
    pub fn page(&self) -> String {
        let mut inner = String::new();
        if self.loading {
            inner.push_str(LOADING_MARKUP);
        } else if let Some(notice) = &self.notice {
            inner.push_str(&format!(r#"<p class="error">{}</p>"#, esc(notice)));
        } else {
            for unit in &self.units {
                let marked = self.highlighted.as_deref() == Some(unit.anchor.as_str());
                inner.push_str(&render_card(unit, marked));
            }
        }
        let scroll = self
            .scroll
            .as_ref()
            .map(|(anchor, offset)| scroll_script(anchor, *offset))
            .unwrap_or_default();
        format!("{}{}{}{}", self.before, inner, scroll, self.after)
    }
}

impl Mount for HtmlSurface {
    fn show_loading(&mut self) {
        self.units.clear();
        self.notice = None;
        self.loading = true;
    }

    fn show_notice(&mut self, message: &str) {
        self.units.clear();
        self.loading = false;
        self.notice = Some(message.to_owned());
    }

    // Layout is settled once the units are stored, so returning is the
    // settle signal the renderer waits on.
    fn attach(&mut self, units: &[DisplayUnit]) {
        self.loading = false;
        self.notice = None;
        self.units = units.to_vec();
    }

    fn clear_highlights(&mut self) {
        self.highlighted = None;
    }

    fn highlight(&mut self, anchor: &str) -> bool {
        if self.units.iter().any(|u| u.anchor == anchor) {
            self.highlighted = Some(anchor.to_owned());
            return true;
        }
        false
    }

    fn scroll_to(&mut self, anchor: &str, offset: i32) {
        self.scroll = Some((anchor.to_owned(), offset));
    }
}

/// Find the container's own closing tag, skipping past any nested elements
/// of the same tag that sit inside it as placeholders.
fn container_close(template: &str, from: usize, tag: &str) -> Option<usize> {
    let open_pat = format!("<{}", tag);
    let close_pat = format!("</{}", tag);
    let mut depth = 0usize;
    let mut pos = from;
    loop {
        let close = find_tag(template, pos, &close_pat)?;
        match find_tag(template, pos, &open_pat) {
            Some(open) if open < close => {
                depth += 1;
                pos = open + open_pat.len();
            }
            _ => {
                if depth == 0 {
                    return Some(close);
                }
                depth -= 1;
                pos = close + close_pat.len();
            }
        }
    }
}

// A match must end the tag name, so "<div" does not hit "<divider".
fn find_tag(template: &str, from: usize, pat: &str) -> Option<usize> {
    let mut pos = from;
    while let Some(i) = template[pos..].find(pat) {
        let found = pos + i;
        match template[found + pat.len()..].chars().next() {
            Some(c) if c.is_ascii_alphanumeric() || c == '-' => pos = found + pat.len(),
            _ => return Some(found),
        }
    }
    None
}

fn render_card(unit: &DisplayUnit, highlighted: bool) -> String {
    let class = if highlighted {
        "episode-card highlighted"
    } else {
        "episode-card"
    };
    let icon = match &unit.icon {
        IconDirective::Image(url) => format!(
            r#"<img src="{}" alt="Episode {} icon">"#,
            esc(url),
            unit.number
        ),
        IconDirective::Glyph(glyph) => esc(glyph),
    };
    let description = unit
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="episode-description">{}</p>"#, esc(d)))
        .unwrap_or_default();
    let links = if unit.links.is_empty() {
        String::new()
    } else {
        let items: String = unit.links.iter().map(render_link).collect();
        format!(r#"<div class="episode-links">{}</div>"#, items)
    };

    format!(
        r#"<article class="{class}" id="{anchor}"><div class="episode-header"><span class="episode-icon">{icon}</span><div class="episode-meta"><span class="episode-number">Episode {number}</span><h2 class="episode-title">{title}</h2></div></div>{description}{links}</article>"#,
        class = class,
        anchor = esc(&unit.anchor),
        icon = icon,
        number = unit.number,
        title = esc(&unit.title),
        description = description,
        links = links,
    )
}

fn render_link(link: &LinkUnit) -> String {
    format!(
        r#"<a href="{href}" title="{label}" target="_blank" rel="noopener noreferrer"><img src="{icon}" alt="{platform}" height="20" class="platform-icon platform-{platform}"></a>"#,
        href = esc(&link.href),
        label = esc(&link.label),
        icon = esc(&link.icon),
        platform = esc(&link.platform),
    )
}

fn scroll_script(anchor: &str, offset: i32) -> String {
    format!(
        r#"<script>window.addEventListener("load",function(){{var t=document.getElementById("{}");if(t){{window.scrollTo({{top:t.getBoundingClientRect().top+window.pageYOffset+({}),behavior:"smooth"}});}}}});</script>"#,
        esc(anchor),
        offset
    )
}

/// Minimal deterministic HTML escape for content fields.
fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

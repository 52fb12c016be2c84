/// How a card's icon slot should be rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconDirective {
    /// An image fetched from the given URL.
    Image(String),
    /// A literal glyph (usually an emoji) rendered as text.
    Glyph(String),
}

/// One outbound platform link on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkUnit {
    pub platform: String,
    pub label: String,
    pub href: String,
    pub icon: String,
}

/// The rendered representation of one episode, built fresh per render pass
/// and never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayUnit {
    pub anchor: String,
    pub number: u32,
    pub icon: IconDirective,
    pub title: String,
    pub description: Option<String>,
    /// Empty means no link panel is attached at all.
    pub links: Vec<LinkUnit>,
}

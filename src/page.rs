// ABOUTME: Page rendering for the m2s application
// ABOUTME: Maps a Deck onto the page data model and fills the page template with it

use crate::assets::Assets;
use crate::deck::Deck;
use crate::errors::Result;
use crate::slug::slugify;
use log::{debug, info};
use serde::Serialize;

/// Per-slide data handed to the page template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideView {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Only the first slide starts out current
    pub current: bool,
}

/// Everything the page template can see. Asset fields are flattened to the
/// top level (`screen_css`, `outline_css`, `print_css`, `script`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: String,
    pub author: String,
    pub slides: Vec<SlideView>,
    #[serde(flatten)]
    pub assets: Assets,
}

/// Anything that can turn page data into final HTML.
pub trait PageTemplate {
    fn render(&self, page: &Page) -> Result<String>;
}

/// Anchor id for the slide at `index`: its title's slug, or `slide-N` (1-based)
/// when the slug is empty. Duplicate titles give duplicate ids.
pub fn slide_id(title: &str, index: usize) -> String {
    let id = slugify(title);
    if id.is_empty() {
        format!("slide-{}", index + 1)
    } else {
        id
    }
}

impl Page {
    pub fn from_deck(deck: &Deck, assets: Assets) -> Self {
        let slides = deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                let id = slide_id(&slide.title, i);
                debug!("Slide {} -> #{}", i + 1, id);
                SlideView {
                    id,
                    title: slide.title.clone(),
                    body: slide.body_html.clone(),
                    current: i == 0,
                }
            })
            .collect();

        Self {
            title: deck.title.clone(),
            author: deck.author.clone(),
            slides,
            assets,
        }
    }
}

/// Render a deck to a complete HTML page.
///
/// Template failures propagate; they mean the template is broken, not the input.
pub fn render_page(deck: &Deck, assets: Assets, template: &dyn PageTemplate) -> Result<String> {
    info!("Rendering page with {} slide(s)", deck.slides.len());
    let page = Page::from_deck(deck, assets);
    template.render(&page)
}

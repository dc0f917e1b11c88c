// ABOUTME: Deck assembly for the m2s application
// ABOUTME: Runs front matter, splitting and slide building to produce the full Deck

use crate::frontmatter::split_front_matter;
use crate::markdown::MarkdownConverter;
use crate::slide::{build_slide, Slide};
use crate::splitter::split_slides;
use log::info;

/// A parsed presentation. Slides are in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    pub title: String,
    pub author: String,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Parse a whole markdown document into a deck.
    ///
    /// When the front matter gives no title, the first slide's title is used
    /// (even if that is empty). The author is never defaulted. An empty
    /// document yields an empty deck, not an error.
    pub fn parse(source: &str, converter: &dyn MarkdownConverter) -> Self {
        let (meta, body) = split_front_matter(source);

        let slides: Vec<Slide> = split_slides(&body)
            .iter()
            .map(|chunk| build_slide(chunk, converter))
            .collect();

        let mut title = meta.title;
        if title.is_empty() {
            if let Some(first) = slides.first() {
                title = first.title.clone();
            }
        }

        info!("Parsed deck {:?} with {} slide(s)", title, slides.len());

        Self {
            title,
            author: meta.author,
            slides,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::ComrakConverter;

    fn parse(source: &str) -> Deck {
        Deck::parse(source, &ComrakConverter::default())
    }

    #[test]
    fn title_defaults_to_first_slide_title() {
        let deck = parse("# Opening\nhi\n---\n# Closing");
        assert_eq!(deck.title, "Opening");
        assert_eq!(deck.title, deck.slides[0].title);
        assert_eq!(deck.author, "");
    }

    #[test]
    fn front_matter_title_wins_over_slides() {
        let deck = parse("---\ntitle: Chosen\n---\n# Opening\n---\n# Closing");
        assert_eq!(deck.title, "Chosen");
        assert_eq!(deck.slides.len(), 2);
    }

    #[test]
    fn empty_first_slide_title_is_not_replaced() {
        let deck = parse("#\n---\n# Second");
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.title, "");
    }

    #[test]
    fn front_matter_only_gives_empty_deck_with_metadata() {
        let deck = parse("---\ntitle: Nothing Yet\nauthor: Me\n---\n");
        assert!(deck.is_empty());
        assert_eq!(deck.title, "Nothing Yet");
        assert_eq!(deck.author, "Me");
    }

    #[test]
    fn whitespace_document_gives_empty_deck() {
        let deck = parse(" \n\n\t \n");
        assert_eq!(deck, Deck::default());
    }

    #[test]
    fn slides_keep_document_order() {
        let deck = parse("# C\n---\n# A\n---\n# B");
        let titles: Vec<&str> = deck.slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }
}

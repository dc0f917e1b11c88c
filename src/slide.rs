// ABOUTME: Slide building for the m2s deck
// ABOUTME: Decides each chunk's title and renders its body through the markdown converter

use crate::markdown::MarkdownConverter;
use log::debug;

/// One presentation unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    /// Displayed/navigation title; empty when the chunk has none
    pub title: String,
    /// Rendered HTML fragment
    pub body_html: String,
}

/// Build a slide from one chunk of the deck body.
///
/// A first line starting with `#` is an explicit heading: it becomes the title
/// (with the `#` markers stripped) and is left out of the body. Any other first
/// line is used as the title *and* stays in the rendered body. When the body
/// renders to nothing, the title itself is rendered instead so heading-only
/// slides still show something.
pub fn build_slide(chunk: &str, converter: &dyn MarkdownConverter) -> Slide {
    let lines: Vec<&str> = chunk.split('\n').collect();
    let head = lines.first().map_or("", |line| line.trim());

    let (title, source) = if head.starts_with('#') {
        let title = head.trim_start_matches(&['#', ' '][..]).trim();
        (title.to_string(), lines[1..].join("\n"))
    } else {
        // Covers both an implicit title and a blank first line (empty title).
        (head.to_string(), lines.join("\n"))
    };

    let mut body_html = converter.to_html(&source);
    if body_html.trim().is_empty() {
        debug!("Slide {:?} has no body, rendering its title instead", title);
        body_html = converter.to_html(&title);
    }

    Slide { title, body_html }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::ComrakConverter;

    /// Echoes its input so tests can see exactly what was sent for conversion
    struct Echo;

    impl MarkdownConverter for Echo {
        fn to_html(&self, markdown: &str) -> String {
            markdown.trim().to_string()
        }
    }

    #[test]
    fn heading_line_becomes_title_and_leaves_body() {
        let slide = build_slide("## My Title\nSome body", &ComrakConverter::default());
        assert_eq!(slide.title, "My Title");
        assert!(!slide.body_html.contains("My Title"));
        assert!(slide.body_html.contains("<p>Some body</p>"));
    }

    #[test]
    fn heading_markers_and_spaces_are_stripped() {
        assert_eq!(build_slide("###   Deep  ", &Echo).title, "Deep");
        assert_eq!(build_slide("#NoSpace", &Echo).title, "NoSpace");
        assert_eq!(build_slide("# # Nested #", &Echo).title, "Nested #");
    }

    #[test]
    fn plain_first_line_is_title_and_body() {
        let slide = build_slide("Intro\nSome text", &ComrakConverter::default());
        assert_eq!(slide.title, "Intro");
        assert!(slide.body_html.contains("Intro"));
        assert!(slide.body_html.contains("Some text"));
    }

    #[test]
    fn plain_first_line_is_sent_to_converter() {
        let slide = build_slide("Intro\n\n- a\n- b", &Echo);
        assert_eq!(slide.body_html, "Intro\n\n- a\n- b");
    }

    #[test]
    fn heading_only_slide_falls_back_to_title() {
        let slide = build_slide("# Title Only", &ComrakConverter::default());
        assert_eq!(slide.title, "Title Only");
        assert_eq!(slide.body_html.trim(), "<p>Title Only</p>");
    }

    #[test]
    fn heading_with_blank_body_falls_back_to_title() {
        let slide = build_slide("# Spacer\n\n   \n", &Echo);
        assert_eq!(slide.body_html, "Spacer");
    }

    #[test]
    fn blank_first_line_gives_empty_title() {
        let slide = build_slide("   \nBody after blank", &Echo);
        assert_eq!(slide.title, "");
        assert_eq!(slide.body_html, "Body after blank");
    }

    #[test]
    fn bare_hash_gives_empty_title_and_empty_body() {
        let slide = build_slide("#", &ComrakConverter::default());
        assert_eq!(slide.title, "");
        assert_eq!(slide.body_html, "");
    }
}

// ABOUTME: Markdown conversion for slide bodies
// ABOUTME: Wraps comrak behind a small trait so the deck builder never depends on the engine

use comrak::{markdown_to_html, ComrakOptions};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ABSOLUTE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href="(https?://[^"]*)"([^>]*)>"#).unwrap());

/// Anything that can turn a markdown fragment into an HTML fragment.
///
/// Conversion is total: malformed markdown renders oddly but never fails.
pub trait MarkdownConverter {
    fn to_html(&self, markdown: &str) -> String;
}

/// Knobs for the bundled comrak converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Give headings generated `id` anchors
    pub heading_ids: bool,
    /// Open absolute http(s) links in a new tab
    pub external_links_new_tab: bool,
    /// Pass raw HTML in the source through untouched
    pub unsafe_html: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            heading_ids: true,
            external_links_new_tab: true,
            unsafe_html: true,
        }
    }
}

/// comrak-backed converter with a GitHub-ish set of extensions enabled
pub struct ComrakConverter {
    options: ComrakOptions,
    links_new_tab: bool,
}

impl ComrakConverter {
    pub fn new(markdown: &MarkdownOptions) -> Self {
        let mut options = ComrakOptions::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        if markdown.heading_ids {
            options.extension.header_ids = Some(String::new());
        }
        options.render.unsafe_ = markdown.unsafe_html;

        Self {
            options,
            links_new_tab: markdown.external_links_new_tab,
        }
    }
}

impl Default for ComrakConverter {
    fn default() -> Self {
        Self::new(&MarkdownOptions::default())
    }
}

impl MarkdownConverter for ComrakConverter {
    fn to_html(&self, markdown: &str) -> String {
        let trimmed = markdown.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let html = markdown_to_html(trimmed, &self.options);
        if self.links_new_tab {
            open_links_in_new_tab(&html)
        } else {
            html
        }
    }
}

/// Add `target="_blank"` to absolute http(s) anchors that don't already pick a target.
fn open_links_in_new_tab(html: &str) -> String {
    ABSOLUTE_LINK
        .replace_all(html, |caps: &Captures| {
            let rest = &caps[2];
            if rest.contains("target=") {
                caps[0].to_string()
            } else {
                format!(r#"<a href="{}" target="_blank"{}>"#, &caps[1], rest)
            }
        })
        .into_owned()
}

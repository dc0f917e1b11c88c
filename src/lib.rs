// ABOUTME: Library module for the m2s program.
// ABOUTME: Contains the markdown-to-deck pipeline and the page rendering around it.

// Reexport modules
pub mod assets;
pub mod config;
pub mod deck;
pub mod errors;
pub mod frontmatter;
pub mod html;
pub mod markdown;
pub mod page;
pub mod slide;
pub mod slug;
pub mod splitter;
pub mod template;
pub mod utils;

// Reexport common types and functions
pub use assets::Assets;
pub use config::Config;
pub use deck::Deck;
pub use errors::{M2sError, Result};
pub use html::{generate_html, render_markdown, write_html_to_file};
pub use markdown::{ComrakConverter, MarkdownConverter, MarkdownOptions};
pub use page::{render_page, Page, PageTemplate, SlideView};
pub use slide::Slide;
pub use slug::slugify;
pub use template::TeraTemplate;

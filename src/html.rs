// ABOUTME: HTML generation module for the m2s application
// ABOUTME: Runs the markdown-to-deck pipeline and reads/writes the files around it

use crate::assets::{load_page_template, Assets};
use crate::config::Config;
use crate::deck::Deck;
use crate::errors::{M2sError, Result};
use crate::markdown::ComrakConverter;
use crate::page::render_page;
use crate::utils;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Convert markdown text to a complete HTML slide page
pub fn render_markdown(markdown: &str, config: &Config) -> Result<String> {
    // Load the template first so a broken one fails before any parsing work.
    let template = load_page_template(config)?;
    let assets = Assets::load(config)?;

    let converter = ComrakConverter::new(&config.markdown);
    let deck = Deck::parse(markdown, &converter);
    if deck.is_empty() {
        warn!("No slides found; the page will be empty");
    }

    render_page(&deck, assets, &template)
}

/// Generate HTML from a markdown file
pub fn generate_html(markdown_path: &Path, config: &Config) -> Result<String> {
    info!("Generating HTML from markdown: {:?}", markdown_path);

    // Validate input file exists
    utils::validate_file_exists(markdown_path)?;

    let markdown_content = fs::read_to_string(markdown_path).map_err(M2sError::FileReadError)?;
    render_markdown(&markdown_content, config)
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    utils::ensure_parent_directory_exists(output_path)?;

    fs::write(output_path, html_content).map_err(|source| M2sError::FileWriteError {
        path: output_path.to_path_buf(),
        source,
    })
}

// ABOUTME: Asset handling for the m2s application
// ABOUTME: Provides the bundled page template, styles and script, with local file overrides

use crate::config::Config;
use crate::errors::{M2sError, Result};
use crate::template::TeraTemplate;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const BUNDLED_PAGE_TEMPLATE: &str = include_str!("../assets/page.html");
pub const BUNDLED_SCREEN_CSS: &str = include_str!("../assets/slides.css");
pub const BUNDLED_OUTLINE_CSS: &str = include_str!("../assets/outline.css");
pub const BUNDLED_PRINT_CSS: &str = include_str!("../assets/print.css");
pub const BUNDLED_SCRIPT: &str = include_str!("../assets/slides.js");

/// Where an asset's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Bundled(&'static str),
    File(PathBuf),
}

impl AssetSource {
    /// Use `path` when given, the bundled text otherwise
    pub fn or_bundled(path: Option<&Path>, bundled: &'static str) -> Self {
        match path {
            Some(path) => AssetSource::File(path.to_path_buf()),
            None => AssetSource::Bundled(bundled),
        }
    }

    /// Read the asset's text. `name` only appears in errors and logs.
    pub fn content(&self, name: &'static str) -> Result<String> {
        match self {
            AssetSource::Bundled(text) => Ok((*text).to_string()),
            AssetSource::File(path) => {
                info!("Reading {} from {:?}", name, path);
                fs::read_to_string(path).map_err(|source| M2sError::AssetError {
                    name,
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

/// Style and script text injected verbatim into the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assets {
    pub screen_css: String,
    pub outline_css: String,
    pub print_css: String,
    pub script: String,
}

impl Assets {
    /// The assets compiled into the binary
    pub fn bundled() -> Self {
        Self {
            screen_css: BUNDLED_SCREEN_CSS.to_string(),
            outline_css: BUNDLED_OUTLINE_CSS.to_string(),
            print_css: BUNDLED_PRINT_CSS.to_string(),
            script: BUNDLED_SCRIPT.to_string(),
        }
    }

    /// Bundled assets with any overrides from `config` applied
    pub fn load(config: &Config) -> Result<Self> {
        Ok(Self {
            screen_css: AssetSource::or_bundled(config.screen_css.as_deref(), BUNDLED_SCREEN_CSS)
                .content("presentation stylesheet")?,
            outline_css: AssetSource::or_bundled(
                config.outline_css.as_deref(),
                BUNDLED_OUTLINE_CSS,
            )
            .content("outline stylesheet")?,
            print_css: AssetSource::or_bundled(config.print_css.as_deref(), BUNDLED_PRINT_CSS)
                .content("print stylesheet")?,
            script: AssetSource::or_bundled(config.script.as_deref(), BUNDLED_SCRIPT)
                .content("navigation script")?,
        })
    }
}

/// Compile the page template, custom or bundled
pub fn load_page_template(config: &Config) -> Result<TeraTemplate> {
    let source = AssetSource::or_bundled(config.template_path.as_deref(), BUNDLED_PAGE_TEMPLATE)
        .content("page template")?;
    TeraTemplate::compile(&source)
}

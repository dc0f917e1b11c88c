// ABOUTME: Configuration module for the m2s application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::errors::{M2sError, Result};
use crate::markdown::MarkdownOptions;
use std::env;
use std::path::PathBuf;

/// Global configuration for a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Custom page template replacing the bundled one
    pub template_path: Option<PathBuf>,
    pub screen_css: Option<PathBuf>,
    pub outline_css: Option<PathBuf>,
    pub print_css: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub markdown: MarkdownOptions,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        let defaults = MarkdownOptions::default();
        let flag = |key: &str, default: bool| -> Result<bool> {
            match lookup(key) {
                Some(value) => parse_flag(key, &value),
                None => Ok(default),
            }
        };

        Ok(Self {
            template_path: path("M2S_TEMPLATE"),
            screen_css: path("M2S_SCREEN_CSS"),
            outline_css: path("M2S_OUTLINE_CSS"),
            print_css: path("M2S_PRINT_CSS"),
            script: path("M2S_SCRIPT"),
            markdown: MarkdownOptions {
                heading_ids: flag("M2S_HEADING_IDS", defaults.heading_ids)?,
                external_links_new_tab: flag("M2S_LINKS_NEW_TAB", defaults.external_links_new_tab)?,
                unsafe_html: flag("M2S_UNSAFE_HTML", defaults.unsafe_html)?,
            },
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(M2sError::ConfigError(format!(
            "{} must be a boolean, got {:?}",
            key, value
        ))),
    }
}

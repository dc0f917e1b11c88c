// ABOUTME: Error types for the m2s application
// ABOUTME: Provides structured error handling for reading, templating and writing a deck

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum M2sError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to write file {path:?}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Page template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Failed to load {name} asset from {path:?}: {source}")]
    AssetError {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, M2sError>;

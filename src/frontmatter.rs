// ABOUTME: Front matter extraction for deck metadata
// ABOUTME: Splits a leading `---` block off the document and reads title/author from it

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

static FRONT_MATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*\n?").unwrap());

/// Metadata recognised in the front matter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub author: String,
}

/// Split optional front matter off `text`.
///
/// Line endings are normalised and the text trimmed before matching, so the
/// block must open on the first non-blank line. Returns the metadata (empty
/// when there is no block) and the remaining body, trimmed.
pub fn split_front_matter(text: &str) -> (FrontMatter, String) {
    let normalized = text.replace("\r\n", "\n");
    let trimmed = normalized.trim();

    match FRONT_MATTER.captures(trimmed) {
        Some(caps) => {
            let block = caps.get(1).map_or("", |m| m.as_str());
            let whole = caps.get(0).map_or(0, |m| m.end());
            let meta = parse_meta(block);
            debug!("Front matter found: {:?}", meta);
            (meta, trimmed[whole..].trim().to_string())
        }
        None => (FrontMatter::default(), trimmed.to_string()),
    }
}

/// Read `title:` and `author:` lines from a front matter block.
/// Keys match case-insensitively; later lines win; anything else is ignored.
fn parse_meta(block: &str) -> FrontMatter {
    let mut meta = FrontMatter::default();
    let mut recognised = false;

    for line in block.lines() {
        let line = line.trim();
        if let Some(value) = strip_key(line, "title:") {
            meta.title = value.to_string();
            recognised = true;
        }
        if let Some(value) = strip_key(line, "author:") {
            meta.author = value.to_string();
            recognised = true;
        }
    }

    if !recognised && !block.trim().is_empty() {
        warn!("Front matter block has no title or author entries; ignoring it");
    }
    meta
}

fn strip_key<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let head = line.get(..key.len())?;
    if head.eq_ignore_ascii_case(key) {
        Some(line[key.len()..].trim())
    } else {
        None
    }
}

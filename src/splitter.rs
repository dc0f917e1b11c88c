// ABOUTME: Slide splitting for the deck body
// ABOUTME: Breaks the body into trimmed, non-empty chunks on standalone `---` lines

use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*---\s*$").unwrap());

/// Split `body` into slide chunks.
///
/// Any line that is `---` once trimmed separates slides. Chunks are trimmed and
/// empty ones are dropped, so stray, leading, trailing or repeated separators
/// never produce blank slides.
pub fn split_slides(body: &str) -> Vec<String> {
    SECTION_SPLIT
        .split(body)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_string)
        .collect()
}

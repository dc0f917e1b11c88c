// ABOUTME: Slug generation for slide anchors
// ABOUTME: Turns arbitrary slide titles into lowercase, hyphen-separated ids

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Derive a URL/ID-safe token from `text`.
///
/// The text is lowercased, every run of characters outside `[a-z0-9]` becomes a
/// single `-`, and leading/trailing hyphens are trimmed. The result may be empty.
/// No collision handling happens here; callers that need unique ids resolve that
/// themselves.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_WORD
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_well_formed(slug: &str) -> bool {
        let re = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
        slug.is_empty() || re.is_match(slug)
    }

    #[test]
    fn punctuation_collapses_to_single_hyphen() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn leading_and_trailing_noise_is_trimmed() {
        assert_eq!(slugify("  --Intro--  "), "intro");
        assert_eq!(slugify("(1) Setup"), "1-setup");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(slugify("Café Menü"), "caf-men");
        assert_eq!(slugify("多言語"), "");
    }

    #[test]
    fn empty_and_symbol_only_titles_give_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ???"), "");
    }

    #[test]
    fn output_is_always_well_formed() {
        for input in [
            "Hello, World!",
            "a---b",
            "  spaced   out  ",
            "UPPER lower 123",
            "#hash tag#",
            "tab\tseparated",
            "ß and ÿ",
            "",
        ] {
            let slug = slugify(input);
            assert!(is_well_formed(&slug), "{input:?} -> {slug:?}");
        }
    }

    #[test]
    fn slugify_is_deterministic() {
        assert_eq!(slugify("Second Slide"), slugify("Second Slide"));
        assert_eq!(slugify("Second Slide"), "second-slide");
    }
}

//! Markup helpers for the editor UI
//!
//! Slide content is an opaque HTML fragment; the editor never renders it
//! faithfully. For thumbnails and the live preview we reduce it to plain
//! text the same way the exported player's index does: strip the tags,
//! collapse whitespace.

use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"))
}

fn space_pattern() -> &'static Regex {
    static SPACE_RE: OnceLock<Regex> = OnceLock::new();
    SPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Reduce an HTML-like fragment to collapsed plain text.
pub fn strip_tags(fragment: &str) -> String {
    let text = tag_pattern().replace_all(fragment, " ");
    space_pattern().replace_all(&text, " ").trim().to_string()
}

/// Thumbnail preview line: stripped text truncated to `max_chars`.
pub fn preview_text(fragment: &str, max_chars: usize) -> String {
    let text = strip_tags(fragment);
    if text.is_empty() {
        return "No content".to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    if truncated.len() < text.len() {
        format!("{}...", truncated)
    } else {
        truncated
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("<p>Hello <b>world</b></p>"),
            "Hello world"
        );
        assert_eq!(strip_tags("plain"), "plain");
        assert_eq!(strip_tags("<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>"), "One Two");
    }

    #[test]
    fn test_preview_text_truncates() {
        let fragment = "<p>The quick brown fox jumps over the lazy dog</p>";
        assert_eq!(preview_text(fragment, 9), "The quick...");
        assert_eq!(preview_text(fragment, 500), "The quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_preview_text_empty_content() {
        assert_eq!(preview_text("", 40), "No content");
        assert_eq!(preview_text("<hr>", 40), "No content");
    }
}

//! Plain-text derivations of rich-text note content.
//!
//! # Responsibility
//! - Strip markup tags for list previews and the search corpus.
//! - Count words for the editor status line.
//!
//! # Invariants
//! - Tags (`<...>`) are removed without being interpreted; entities and
//!   text between tags are kept as-is.
//! - Lengths are measured in characters, never bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Number of characters kept in a list preview.
pub const PREVIEW_CHARS: usize = 50;
/// Marker appended to previews that hit the length boundary.
pub const PREVIEW_ELLIPSIS: &str = "...";

static MARKUP_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid markup tag regex"));

/// Removes every markup tag from `content`.
pub fn strip_markup(content: &str) -> Cow<'_, str> {
    MARKUP_TAG_RE.replace_all(content, "")
}

/// Derives the list preview for note content.
///
/// Rules:
/// - text is the first [`PREVIEW_CHARS`] characters of the stripped content;
/// - [`PREVIEW_ELLIPSIS`] is appended when the stripped text has at least
///   [`PREVIEW_CHARS`] characters, even if nothing was cut off.
pub fn preview_text(content: &str) -> String {
    let stripped = strip_markup(content);
    let mut preview: String = stripped.chars().take(PREVIEW_CHARS).collect();
    if preview.chars().count() == PREVIEW_CHARS {
        preview.push_str(PREVIEW_ELLIPSIS);
    }
    preview
}

/// Counts whitespace-separated words in the stripped content.
pub fn word_count(content: &str) -> usize {
    strip_markup(content).split_whitespace().count()
}

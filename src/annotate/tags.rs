//! Hashtags found in the original update text.

use maud::{Markup, html};
use regex::Regex;
use std::sync::LazyLock;

/// `#` at start of text or after anything but a word character or path
/// separator, then a letter, then letters, digits, `_`, `.` or `-`.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\w\\/])#([a-zA-Z][a-zA-Z0-9_.\-]*)(?:\b|$)").expect("tag pattern is valid")
});

/// Hashtag as the author typed it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tag {
    text: String,
}

impl Tag {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Tag text in original case, without the `#`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower cased label used for the CSS class.
    pub fn slug(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Extracts tags from unsanitized text.
///
/// Repeats are kept. The result is sorted by tag text, case sensitively,
/// so uppercase sorts before lowercase.
pub fn extract(original: &str) -> Vec<Tag> {
    let mut tags: Vec<Tag> = TAG
        .captures_iter(original)
        .filter_map(|caps| caps.get(1))
        .map(|m| Tag::new(m.as_str()))
        .collect();
    tags.sort();
    tags
}

/// Renders tag labels as a block, or nothing when there are no tags.
pub fn render(tags: &[Tag]) -> Option<Markup> {
    if tags.is_empty() {
        return None;
    }

    Some(html! {
        div class="tags" {
            @for tag in tags {
                " "
                span class={ "tag tag-" (tag.slug()) } { (tag.text()) }
            }
        }
    })
}

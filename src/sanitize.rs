//! Markup stripping for untrusted update text.

use maud::html;
use regex::Regex;
use std::sync::LazyLock;

/// Anything shaped like an element, closing tag, comment, doctype or
/// processing instruction. A bare `<` that does not open a tag is left for
/// the escaper.
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|\z)|</?[A-Za-z][^<>]*>|<[!?][^<>]*>")
        .expect("markup pattern is valid")
});

/// Removes all markup from raw update text and escapes what remains.
///
/// No tag is allowed through, trusted or not. Text content between tags is
/// kept; any leftover `&`, `<`, `>` or `"` is escaped so the result embeds
/// safely in an HTML fragment and displays literally.
///
/// # Arguments
///
/// * `raw`: Author supplied update text
///
/// # Returns
///
/// Plain, HTML escaped text
pub fn clean(raw: &str) -> String {
    let stripped = MARKUP.replace_all(raw, "");
    html! { (&*stripped) }.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(clean("shipped the login page"), "shipped the login page");
    }

    #[test]
    fn test_strips_tags_keeps_text() {
        // Arrange
        let raw = "fixed <b>the</b> <a href=\"x\">thing</a>";

        // Act
        let result = clean(raw);

        // Assert
        assert_eq!(result, "fixed the thing");
    }

    #[test]
    fn test_script_tags_removed() {
        // Arrange
        let raw = "hi <script>alert(1)</script> there";

        // Act
        let result = clean(raw);

        // Assert
        assert!(!result.contains("<script"), "Script tag survived: {result}");
        assert!(!result.contains('<'));
        assert!(!result.contains('>'));
    }

    #[test]
    fn test_stray_angle_brackets_escaped() {
        // Arrange
        let raw = "a < b && c > d";

        // Act
        let result = clean(raw);

        // Assert
        assert_eq!(result, "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_unterminated_tag_escaped() {
        let result = clean("oops <img src=x onerror=alert(1)");

        assert!(!result.contains('<'));
        assert!(result.contains("&lt;img"));
    }

    #[test]
    fn test_comments_and_doctype_removed() {
        let result = clean("<!DOCTYPE html>a<!-- hidden -->b<?xml version=\"1.0\"?>c");

        assert_eq!(result, "abc");
    }

    #[test]
    fn test_unclosed_comment_swallows_rest() {
        assert_eq!(clean("keep<!-- never closed <b>"), "keep");
    }

    #[test]
    fn test_quotes_escaped() {
        assert_eq!(clean("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_existing_entities_shown_literally() {
        assert_eq!(clean("&lt;b&gt;"), "&amp;lt;b&amp;gt;");
    }
}

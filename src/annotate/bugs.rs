//! Issue tracker references such as `bug 123` or `Bug #456`.

use regex::Regex;
use std::sync::LazyLock;

use super::link_numbered;

/// Issue tracker page for a bug id; the id is appended as is.
pub const BUG_URL: &str = "http://bugzilla.mozilla.org/show_bug.cgi?id=";

/// Keyword and number must be separated by whitespace or `#`, so slugs
/// and URL paths like `debug1` are left alone.
static BUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(bug)(?:\s*#\s*|\s+)([0-9]+)").expect("bug pattern is valid")
});

/// Links bug references to the issue tracker.
///
/// Never fails and needs no lookup: the URL is built from the captured
/// number alone.
pub fn linkify(text: &str) -> String {
    link_numbered(&BUG, text, |id| format!("{BUG_URL}{id}"))
}

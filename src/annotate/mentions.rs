//! `@slug` mentions of known users.

use anyhow::{Context, Result};
use maud::html;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use crate::directory::{ProfileUrl, UserDirectory};

/// `@` at start of text or after anything but a word character, hyphen or
/// period, so `foo@bar` and `a.b@c` are not mentions.
static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\w\-.])@([\w-]+)").expect("mention pattern is valid"));

/// Returns distinct mentioned slugs in order of first appearance.
pub fn candidates(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    MENTION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|slug| seen.insert(*slug))
        .collect()
}

/// Links mentions of users that exist in the directory.
///
/// Each distinct slug is looked up once. A resolved slug has every
/// occurrence of `@slug` in the text replaced with a profile link; this is
/// a plain substring replacement, so it also hits `@slug` inside longer
/// mentions or earlier anchors. Unknown slugs are left as typed.
///
/// # Errors
///
/// Returns error if the directory lookup fails
pub fn linkify(
    text: &str,
    directory: &impl UserDirectory,
    profile_urls: &impl ProfileUrl,
) -> Result<String> {
    let mut formatted = text.to_string();

    for slug in candidates(text) {
        let user = directory
            .find_by_slug(slug)
            .with_context(|| format!("Failed to look up user @{slug}"))?;

        let Some(user) = user else {
            debug!(slug, "Mention does not match a known user");
            continue;
        };

        let at_slug = format!("@{slug}");
        let anchor = html! {
            a href=(profile_urls.profile_url(user.slug())) { (at_slug) }
        }
        .into_string();
        formatted = formatted.replace(&at_slug, &anchor);
        debug!(slug, "Linked mention");
    }

    Ok(formatted)
}

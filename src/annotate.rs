//! Token recognition passes over sanitized update text.
//!
//! Each pass takes the output of the previous one and rewrites the tokens
//! it recognizes into anchors. Tags are the exception: they are read from
//! the original text and rendered as a separate block.

pub mod bugs;
pub mod mentions;
pub mod pulls;
pub mod tags;

use maud::html;
use regex::{Captures, Regex};

/// Rewrites every `{word} #?{number}` match into an anchor.
///
/// The pattern must capture the keyword as group 1 and the digits as group
/// 2. Link text is the keyword in its original case, a space, then the
/// number.
fn link_numbered(pattern: &Regex, text: &str, href: impl Fn(&str) -> String) -> String {
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            let word = &caps[1];
            let number = &caps[2];
            html! { a href=(href(number)) { (word) " " (number) } }.into_string()
        })
        .into_owned()
}

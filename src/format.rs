//! Update formatting pipeline.

use anyhow::Result;
use maud::{Markup, PreEscaped};
use tracing::trace;

use crate::annotate::{bugs, mentions, pulls, tags};
use crate::directory::{Project, ProfileUrl, UserDirectory};
use crate::sanitize;

/// Renders raw update text into safe, annotated HTML.
///
/// Holds the user directory and profile URL builder the mention pass needs.
/// No state is kept between updates, so one formatter can be shared across
/// threads when its collaborators allow it.
#[derive(Debug, Clone)]
pub struct UpdateFormatter<D, P> {
    directory: D,
    profile_urls: P,
}

impl<D, P> UpdateFormatter<D, P>
where
    D: UserDirectory,
    P: ProfileUrl,
{
    /// Creates formatter over a user directory and profile URL builder.
    pub fn new(directory: D, profile_urls: P) -> Self {
        Self {
            directory,
            profile_urls,
        }
    }

    /// Formats one update.
    ///
    /// Sanitizes the text, then links bug references, mentions of known
    /// users and, when the project has a repository URL, pull request
    /// references. Tags are taken from the original text and appended as
    /// a block after the annotated body.
    ///
    /// # Arguments
    ///
    /// * `update`: Raw author supplied text
    /// * `project`: Project the update belongs to, if any
    ///
    /// # Returns
    ///
    /// Annotated HTML fragment
    ///
    /// # Errors
    ///
    /// Returns error if the user directory lookup fails
    pub fn format(&self, update: &str, project: Option<&Project>) -> Result<Markup> {
        let formatted = sanitize::clean(update);
        let formatted = bugs::linkify(&formatted);
        let formatted = mentions::linkify(&formatted, &self.directory, &self.profile_urls)?;
        let formatted = pulls::linkify(&formatted, project);

        let tags = tags::extract(update);
        trace!(count = tags.len(), "Extracted tags");

        let html = match tags::render(&tags) {
            Some(block) => format!("{} {}", formatted, block.into_string()),
            None => formatted,
        };

        Ok(PreEscaped(html))
    }
}

//! Pull request references such as `pull 45` or `PR #9`.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::link_numbered;
use crate::directory::Project;

/// Same separator rule as bug references; `/user/pr2bot/` must not match.
static PULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(pull|pr)(?:\s*#\s*|\s+)([0-9]+)").expect("pull pattern is valid")
});

/// Links pull request references to `{repo_url}/pull/{number}`.
///
/// Only active for an update attached to a project with a repository URL;
/// otherwise the text passes through unchanged.
pub fn linkify(text: &str, project: Option<&Project>) -> String {
    let Some(repo_url) = project.and_then(Project::repo_url) else {
        debug!("No repository URL, skipping pull request links");
        return text.to_string();
    };

    link_numbered(&PULL, text, |number| format!("{repo_url}/pull/{number}"))
}

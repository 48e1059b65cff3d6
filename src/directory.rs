//! Collaborators the formatter reads from: users, projects, profile URLs.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Known user, identified by a case sensitive slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    slug: String,
}

impl User {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Project an update may belong to.
///
/// The repository URL is used to build pull request links. A project
/// without one disables pull request annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    repo_url: Option<String>,
}

impl Project {
    pub fn new(repo_url: Option<String>) -> Self {
        Self { repo_url }
    }

    pub fn with_repo_url(repo_url: impl Into<String>) -> Self {
        Self::new(Some(repo_url.into()))
    }

    /// Returns repository URL when present and non-empty.
    pub fn repo_url(&self) -> Option<&str> {
        self.repo_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Read-only lookup of users by slug.
pub trait UserDirectory {
    /// Finds user by exact, case sensitive slug.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no such user exists
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be reached
    fn find_by_slug(&self, slug: &str) -> Result<Option<User>>;
}

/// Builds the profile page URL for a user slug.
pub trait ProfileUrl {
    fn profile_url(&self, slug: &str) -> String;
}

impl<F> ProfileUrl for F
where
    F: Fn(&str) -> String,
{
    fn profile_url(&self, slug: &str) -> String {
        self(slug)
    }
}

/// Profile URLs of the form `{prefix}{slug}/`.
#[derive(Debug, Clone)]
pub struct PrefixProfileUrl {
    prefix: String,
}

impl PrefixProfileUrl {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for PrefixProfileUrl {
    fn default() -> Self {
        Self::new("/user/")
    }
}

impl ProfileUrl for PrefixProfileUrl {
    fn profile_url(&self, slug: &str) -> String {
        format!("{}{}/", self.prefix, slug)
    }
}

/// In-memory user directory backed by a fixed set of slugs.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    slugs: HashSet<String>,
}

impl StaticDirectory {
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slugs: slugs.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses slug list, one slug per line.
    ///
    /// Surrounding whitespace is trimmed. Blank lines and lines starting
    /// with `#` are ignored.
    pub fn parse(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Loads slug list from file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read user list: {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    pub fn insert(&mut self, slug: impl Into<String>) {
        self.slugs.insert(slug.into());
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

impl UserDirectory for StaticDirectory {
    fn find_by_slug(&self, slug: &str) -> Result<Option<User>> {
        Ok(self.slugs.get(slug).map(|s| User::new(s.as_str())))
    }
}

//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::directory::{PrefixProfileUrl, Project, StaticDirectory};

/// Command line configuration for Standup.
#[derive(Debug, Clone, Parser)]
#[command(name = "standup", version, about, long_about = None)]
pub struct Config {
    /// Update text file, or "-" for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Project repository URL, enables pull request links
    #[arg(long)]
    pub repo_url: Option<String>,

    /// File listing known user slugs, one per line
    #[arg(long)]
    pub users: Option<PathBuf>,

    /// Known user slug (repeatable)
    #[arg(long = "user", value_name = "SLUG")]
    pub extra_users: Vec<String>,

    /// Prefix for profile links
    #[arg(long, default_value = "/user/")]
    pub profile_prefix: String,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input or user list file does not exist, or the
    /// repository URL is blank.
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() && !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if let Some(users) = self.users.as_ref().filter(|path| !path.exists()) {
            bail!("User list does not exist: {}", users.display());
        }

        if self.repo_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            bail!("Repository URL must not be blank");
        }

        Ok(())
    }

    /// Returns project for the update when a repository URL is configured.
    pub fn project(&self) -> Option<Project> {
        self.repo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(Project::with_repo_url)
    }

    /// Builds user directory from the user list file and `--user` flags.
    ///
    /// # Errors
    ///
    /// Returns error if the user list cannot be read
    pub fn directory(&self) -> Result<StaticDirectory> {
        let mut directory = match &self.users {
            Some(path) => StaticDirectory::load(path)?,
            None => StaticDirectory::default(),
        };
        for slug in &self.extra_users {
            directory.insert(slug.as_str());
        }
        Ok(directory)
    }

    pub fn profile_urls(&self) -> PrefixProfileUrl {
        PrefixProfileUrl::new(self.profile_prefix.as_str())
    }

    /// Reads update text from the input file or stdin.
    ///
    /// # Errors
    ///
    /// Returns error if the input cannot be read
    pub fn read_update(&self) -> Result<String> {
        if self.reads_stdin() {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read update from stdin")?;
            return Ok(text);
        }

        fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read update: {}", self.input.display()))
    }
}

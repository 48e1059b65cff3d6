//! Safe, annotated HTML rendering for status updates.

pub mod annotate;
mod config;
pub mod directory;
mod format;
pub mod sanitize;
mod util;

pub use annotate::tags::Tag;
pub use config::Config;
pub use directory::{PrefixProfileUrl, ProfileUrl, Project, StaticDirectory, User, UserDirectory};
pub use format::UpdateFormatter;
pub use util::{DEFAULT_DATE_FORMAT, dateformat, ordinal_suffix};

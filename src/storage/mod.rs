//! Storage layer for Quill
//!
//! Read-only filesystem access: configuration files and the content
//! directory. The content index never writes; only `quill init`
//! scaffolds files.

mod config;
mod content;
mod site;

pub use config::{Config, ConfigError, ContentConfig, GlobalConfig, SiteConfig, SITE_MANIFEST};
pub use content::ContentStore;
pub use site::{Site, SiteError};

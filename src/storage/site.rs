//! Site management
//!
//! Handles site initialization and provides access to the content
//! store and the formula catalogue.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::{Config, SITE_MANIFEST};
use super::content::ContentStore;
use crate::domain::{Catalog, TransitionCurve};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Not in a quill site. Run 'quill init' first.")]
    NotInSite,
}

/// A quill site: a root directory marked by `quill.toml`.
pub struct Site {
    root: PathBuf,
    config: Config,
}

impl Site {
    /// Opens an existing site at the given path.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(SITE_MANIFEST).is_file() {
            return Err(SiteError::NotInSite.into());
        }

        let config = Config::for_site(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the site at the current directory or a parent.
    pub fn open_current() -> Result<Self> {
        let root = Config::find_site_root().ok_or(SiteError::NotInSite)?;

        Self::open(root)
    }

    /// Initializes a new site at the given path.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create site directory: {}", root.display()))?;

        let manifest_path = root.join(SITE_MANIFEST);
        if !manifest_path.exists() {
            let default_manifest = r#"# Quill site configuration

title = "A Research Notebook"

[content]
# Directory of blog posts, relative to this file
dir = "content/blog"
# Content file extension, without the dot
extension = "md"
# Reading speed for the reading-time estimate (default 200)
# words_per_minute = 200

[curve]
# Display parameters for the 3-SAT phase-transition chart
midpoint = 4.267
steepness = 4.5

# Extra formulas for 'quill formula' and the explorer:
# [[formula]]
# name = "My formula"
# description = ""
# num_vars = 2
# clauses = [[1, 2], [-1, -2]]
"#;
            fs::write(&manifest_path, default_manifest)
                .with_context(|| format!("Failed to write config: {}", manifest_path.display()))?;
        }

        let site = Self::open(root)?;

        let content_dir = site.content_dir();
        fs::create_dir_all(&content_dir).with_context(|| {
            format!(
                "Failed to create content directory: {}",
                content_dir.display()
            )
        })?;

        Ok(site)
    }

    /// Returns the site root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the resolved content directory.
    pub fn content_dir(&self) -> PathBuf {
        self.config.content_dir()
    }

    /// Returns the content store for this site.
    pub fn content_store(&self) -> ContentStore {
        ContentStore::new(
            self.content_dir(),
            &self.config.site.content.extension,
            self.config.words_per_minute(),
        )
    }

    /// Returns the formula catalogue: built-ins plus site extras.
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::builtin();
        catalog.extend(self.config.site.formulas.iter().cloned());
        catalog
    }

    /// Returns the configured transition curve.
    pub fn curve(&self) -> TransitionCurve {
        self.config.site.curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_structure() {
        let dir = TempDir::new().unwrap();
        let site = Site::init(dir.path()).unwrap();

        assert!(site.root().join(SITE_MANIFEST).is_file());
        assert!(site.content_dir().is_dir());
    }

    #[test]
    fn init_is_idempotent() {
        let dir = TempDir::new().unwrap();

        Site::init(dir.path()).unwrap();
        Site::init(dir.path()).unwrap(); // Should not fail

        assert!(dir.path().join(SITE_MANIFEST).is_file());
    }

    #[test]
    fn init_preserves_existing_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITE_MANIFEST), "title = \"Mine\"\n").unwrap();

        let site = Site::init(dir.path()).unwrap();
        assert_eq!(site.config().site.title, "Mine");
    }

    #[test]
    fn open_non_site_fails() {
        let dir = TempDir::new().unwrap();
        assert!(Site::open(dir.path()).is_err());
    }

    #[test]
    fn scaffolded_manifest_parses_with_defaults() {
        let dir = TempDir::new().unwrap();
        let site = Site::init(dir.path()).unwrap();

        assert_eq!(site.config().site.title, "A Research Notebook");
        assert_eq!(site.config().site.curve, TransitionCurve::default());
        assert_eq!(site.catalog().len(), 3);
    }

    #[test]
    fn catalog_appends_config_formulas() {
        let dir = TempDir::new().unwrap();
        let manifest = r#"
[[formula]]
name = "Tiny"
num_vars = 2
clauses = [[1, 2]]
"#;
        fs::write(dir.path().join(SITE_MANIFEST), manifest).unwrap();

        let site = Site::open(dir.path()).unwrap();
        let catalog = site.catalog();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.find("Tiny").unwrap().formula.clauses().len(), 1);
    }
}

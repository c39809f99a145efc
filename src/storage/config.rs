//! Configuration handling for Quill
//!
//! Site configuration lives in `quill.toml` at the site root; user
//! preferences live in the platform config dir
//! (e.g. `~/.config/quill/config.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{FormulaEntry, TransitionCurve, DEFAULT_WORDS_PER_MINUTE};

/// File name that marks a directory as a quill site root.
pub const SITE_MANIFEST: &str = "quill.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Where posts live and how they are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Post directory, relative to the site root.
    pub dir: PathBuf,

    /// Content file extension, without the dot.
    pub extension: String,

    /// Reading speed for the reading-time estimate.
    pub words_per_minute: Option<u32>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content/blog"),
            extension: "md".to_string(),
            words_per_minute: None,
        }
    }
}

/// Site-level configuration from `quill.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown in the explorer header.
    pub title: String,

    pub content: ContentConfig,

    /// Phase-transition chart parameters.
    pub curve: TransitionCurve,

    /// Extra formulas appended to the built-in catalogue.
    #[serde(rename = "formula")]
    pub formulas: Vec<FormulaEntry>,
}

/// Global user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Personal reading speed, used when the site doesn't set one.
    pub words_per_minute: Option<u32>,
}

/// Combined configuration (global + site).
#[derive(Debug, Clone)]
pub struct Config {
    pub site: SiteConfig,
    pub global: GlobalConfig,
    pub site_root: PathBuf,
}

impl Config {
    /// Loads configuration for a specific site root.
    pub fn for_site(site_root: &Path) -> Result<Self> {
        let global = Self::load_global()?;
        let site = Self::load_site_config(site_root)?;

        Ok(Self {
            site,
            global,
            site_root: site_root.to_path_buf(),
        })
    }

    /// Returns the global config directory.
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "quill", "quill-cli").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration, defaulting when absent.
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads site configuration from a specific root.
    fn load_site_config(site_root: &Path) -> Result<SiteConfig> {
        let config_path = site_root.join(SITE_MANIFEST);

        if !config_path.exists() {
            return Ok(SiteConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read site config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse site config")
    }

    /// Finds the site root by looking for `quill.toml` upward from
    /// the current directory.
    pub fn find_site_root() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            if current.join(SITE_MANIFEST).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// The content directory, resolved against the site root.
    pub fn content_dir(&self) -> PathBuf {
        self.site_root.join(&self.site.content.dir)
    }

    /// Effective reading speed: site setting, then the user's global
    /// preference, then the default.
    pub fn words_per_minute(&self) -> u32 {
        self.site
            .content
            .words_per_minute
            .or(self.global.words_per_minute)
            .unwrap_or(DEFAULT_WORDS_PER_MINUTE)
    }
}

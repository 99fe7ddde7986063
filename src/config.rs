//! Site configuration.
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. Stock defaults ([`SiteConfig::default`])
//! 2. `config.toml` in the site root (optional, sparse)
//! 3. Command-line flags (applied by the binary)
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_dir = "content"     # Standalone pages (*.md)
//! posts_dir = "posts"         # Posts, relative to content_dir
//! output_dir = "public"       # Generated site
//! template = "template.html"  # The single HTML template
//! index_page = "index.md"     # Page that receives the post list
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Build Configuration
//!
//! [`SiteConfig`] mirrors the file. Before a build it is resolved into a
//! [`BuildConfig`]: paths are anchored at the site root and the copyright
//! year is fixed. The build only ever borrows a `BuildConfig`, so every page
//! in a run sees the same settings.

use chrono::Datelike;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; a config file only lists what it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding standalone pages, relative to the site root.
    pub content_dir: String,
    /// Posts directory name, relative to `content_dir`. Also names the
    /// output subdirectory posts are written to.
    pub posts_dir: String,
    /// Output directory, relative to the site root.
    pub output_dir: String,
    /// Template file, relative to the site root.
    pub template: String,
    /// File name of the page that receives the "Recent Posts" list.
    pub index_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            posts_dir: "posts".to_string(),
            output_dir: "public".to_string(),
            template: "template.html".to_string(),
            index_page: "index.md".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("content_dir", &self.content_dir),
            ("posts_dir", &self.posts_dir),
            ("output_dir", &self.output_dir),
            ("template", &self.template),
            ("index_page", &self.index_page),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        if !is_single_component(&self.posts_dir) {
            return Err(ConfigError::Validation(
                "posts_dir must be a single directory name".into(),
            ));
        }
        if !crate::naming::is_markdown(&self.index_page) || !is_single_component(&self.index_page)
        {
            return Err(ConfigError::Validation(
                "index_page must be a .md file name".into(),
            ));
        }
        Ok(())
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Load config from `config.toml` in the given directory.
///
/// Returns the stock defaults when the file doesn't exist. A file that exists
/// but fails to parse or validate is an error.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Everything a build needs, resolved against the site root.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub content_dir: PathBuf,
    /// Subdirectory name shared by the posts source and output directories.
    pub posts_dir: String,
    pub output_dir: PathBuf,
    pub template_path: PathBuf,
    pub index_page: String,
    /// Calendar year substituted for `{{year}}`.
    pub year: i32,
}

impl BuildConfig {
    /// Anchor `site`'s relative paths at `root`. Absolute paths are kept.
    pub fn resolve(root: &Path, site: &SiteConfig, year: i32) -> Self {
        Self {
            content_dir: root.join(&site.content_dir),
            posts_dir: site.posts_dir.clone(),
            output_dir: root.join(&site.output_dir),
            template_path: root.join(&site.template),
            index_page: site.index_page.clone(),
            year,
        }
    }

    /// Where post sources live.
    pub fn posts_source_dir(&self) -> PathBuf {
        self.content_dir.join(&self.posts_dir)
    }

    /// Where rendered posts are written.
    pub fn posts_output_dir(&self) -> PathBuf {
        self.output_dir.join(&self.posts_dir)
    }
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Blog Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Paths are relative to the directory
# holding this file. Unknown keys will cause an error.

# Directory with standalone pages. Every *.md file directly inside it
# becomes <output_dir>/<name>.html. Subdirectories are not traversed.
content_dir = "content"

# Directory with blog posts, inside content_dir. Every *.md file becomes
# <output_dir>/<posts_dir>/<name>.html, newest first in the post list.
posts_dir = "posts"

# Where the generated site is written.
output_dir = "public"

# HTML template used for every page. Placeholders:
#   {{title}} {{subtitle}} {{description}} {{content}} {{year}}
# and an optional {{#if subtitle}}...{{/if}} block.
template = "template.html"

# The page that gets a "Recent Posts" list appended to its content.
index_page = "index.md"
"##
}

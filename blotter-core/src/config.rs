use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::markdown::MarkdownOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prepended verbatim to every entry slug, e.g. `/blog/` or `https://example.com/`.
    pub link_prefix: String,
    /// Candidate comment files, matched against each entry's slug.
    pub comment_files: Vec<PathBuf>,
    /// Extensions used when an entry says `format: markdown`.
    pub markdown: MarkdownOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link_prefix: "/".to_string(),
            comment_files: Vec::new(),
            markdown: MarkdownOptions::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    link_prefix: Option<String>,
    comment_files: Option<Vec<PathBuf>>,
    /// Optional table:
    /// [markdown]
    /// tables = false
    markdown: Option<MarkdownOptions>,
}

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A config file that cannot be read or parsed is reported and ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            warn!("ignoring config file: {error:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    /// Load config from an explicit path. Unlike [`Config::load`], any problem
    /// with the file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file_config =
            Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let defaults = Self::default();
        let config = Self {
            link_prefix: file_config.link_prefix.unwrap_or(defaults.link_prefix),
            comment_files: file_config.comment_files.unwrap_or(defaults.comment_files),
            markdown: file_config.markdown.unwrap_or(defaults.markdown),
        };
        debug!(?config, "config loaded");
        config
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("blotter")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("blotter").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

use crate::config::Config;
use std::path::PathBuf;

/// Site-wide inputs every entry needs: where links point and which comment
/// files exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContext {
    pub link_prefix: String,
    pub comment_paths: Vec<PathBuf>,
}

impl SiteContext {
    pub fn new(link_prefix: impl Into<String>) -> Self {
        Self {
            link_prefix: link_prefix.into(),
            comment_paths: Vec::new(),
        }
    }

    pub fn with_comments<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.comment_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Comment files whose path contains `slug`, in the order they were given.
    pub fn comments_for<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a PathBuf> + 'a {
        self.comment_paths
            .iter()
            .filter(move |path| path.to_string_lossy().contains(slug))
    }
}

impl From<&Config> for SiteContext {
    fn from(config: &Config) -> Self {
        SiteContext::new(config.link_prefix.clone()).with_comments(config.comment_files.clone())
    }
}

use crate::comment::Comment;
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use std::path::PathBuf;

/// A single blog post.
///
/// `month_name`, `month` and `year` are computed from `date` and only exist to
/// make archive pages easier to build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    /// Source file on disk.
    pub path: PathBuf,
    /// Lowercase, sorted. Duplicates are kept.
    pub tags: Vec<String>,
    /// Body, already expanded to HTML when the entry was Markdown.
    pub content: String,
    pub link: String,
    pub date: NaiveDateTime,
    pub comments: Vec<Comment>,
    pub month_name: String,
    pub month: String,
    pub year: String,
}

impl Entry {
    /// Sets `date` and the archive fields derived from it.
    pub(crate) fn set_date(&mut self, date: NaiveDateTime) {
        self.date = date;
        self.month_name = date.format("%B").to_string();
        self.month = format!("{:02}", date.month());
        self.year = date.year().to_string();
    }

    /// Appends normalized tags from a comma-separated list, then re-sorts the
    /// whole list.
    pub(crate) fn add_tags(&mut self, list: &str) {
        self.tags.extend(
            list.split(',')
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty()),
        );
        self.tags.sort();
    }
}

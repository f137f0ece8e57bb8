use crate::error::BoxError;
use crate::header_file::{HeaderFile, HeaderSource, Headers};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A reader comment attached to an entry.
///
/// The core does not interpret comments; it only keeps what the comment file
/// contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub path: PathBuf,
    pub headers: Headers,
    pub body: String,
}

impl Comment {
    /// First value of a header, if present.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Turns a comment file into a [`Comment`].
pub trait CommentParser {
    fn parse_comment(&self, path: &Path) -> Result<Comment, BoxError>;
}

/// Reads comments with the same header-file layout used by entries, without
/// validating the keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderFileComments<R = HeaderFile> {
    reader: R,
}

impl<R: HeaderSource> HeaderFileComments<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: HeaderSource> CommentParser for HeaderFileComments<R> {
    fn parse_comment(&self, path: &Path) -> Result<Comment, BoxError> {
        let headers = self.reader.headers(path)?;
        let body = self.reader.body(path)?;
        Ok(Comment {
            path: path.to_path_buf(),
            headers,
            body,
        })
    }
}

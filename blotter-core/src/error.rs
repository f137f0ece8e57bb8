use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for collaborators that are not tied to a single failure kind.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can stop an entry from being built.
///
/// Each variant names the file it came from so a site build can report which
/// entry to fix.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid date `{value}` in {}, expected DD/MM/YYYY HH:MM", path.display())]
    Date {
        path: PathBuf,
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("unknown entry-format `{format}` in {}", path.display())]
    UnrecognizedFormat { path: PathBuf, format: String },

    #[error("unknown header-key `{key}` in file {}", path.display())]
    UnknownHeader { key: String, path: PathBuf },

    #[error("parsing comment {}", path.display())]
    Comment {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl EntryError {
    /// The file the error points at. For comment failures this is the
    /// comment file, not the entry.
    pub fn path(&self) -> &Path {
        match self {
            EntryError::Read { path, .. }
            | EntryError::Date { path, .. }
            | EntryError::UnrecognizedFormat { path, .. }
            | EntryError::UnknownHeader { path, .. }
            | EntryError::Comment { path, .. } => path,
        }
    }
}

pub mod comment;
pub mod config;
pub mod dates;
pub mod entries;
pub mod entry;
pub mod error;
pub mod header;
pub mod header_file;
pub mod markdown;
pub mod parse_entry;
pub mod site;
pub mod slug;


pub use comment::{Comment, CommentParser, HeaderFileComments};
pub use config::Config;
pub use entries::{ParseReport, parse_entries};
pub use entry::Entry;
pub use error::EntryError;
pub use header_file::{HeaderFile, HeaderSource};
pub use markdown::{CommonMark, MarkdownOptions, MarkdownRenderer};
pub use parse_entry::{EntryParser, parse_entry};
pub use site::SiteContext;

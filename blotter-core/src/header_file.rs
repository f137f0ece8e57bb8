//! Reads flat files made of a `key: value` header block followed by a body.
//!
//! ```text
//! title: Hello, World!
//! date: 04/07/2023 10:30
//! tags: rust, web
//!
//! Body text starts after the first empty line.
//! ```

use std::fs;
use std::io;
use std::path::Path;

/// Ordered header pairs as they appear in the file. Repeated keys are kept.
pub type Headers = Vec<(String, String)>;

/// Source of header/body pairs for a file path.
///
/// The parser only talks to this trait, so tests can swap the filesystem for
/// an in-memory fake.
pub trait HeaderSource {
    fn headers(&self, path: &Path) -> io::Result<Headers>;
    fn body(&self, path: &Path) -> io::Result<String>;
}

/// Reads header files straight from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderFile;

impl HeaderSource for HeaderFile {
    fn headers(&self, path: &Path) -> io::Result<Headers> {
        let content = fs::read_to_string(path)?;
        Ok(split_header_file(&content).0)
    }

    fn body(&self, path: &Path) -> io::Result<String> {
        let content = fs::read_to_string(path)?;
        Ok(split_header_file(&content).1.to_string())
    }
}

/// Splits the content of a header file into its headers and its body.
///
/// The header block ends at the first empty line. Keys are trimmed and
/// lowercased, values trimmed; header lines without a `:` are ignored.
pub fn split_header_file(content: &str) -> (Headers, &str) {
    let mut headers = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        let (line, next) = match rest.find('\n') {
            Some(pos) => (&rest[..pos], &rest[pos + 1..]),
            None => (rest, ""),
        };
        rest = next;

        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return (headers, rest);
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_lowercase(), value.trim().to_string()));
        }
    }

    (headers, "")
}

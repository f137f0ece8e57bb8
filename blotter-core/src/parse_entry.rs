//! Builds an [`Entry`] from a header file on disk.

use crate::comment::{CommentParser, HeaderFileComments};
use crate::dates::parse_entry_date;
use crate::entry::Entry;
use crate::error::EntryError;
use crate::header::{BodyFormat, HeaderKey};
use crate::header_file::{HeaderFile, HeaderSource};
use crate::markdown::{CommonMark, MarkdownOptions, MarkdownRenderer};
use crate::site::SiteContext;
use crate::slug::{link_for, slugify};
use std::path::Path;
use tracing::{debug, trace};

/// Parses entries using three collaborators: a header-file reader, a Markdown
/// renderer and a comment parser.
///
/// The parser holds no state between calls; the same instance can parse any
/// number of files.
#[derive(Debug, Clone, Default)]
pub struct EntryParser<H = HeaderFile, M = CommonMark, C = HeaderFileComments> {
    reader: H,
    markdown: M,
    comments: C,
}

impl EntryParser {
    /// Reads entries and comments from disk, rendering Markdown with `options`.
    pub fn on_disk(options: MarkdownOptions) -> Self {
        Self::new(
            HeaderFile,
            CommonMark::new(options),
            HeaderFileComments::new(HeaderFile),
        )
    }
}

impl<H, M, C> EntryParser<H, M, C>
where
    H: HeaderSource,
    M: MarkdownRenderer,
    C: CommentParser,
{
    pub fn new(reader: H, markdown: M, comments: C) -> Self {
        Self {
            reader,
            markdown,
            comments,
        }
    }

    /// Parses the entry stored at `path`.
    ///
    /// Headers are applied in file order:
    /// - `date` must be `DD/MM/YYYY HH:MM`.
    /// - `title` and `subject` both set the title; the last one wins.
    /// - `format` may only be `markdown`.
    /// - `tags` is a comma-separated list, normalized to lowercase.
    ///
    /// Any other header key is an error. Comment files in `site` whose path
    /// contains the entry's slug are parsed and attached in the order given.
    pub fn parse(&self, path: &Path, site: &SiteContext) -> Result<Entry, EntryError> {
        let read_error = |source| EntryError::Read {
            path: path.to_path_buf(),
            source,
        };
        let headers = self.reader.headers(path).map_err(read_error)?;
        let mut body = self.reader.body(path).map_err(read_error)?;

        let mut entry = Entry::default();
        let mut format = BodyFormat::default();

        for (key, value) in &headers {
            trace!(path = %path.display(), key = %key, "header");
            let Some(header) = HeaderKey::lookup(key) else {
                return Err(EntryError::UnknownHeader {
                    key: key.clone(),
                    path: path.to_path_buf(),
                });
            };
            match header {
                HeaderKey::Date => {
                    let date = parse_entry_date(value).map_err(|source| EntryError::Date {
                        path: path.to_path_buf(),
                        value: value.clone(),
                        source,
                    })?;
                    entry.set_date(date);
                }
                HeaderKey::Title | HeaderKey::Subject => entry.title = value.clone(),
                HeaderKey::Format => {
                    format = BodyFormat::from_header(value).ok_or_else(|| {
                        EntryError::UnrecognizedFormat {
                            path: path.to_path_buf(),
                            format: value.clone(),
                        }
                    })?;
                }
                HeaderKey::Tags => entry.add_tags(value),
            }
        }

        if format == BodyFormat::Markdown {
            body = self.markdown.render(&body);
        }

        entry.path = path.to_path_buf();
        entry.content = body;

        let slug = slugify(&entry.title);
        entry.link = link_for(&site.link_prefix, &slug);

        for comment_path in site.comments_for(&slug) {
            let comment =
                self.comments
                    .parse_comment(comment_path)
                    .map_err(|source| EntryError::Comment {
                        path: comment_path.clone(),
                        source,
                    })?;
            entry.comments.push(comment);
        }

        debug!(
            path = %path.display(),
            link = %entry.link,
            tags = entry.tags.len(),
            comments = entry.comments.len(),
            "parsed entry"
        );
        Ok(entry)
    }
}

/// Parses one entry with the filesystem reader, default Markdown options and
/// header-file comments.
pub fn parse_entry(path: &Path, site: &SiteContext) -> Result<Entry, EntryError> {
    EntryParser::on_disk(MarkdownOptions::default()).parse(path, site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::Comment;
    use crate::error::BoxError;
    use crate::header_file::{Headers, split_header_file};
    use crate::tests::common::write_file;
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// In-memory header files keyed by path.
    #[derive(Default)]
    struct FakeFiles(HashMap<PathBuf, String>);

    impl FakeFiles {
        fn with(mut self, path: &str, content: &str) -> Self {
            self.0.insert(PathBuf::from(path), content.to_string());
            self
        }

        fn get(&self, path: &Path) -> io::Result<&str> {
            self.0
                .get(path)
                .map(String::as_str)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    impl HeaderSource for FakeFiles {
        fn headers(&self, path: &Path) -> io::Result<Headers> {
            Ok(split_header_file(self.get(path)?).0)
        }

        fn body(&self, path: &Path) -> io::Result<String> {
            Ok(split_header_file(self.get(path)?).1.to_string())
        }
    }

    /// Wraps the body so tests can see the renderer ran.
    struct FakeMarkdown;

    impl MarkdownRenderer for FakeMarkdown {
        fn render(&self, raw: &str) -> String {
            format!("<md>{raw}</md>")
        }
    }

    /// Builds a comment from the path alone; paths containing `broken` fail.
    struct FakeComments;

    impl CommentParser for FakeComments {
        fn parse_comment(&self, path: &Path) -> Result<Comment, BoxError> {
            if path.to_string_lossy().contains("broken") {
                return Err("unreadable comment".into());
            }
            Ok(Comment {
                path: path.to_path_buf(),
                headers: Vec::new(),
                body: String::new(),
            })
        }
    }

    fn parser(files: FakeFiles) -> EntryParser<FakeFiles, FakeMarkdown, FakeComments> {
        EntryParser::new(files, FakeMarkdown, FakeComments)
    }

    fn parse_one(content: &str) -> Result<Entry, EntryError> {
        let files = FakeFiles::default().with("post.txt", content);
        parser(files).parse(Path::new("post.txt"), &SiteContext::new("/blog/"))
    }

    #[test]
    fn parses_all_known_headers() {
        let entry = parse_one(
            "title: Hello, World!\ndate: 04/07/2023 10:30\ntags: Go, WEB , api\n\n<p>Hi</p>\n",
        )
        .unwrap();
        assert_eq!(entry.title, "Hello, World!");
        assert_eq!(entry.path, PathBuf::from("post.txt"));
        assert_eq!(entry.tags, vec!["api", "go", "web"]);
        assert_eq!(entry.content, "<p>Hi</p>\n");
        assert_eq!(entry.link, "/blog/hello__world_.html");
        assert_eq!(entry.month_name, "July");
        assert_eq!(entry.month, "07");
        assert_eq!(entry.year, "2023");
        assert!(entry.comments.is_empty());
    }

    #[test]
    fn subject_is_an_alias_for_title() {
        let entry = parse_one("subject: Via subject\n\nbody").unwrap();
        assert_eq!(entry.title, "Via subject");
        assert_eq!(entry.link, "/blog/via_subject.html");
    }

    #[test]
    fn last_title_wins() {
        let entry = parse_one("title: First\nsubject: Second\n\nbody").unwrap();
        assert_eq!(entry.title, "Second");
    }

    #[test]
    fn entry_without_headers_still_parses() {
        let entry = parse_one("\nJust a body").unwrap();
        assert_eq!(entry.title, "");
        assert_eq!(entry.link, "/blog/.html");
        assert_eq!(entry.content, "Just a body");
        assert!(entry.year.is_empty());
    }

    #[test]
    fn unknown_header_names_key_and_file() {
        let err = parse_one("title: x\nauthor: me\n\nbody").unwrap_err();
        match &err {
            EntryError::UnknownHeader { key, path } => {
                assert_eq!(key, "author");
                assert_eq!(path, &PathBuf::from("post.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("author"));
        assert!(message.contains("post.txt"));
    }

    #[test]
    fn malformed_date_fails() {
        let err = parse_one("date: 2023-07-04\n\nbody").unwrap_err();
        assert!(matches!(err, EntryError::Date { ref value, .. } if value == "2023-07-04"));
    }

    #[test]
    fn impossible_date_keeps_chrono_error_as_source() {
        let err = parse_one("date: 30/02/2023 10:30\n\nbody").unwrap_err();
        assert!(matches!(err, EntryError::Date { source: Some(_), .. }));
    }

    #[test]
    fn markdown_format_renders_body() {
        let entry = parse_one("format: markdown\n\n**bold**").unwrap();
        assert_eq!(entry.content, "<md>**bold**</md>");
    }

    #[test]
    fn missing_format_passes_body_through() {
        let entry = parse_one("title: x\n\n**bold**").unwrap();
        assert_eq!(entry.content, "**bold**");
    }

    #[test]
    fn unsupported_format_fails() {
        let err = parse_one("format: textile\n\nbody").unwrap_err();
        assert!(matches!(err, EntryError::UnrecognizedFormat { ref format, .. } if format == "textile"));
    }

    #[test]
    fn format_is_case_sensitive() {
        let err = parse_one("format: Markdown\n\nbody").unwrap_err();
        assert!(matches!(err, EntryError::UnrecognizedFormat { .. }));
    }

    #[test]
    fn repeated_tags_headers_accumulate() {
        let entry = parse_one("tags: zeta, beta\ntags: Alpha, beta\n\nbody").unwrap();
        assert_eq!(entry.tags, vec!["alpha", "beta", "beta", "zeta"]);
    }

    #[test]
    fn unreadable_entry_is_a_read_error() {
        let err = parser(FakeFiles::default())
            .parse(Path::new("missing.txt"), &SiteContext::new("/"))
            .unwrap_err();
        assert!(matches!(err, EntryError::Read { .. }));
        assert_eq!(err.path(), &PathBuf::from("missing.txt"));
    }

    #[test]
    fn matching_comment_is_attached() {
        let files = FakeFiles::default().with("post.txt", "title: Hello\n\nbody");
        let site = SiteContext::new("/").with_comments([
            "comments/unrelated.html.1",
            "comments/hello.html.1",
        ]);
        let entry = parser(files).parse(Path::new("post.txt"), &site).unwrap();
        assert_eq!(entry.comments.len(), 1);
        assert_eq!(entry.comments[0].path, PathBuf::from("comments/hello.html.1"));
    }

    #[test]
    fn comments_keep_input_order() {
        let files = FakeFiles::default().with("post.txt", "title: Hello\n\nbody");
        let site = SiteContext::new("/").with_comments([
            "comments/hello.html.3",
            "comments/hello.html.1",
            "comments/hello.html.2",
        ]);
        let entry = parser(files).parse(Path::new("post.txt"), &site).unwrap();
        let order: Vec<_> = entry.comments.iter().map(|c| c.path.clone()).collect();
        assert_eq!(
            order,
            vec![
                PathBuf::from("comments/hello.html.3"),
                PathBuf::from("comments/hello.html.1"),
                PathBuf::from("comments/hello.html.2"),
            ]
        );
    }

    #[test]
    fn no_matching_comment_leaves_comments_empty() {
        let files = FakeFiles::default().with("post.txt", "title: Hello\n\nbody");
        let site = SiteContext::new("/").with_comments(["comments/bye.html.1"]);
        let entry = parser(files).parse(Path::new("post.txt"), &site).unwrap();
        assert!(entry.comments.is_empty());
    }

    #[test]
    fn broken_comment_aborts_the_entry() {
        let files = FakeFiles::default().with("post.txt", "title: Hello\n\nbody");
        let site = SiteContext::new("/").with_comments(["broken/hello.html.1"]);
        let err = parser(files).parse(Path::new("post.txt"), &site).unwrap_err();
        match err {
            EntryError::Comment { path, source } => {
                assert_eq!(path, PathBuf::from("broken/hello.html.1"));
                assert_eq!(source.to_string(), "unreadable comment");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parsing_twice_gives_equal_entries() {
        let files = FakeFiles::default().with(
            "post.txt",
            "title: Same\ntags: b, a\nformat: markdown\n\ntext",
        );
        let site = SiteContext::new("/").with_comments(["c/same.html.2", "c/same.html.1"]);
        let parser = parser(files);
        let first = parser.parse(Path::new("post.txt"), &site).unwrap();
        let second = parser.parse(Path::new("post.txt"), &site).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn parses_real_files_with_default_collaborators() {
        let tmp = tempdir().unwrap();
        let post = write_file(
            tmp.path(),
            "posts/first.txt",
            "Title: My First Post\nDate: 15/08/2025 12:34\nFormat: markdown\nTags: Rust\n\n**bold** move\n",
        );
        let comment = write_file(
            tmp.path(),
            "comments/my_first_post.html.1",
            "name: Ada\n\nWelcome!\n",
        );
        write_file(tmp.path(), "comments/another.html.1", "name: Bob\n\nHi\n");

        let site = SiteContext::new("/")
            .with_comments([comment.clone(), tmp.path().join("comments/another.html.1")]);
        let entry = parse_entry(&post, &site).unwrap();

        assert_eq!(entry.title, "My First Post");
        assert_eq!(entry.link, "/my_first_post.html");
        assert_eq!(entry.tags, vec!["rust"]);
        assert!(entry.content.contains("<strong>bold</strong>"));
        assert_eq!(entry.month_name, "August");
        assert_eq!(entry.comments.len(), 1);
        assert_eq!(entry.comments[0].path, comment);
        assert_eq!(entry.comments[0].header("name"), Some("Ada"));
        assert_eq!(entry.comments[0].body, "Welcome!\n");
    }

    #[test]
    fn missing_file_on_disk_is_a_read_error() {
        let tmp = tempdir().unwrap();
        let err = parse_entry(&tmp.path().join("nope.txt"), &SiteContext::new("/")).unwrap_err();
        assert!(matches!(err, EntryError::Read { .. }));
    }
}

use crate::comment::CommentParser;
use crate::entry::Entry;
use crate::error::EntryError;
use crate::header_file::HeaderSource;
use crate::markdown::MarkdownRenderer;
use crate::parse_entry::EntryParser;
use crate::site::SiteContext;
use std::path::PathBuf;
use tracing::warn;

/// The result of parsing a batch of entry files.
///
/// Failed files do not stop the batch; they end up in `errors` and the caller
/// decides whether that aborts the build.
#[derive(Debug, Default)]
pub struct ParseReport {
    pub entries: Vec<Entry>,
    pub errors: Vec<EntryError>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses every path in order. Successful entries keep the input order.
pub fn parse_entries<H, M, C, I>(
    parser: &EntryParser<H, M, C>,
    paths: I,
    site: &SiteContext,
) -> ParseReport
where
    H: HeaderSource,
    M: MarkdownRenderer,
    C: CommentParser,
    I: IntoIterator<Item = PathBuf>,
{
    let mut report = ParseReport::default();
    for path in paths {
        match parser.parse(&path, site) {
            Ok(entry) => report.entries.push(entry),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping entry");
                report.errors.push(error);
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::MarkdownOptions;
    use crate::tests::common::write_file;
    use tempfile::tempdir;

    #[test]
    fn collects_entries_and_errors() {
        let tmp = tempdir().unwrap();
        let good = write_file(tmp.path(), "a.txt", "title: A\n\nbody");
        let bad = write_file(tmp.path(), "b.txt", "title: B\nmood: odd\n\nbody");
        let also_good = write_file(tmp.path(), "c.txt", "title: C\n\nbody");

        let report = parse_entries(
            &EntryParser::on_disk(MarkdownOptions::default()),
            [good, bad.clone(), also_good],
            &SiteContext::new("/"),
        );

        assert!(!report.is_clean());
        let titles: Vec<_> = report.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path(), &bad);
    }

    #[test]
    fn empty_batch_is_clean() {
        let parser = EntryParser::on_disk(MarkdownOptions::default());
        let report = parse_entries(&parser, Vec::new(), &SiteContext::new("/"));
        assert!(report.is_clean());
        assert!(report.entries.is_empty());
    }
}

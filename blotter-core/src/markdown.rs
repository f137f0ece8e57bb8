//! Markdown to HTML expansion for entries carrying `format: markdown`.

use pulldown_cmark::{Options, Parser, html};
use serde::Deserialize;

/// Turns a raw Markdown body into HTML. Rendering never fails.
pub trait MarkdownRenderer {
    fn render(&self, raw: &str) -> String;
}

/// Extensions enabled on top of plain CommonMark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub task_lists: bool,
}

impl Default for MarkdownOptions {
    /// Every extension on. Bare URLs are not autolinked.
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
        }
    }
}

impl MarkdownOptions {
    /// Plain CommonMark, no extensions.
    pub fn none() -> Self {
        Self {
            tables: false,
            footnotes: false,
            strikethrough: false,
            task_lists: false,
        }
    }

    fn to_pulldown_options(self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        opts
    }
}

/// `pulldown-cmark` backed renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark {
    pub options: MarkdownOptions,
}

impl CommonMark {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }
}

impl MarkdownRenderer for CommonMark {
    fn render(&self, raw: &str) -> String {
        let parser = Parser::new_ext(raw, self.options.to_pulldown_options());
        let mut out = String::with_capacity(raw.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

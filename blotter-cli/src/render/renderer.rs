use blotter_core::{Entry, EntryError};
use std::error::Error;
use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color, Stylize},
};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            date_format: "%a, %d %b %Y %H:%M".to_string(),
            use_color: true,
            short_mode: false,
        }
    }
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: skin(),
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_entry_line(&self, entry: &Entry) {
        let mut date = entry.date.format(&self.opts.date_format).to_string();
        let mut title = entry.title.clone();
        let mut link = entry.link.clone();
        let mut tags = String::new();
        if !entry.tags.is_empty() {
            tags = format!("[{}]", entry.tags.join(", "));
        }
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            title = title.with(Color::Yellow).to_string();
            link = link.with(Color::Blue).to_string();
            tags = tags.with(Color::Green).to_string();
        }
        println!("{date} - {title} {link} {tags}");
    }

    pub fn print_entries(&self, entries: &[Entry]) {
        if entries.is_empty() {
            self.print_info("No entries parsed.");
            return;
        }

        for (i, entry) in entries.iter().enumerate() {
            if self.opts.short_mode {
                self.print_entry_line(entry);
                continue;
            }

            let date = entry.date.format(&self.opts.date_format);
            let mut md = format!("## {}\n", entry.title.trim());
            md.push_str(&format!("* date: {date}\n"));
            md.push_str(&format!("* link: `{}`\n", entry.link));
            md.push_str(&format!("* source: `{}`\n", entry.path.display()));
            if !entry.tags.is_empty() {
                let tags: Vec<String> = entry.tags.iter().map(|t| format!("`{t}`")).collect();
                md.push_str(&format!("* tags: {}\n", tags.join(" ")));
            }
            md.push_str(&format!("* comments: {}\n", entry.comments.len()));
            self.print_md(&md);

            if i + 1 < entries.len() {
                println!();
            }
        }
    }

    pub fn print_errors(&self, errors: &[EntryError]) {
        if errors.is_empty() {
            return;
        }
        self.print_md("\n# Errors:\n");
        for error in errors {
            self.print_md(&format!("* {}\n", error_chain(error)));
        }
    }
}

/// An error followed by each of its sources, joined with `: `.
pub fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}

fn skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.headers[1].set_fg(Color::Yellow);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.bullet.set_fg(Color::DarkGrey);
    skin.inline_code.set_fg(Color::Green);
    skin
}

mod cli;
mod render;

use anyhow::{Result, bail};
use blotter_core::{Config, EntryParser, ParseReport, SiteContext, parse_entries};
use clap::Parser;
use cli::Cli;
use render::{RenderOptions, Renderer, error_chain};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("blotter: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BLOTTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(prefix) = cli.prefix {
        config.link_prefix = prefix;
    }
    config.comment_files.extend(cli.comments);

    let site = SiteContext::from(&config);
    let parser = EntryParser::on_disk(config.markdown);
    let total = cli.entries.len();

    let report = if cli.keep_going {
        parse_entries(&parser, cli.entries, &site)
    } else {
        let mut entries = Vec::with_capacity(total);
        for path in &cli.entries {
            entries.push(parser.parse(path, &site)?);
        }
        ParseReport {
            entries,
            errors: Vec::new(),
        }
    };

    let renderer = Renderer::new(RenderOptions {
        use_color: cli.color.enabled() && !cli.json,
        short_mode: cli.short,
        ..RenderOptions::default()
    });

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.entries)?);
        for error in &report.errors {
            eprintln!("blotter: {}", error_chain(error));
        }
    } else {
        renderer.print_entries(&report.entries);
        renderer.print_errors(&report.errors);
    }

    if !report.is_clean() {
        bail!("{} of {} entries failed to parse", report.errors.len(), total);
    }
    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

use crate::render::ColorMode;

/// blotter — parse flat-file blog entries
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Entry files to parse (header block, blank line, body).
    #[arg(required = true)]
    pub entries: Vec<PathBuf>,
    /// Link prefix prepended to every entry slug (e.g. `/blog/`).
    /// Overrides `link_prefix` from the config file.
    #[arg(long, env = "BLOTTER_PREFIX")]
    pub prefix: Option<String>,
    /// Candidate comment file. Repeat for several; added after the configured ones.
    #[arg(long = "comment", value_name = "PATH")]
    pub comments: Vec<PathBuf>,
    /// Read this config file instead of the default locations.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Report entries that fail to parse and carry on with the rest.
    #[arg(long, short)]
    pub keep_going: bool,
    /// Print parsed entries as JSON.
    #[arg(long, conflicts_with = "short")]
    pub json: bool,
    /// Only print one line per entry.
    #[arg(long, short)]
    pub short: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mindmap",
    version,
    about = "Inspect a mind-map document: search, navigate and lay out nodes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Mind-map JSON document (defaults to $MINDMAP_DATA_PATH or assets/data/mind-map-data.json).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Log level for file logging (trace|debug|info|warn|error). Needs --log-dir.
    #[arg(long = "log-level", value_name = "LEVEL", global = true, requires = "log_dir")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging stays off without it.
    #[arg(long = "log-dir", value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank nodes matching a query.
    Search(SearchArgs),

    /// Show breadcrumbs and sidebar content for a selection.
    Show(ShowArgs),

    /// Print circular positions of the domain nodes.
    Layout,

    /// Print the core library version.
    Version,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Free-text query; at least two characters.
    #[arg(value_name = "QUERY")]
    pub query: String,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Node ids to select in order, like successive clicks.
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,
}

use chemgraph::core::builder::BackendKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "chemgraph CLI - Inspect molecular graphs and walk their rings.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a structure file and summarize its contents and rings.
    Inspect(InspectArgs),
    /// Print the bonds of one ring in traversal order.
    Walk(WalkArgs),
}

/// Options shared by every command that reads a structure file.
#[derive(Args, Debug, Clone)]
pub struct StructureArgs {
    /// Path to the structure file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Override the object builder backend named in the structure file.
    #[arg(short, long, value_name = "BACKEND")]
    pub backend: Option<BackendKind>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub structure: StructureArgs,
}

/// Arguments for the `walk` subcommand.
#[derive(Args, Debug)]
pub struct WalkArgs {
    #[command(flatten)]
    pub structure: StructureArgs,

    /// Index of the ring to walk, in structure file order.
    #[arg(short, long, default_value_t = 0, value_name = "INDEX")]
    pub ring: usize,

    /// Index of the starting bond within the ring.
    #[arg(long, default_value_t = 0, value_name = "INDEX")]
    pub bond: usize,

    /// Leave the starting bond through its first atom instead of its second.
    #[arg(long)]
    pub reverse: bool,
}

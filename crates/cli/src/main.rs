mod cmd;
mod logging;

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mdbundle",
    version,
    about = "Export a note and everything it links to as a self-contained bundle"
)]
pub struct Cli {
    /// Name of the starting note, with or without extension
    #[arg(short = 'n', long = "name")]
    pub name: String,

    /// Vault root to search (defaults to the current directory)
    #[arg(long)]
    pub vault: Option<PathBuf>,

    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum number of links followed from the starting note
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Only follow the last link on each line
    #[arg(long)]
    pub single_link_per_line: bool,

    /// Print the files that would be exported and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry run as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_from(normalize_legacy_args(std::env::args_os()));
    cmd::export::run(cli)
}

/// Rewrite the single-dash `-vault` spelling into `--vault`.
fn normalize_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-vault" {
                return OsString::from("--vault");
            }
            match arg.to_str().and_then(|s| s.strip_prefix("-vault=")) {
                Some(value) => OsString::from(format!("--vault={value}")),
                None => arg,
            }
        })
        .collect()
}
